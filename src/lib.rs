//! kube-report - Cluster health reports from kubectl listings
//!
//! This library queries a Kubernetes cluster through `kubectl`, maps the JSON
//! listings into typed records and renders them as an HTML, JSON or Markdown
//! report, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`cluster_report`): Records, mapping, policies and services
//! - **Application Layer** (`application`): Use cases, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): kubectl, console, filesystem and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use kube_report::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let gateway = KubectlGateway::new("kubectl", "prod-aks", Duration::from_secs(60));
//! let progress_reporter = StderrProgressReporter::new();
//! let use_case = CollectClusterReportUseCase::new(gateway, progress_reporter);
//!
//! let request = ReportRequest::new(
//!     "prod-aks".to_string(),
//!     Scope::Cluster,
//!     vec!["istio".to_string()],
//! );
//! let response = use_case.execute(request).await?;
//!
//! let read_model = ReportReadModelBuilder::build(response, &SchedulingPolicy::default());
//! let output = JsonFormatter::new().format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cluster_report;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::kubectl::KubectlGateway;
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::CollectClusterReportUseCase;
    pub use crate::cluster_report::domain::{ClusterSnapshot, ReportMetadata, Scope};
    pub use crate::cluster_report::policies::SchedulingPolicy;
    pub use crate::ports::outbound::{
        ClusterGateway, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
