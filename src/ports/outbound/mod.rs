/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cluster API, file system, console).
pub mod cluster_gateway;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use cluster_gateway::ClusterGateway;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
