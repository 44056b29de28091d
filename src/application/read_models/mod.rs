//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the collected cluster state.

pub mod report_read_model;
pub mod report_read_model_builder;
pub mod report_summary;
pub mod row_status;

pub use report_read_model::{
    AutoscalingView, MetadataView, PodGroupView, ReportReadModel, StorageView, WorkloadsView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
pub use report_summary::ReportSummary;
pub use row_status::{Row, RowStatus};
