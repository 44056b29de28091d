use crate::cluster_report::domain::{ClusterSnapshot, ReportMetadata};

/// ReportResponse - Result of the collection use case
///
/// Carries everything collected in one run. Rendering builds its read model
/// from this value and never goes back to the cluster.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub metadata: ReportMetadata,
    pub snapshot: ClusterSnapshot,
}

impl ReportResponse {
    pub fn new(metadata: ReportMetadata, snapshot: ClusterSnapshot) -> Self {
        Self { metadata, snapshot }
    }
}
