//! Report read model consumed by every formatter

use super::report_summary::ReportSummary;
use super::row_status::Row;
use crate::cluster_report::domain::{
    AutoscalerRecord, CronJobRecord, DisruptionBudgetRecord, MeshState, NamespaceInfo,
    NodePoolSummary, PodRecord, VolumeClaimRecord, WorkloadRecord,
};
use serde::Serialize;

/// Main read model for a cluster report
///
/// Field names are the top-level keys of the JSON document and the names the
/// HTML and Markdown templates refer to.
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: MetadataView,
    pub summary: ReportSummary,
    pub node_pools: Vec<Row<NodePoolSummary>>,
    pub namespaces: Vec<Row<NamespaceInfo>>,
    pub istio: MeshState,
    pub workloads: WorkloadsView,
    pub pod_health: Vec<PodGroupView>,
    pub autoscaling: AutoscalingView,
    pub storage: StorageView,
}

/// View representation of the report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataView {
    pub cluster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// `all namespaces` or `namespace <name>`
    pub scope: String,
    pub kubernetes_version: String,
    /// RFC 3339, UTC
    pub collected_at: String,
    /// `YYYY-mm-dd HH:MM:SS UTC`
    pub collected_at_display: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkloadsView {
    pub deployments: Vec<Row<WorkloadRecord>>,
    pub statefulsets: Vec<Row<WorkloadRecord>>,
    pub cronjobs: Vec<Row<CronJobRecord>>,
    pub daemonsets: Vec<Row<WorkloadRecord>>,
}

/// Pods of one namespace, with row statuses
#[derive(Debug, Clone, Serialize)]
pub struct PodGroupView {
    pub namespace: String,
    pub total: usize,
    pub running: usize,
    pub sidecars: usize,
    pub pods: Vec<Row<PodRecord>>,
    pub problem_pods: Vec<Row<PodRecord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutoscalingView {
    pub hpa: Vec<Row<AutoscalerRecord>>,
    pub pdb: Vec<Row<DisruptionBudgetRecord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageView {
    pub pvcs: Vec<Row<VolumeClaimRecord>>,
}
