use super::{
    AutoscalerRecord, CronJobRecord, DisruptionBudgetRecord, MeshState, NamespaceInfo,
    NodePoolSummary, PodHealthGroup, PodRecord, VolumeClaimRecord, WorkloadRecord,
};

/// Everything the collector gathered in one run
///
/// Each field is written by exactly one collection step and only read
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClusterSnapshot {
    pub kubernetes_version: String,
    pub node_pools: Vec<NodePoolSummary>,
    pub namespaces: Vec<NamespaceInfo>,
    pub mesh: MeshState,
    pub deployments: Vec<WorkloadRecord>,
    pub statefulsets: Vec<WorkloadRecord>,
    pub cronjobs: Vec<CronJobRecord>,
    pub daemonsets: Vec<WorkloadRecord>,
    pub pods: Vec<PodRecord>,
    pub pod_groups: Vec<PodHealthGroup>,
    pub autoscalers: Vec<AutoscalerRecord>,
    pub disruption_budgets: Vec<DisruptionBudgetRecord>,
    pub volume_claims: Vec<VolumeClaimRecord>,
}
