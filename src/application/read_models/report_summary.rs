//! Counts shared by every output format

use crate::cluster_report::domain::ClusterSnapshot;
use crate::cluster_report::policies::SchedulingPolicy;
use serde::Serialize;

/// Derived values computed once per report
///
/// Every figure is a count or filter over the snapshot records, so the
/// formats cannot disagree with each other or with the detail tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub kubernetes_version: String,
    pub total_nodes: usize,
    pub ready_nodes: usize,
    pub node_pools: usize,
    pub total_namespaces: usize,
    pub total_pods: usize,
    pub problem_pods: usize,
    pub sidecar_pods: usize,
    /// `floor(100 * sidecar_pods / total_pods)`, 0 without pods
    pub sidecar_coverage: usize,
    pub total_deployments: usize,
    pub healthy_deployments: usize,
    pub total_workloads: usize,
    pub istio_installed: bool,
    pub config_warning: bool,
    pub flagged_namespaces: Vec<String>,
}

impl ReportSummary {
    pub fn from_snapshot(snapshot: &ClusterSnapshot, policy: &SchedulingPolicy) -> Self {
        let total_pods = snapshot.pods.len();
        let problem_pods = snapshot.pods.iter().filter(|p| p.problem()).count();
        let sidecar_pods = snapshot.pods.iter().filter(|p| p.has_sidecar()).count();
        let flagged_namespaces = policy.flagged_namespaces(&snapshot.namespaces);

        Self {
            kubernetes_version: snapshot.kubernetes_version.clone(),
            total_nodes: snapshot.node_pools.iter().map(|p| p.count).sum(),
            ready_nodes: snapshot.node_pools.iter().map(|p| p.ready).sum(),
            node_pools: snapshot.node_pools.len(),
            total_namespaces: snapshot.namespaces.len(),
            total_pods,
            problem_pods,
            sidecar_pods,
            sidecar_coverage: coverage_percent(sidecar_pods, total_pods),
            total_deployments: snapshot.deployments.len(),
            healthy_deployments: snapshot.deployments.iter().filter(|d| d.healthy()).count(),
            total_workloads: snapshot.deployments.len()
                + snapshot.statefulsets.len()
                + snapshot.cronjobs.len()
                + snapshot.daemonsets.len(),
            istio_installed: snapshot.mesh.is_installed(),
            config_warning: !flagged_namespaces.is_empty(),
            flagged_namespaces,
        }
    }
}

/// Integer percentage rounded down
fn coverage_percent(part: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        part * 100 / total
    }
}
