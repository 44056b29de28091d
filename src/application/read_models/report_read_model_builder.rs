//! Builder for constructing ReportReadModel from a collection result

use super::report_read_model::{
    AutoscalingView, MetadataView, PodGroupView, ReportReadModel, StorageView, WorkloadsView,
};
use super::report_summary::ReportSummary;
use super::row_status::{Row, RowStatus};
use crate::application::dto::ReportResponse;
use crate::cluster_report::domain::{NamespaceInfo, PodHealthGroup, ReportMetadata, Scope};
use crate::cluster_report::policies::SchedulingPolicy;

/// Builder for constructing ReportReadModel from a collection result
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model, computing the summary and every row status
    ///
    /// # Arguments
    /// * `response` - Snapshot and metadata of the run
    /// * `policy` - Scheduling policy used to flag namespaces
    pub fn build(response: ReportResponse, policy: &SchedulingPolicy) -> ReportReadModel {
        let summary = ReportSummary::from_snapshot(&response.snapshot, policy);
        let metadata = Self::build_metadata(&response.metadata, &summary.kubernetes_version);
        let snapshot = response.snapshot;
        let namespaces = Self::build_namespaces(snapshot.namespaces, &summary);

        ReportReadModel {
            metadata,
            node_pools: rows(snapshot.node_pools),
            namespaces,
            istio: snapshot.mesh,
            workloads: WorkloadsView {
                deployments: rows(snapshot.deployments),
                statefulsets: rows(snapshot.statefulsets),
                cronjobs: rows(snapshot.cronjobs),
                daemonsets: rows(snapshot.daemonsets),
            },
            pod_health: snapshot
                .pod_groups
                .into_iter()
                .map(Self::build_pod_group)
                .collect(),
            autoscaling: AutoscalingView {
                hpa: rows(snapshot.autoscalers),
                pdb: rows(snapshot.disruption_budgets),
            },
            storage: StorageView {
                pvcs: rows(snapshot.volume_claims),
            },
            summary,
        }
    }

    fn build_metadata(metadata: &ReportMetadata, kubernetes_version: &str) -> MetadataView {
        let scope = Scope::from_namespace(metadata.namespace().map(String::from));
        MetadataView {
            cluster: metadata.cluster().to_string(),
            namespace: metadata.namespace().map(String::from),
            scope: scope.to_string(),
            kubernetes_version: kubernetes_version.to_string(),
            collected_at: metadata
                .collected_at()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
            collected_at_display: metadata
                .collected_at()
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    /// Namespaces flagged by the scheduling policy render as warnings
    fn build_namespaces(
        namespaces: Vec<NamespaceInfo>,
        summary: &ReportSummary,
    ) -> Vec<Row<NamespaceInfo>> {
        namespaces
            .into_iter()
            .map(|ns| {
                let status = if summary.flagged_namespaces.iter().any(|f| f == ns.name()) {
                    RowStatus::Warning
                } else {
                    RowStatus::Healthy
                };
                Row::with_status(ns, status)
            })
            .collect()
    }

    fn build_pod_group(group: PodHealthGroup) -> PodGroupView {
        PodGroupView {
            namespace: group.namespace,
            total: group.total,
            running: group.running,
            sidecars: group.sidecars,
            pods: rows(group.pods),
            problem_pods: rows(group.problem_pods),
        }
    }
}

fn rows<T>(records: Vec<T>) -> Vec<Row<T>>
where
    for<'a> RowStatus: From<&'a T>,
{
    records.into_iter().map(Row::new).collect()
}
