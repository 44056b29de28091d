use crate::application::dto::{ReportRequest, ReportResponse};
use crate::cluster_report::domain::{
    ClusterSnapshot, MeshState, NamespaceInfo, NodePoolSummary, ResourceKind, Scope,
    WorkloadRecord,
};
use crate::cluster_report::mapping;
use crate::cluster_report::services::{
    MeshDetector, MetadataGenerator, NodePoolAggregator, PodHealthGrouper, VersionDetector,
    VERSION_NOT_AVAILABLE,
};
use crate::ports::outbound::{ClusterGateway, ProgressReporter};
use crate::shared::error::ReportError;
use crate::shared::Result;
use futures::join;

/// Mapping function from a raw listing to records of one kind
type MapFn<T> = fn(&str) -> Result<Vec<T>>;

/// CollectClusterReportUseCase - Core use case for collecting a cluster report
///
/// Issues the fixed set of read-only queries against the cluster and maps
/// every listing into records. Only the namespace precondition is fatal; a
/// failing or malformed listing degrades to an empty collection and the run
/// goes on.
///
/// # Type Parameters
/// * `G` - ClusterGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectClusterReportUseCase<G, PR> {
    gateway: G,
    progress_reporter: PR,
}

impl<G, PR> CollectClusterReportUseCase<G, PR>
where
    G: ClusterGateway,
    PR: ProgressReporter,
{
    /// Creates a new CollectClusterReportUseCase with injected dependencies
    pub fn new(gateway: G, progress_reporter: PR) -> Self {
        Self {
            gateway,
            progress_reporter,
        }
    }

    /// Executes the collection use case
    ///
    /// # Arguments
    /// * `request` - Cluster, scope and mesh detection settings
    ///
    /// # Returns
    /// ReportResponse holding the run metadata and the collected snapshot
    ///
    /// # Errors
    /// Returns `ReportError::NamespaceNotFound` when the scoped namespace does
    /// not exist, and `ReportError::ClusterUnreachable` when its existence
    /// cannot be checked
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Fail fast on a missing namespace, before anything is queried
        self.check_namespace(&request).await?;

        let metadata =
            MetadataGenerator::generate_default(&request.cluster, request.scope.namespace());
        let scope = &request.scope;

        // Step 2: Cluster-wide facts
        let kubernetes_version = self.fetch_version().await;
        let node_pools = self.fetch_node_pools().await;

        // Step 3: Namespaces and the mesh detected from them
        let all_namespaces = self.fetch_namespaces().await;
        let mesh = self
            .detect_mesh(&all_namespaces, &request.mesh_namespace_patterns, scope)
            .await;
        let mut namespaces: Vec<NamespaceInfo> = all_namespaces
            .into_iter()
            .filter(|ns| scope.includes(ns.name()))
            .collect();
        if let Some(name) = scope.namespace().filter(|_| namespaces.is_empty()) {
            namespaces.extend(self.fetch_scoped_namespace(name).await);
        }

        // Step 4: Workloads, queried concurrently
        self.progress_reporter
            .report_step(&format!("🔍 Querying workloads in {}...", scope));
        let (deployments, statefulsets, cronjobs, daemonsets) = join!(
            self.collect(ResourceKind::Deployments, scope, mapping::deployments),
            self.collect(ResourceKind::StatefulSets, scope, mapping::statefulsets),
            self.collect(ResourceKind::CronJobs, scope, mapping::cronjobs),
            self.collect(ResourceKind::DaemonSets, scope, mapping::daemonsets),
        );
        self.progress_reporter.report(&format!(
            "✅ {} deployment(s), {} statefulset(s), {} cronjob(s), {} daemonset(s)",
            deployments.len(),
            statefulsets.len(),
            cronjobs.len(),
            daemonsets.len()
        ));

        // Step 5: Pods, grouped per namespace
        self.progress_reporter
            .report_step(&format!("🔍 Querying pods in {}...", scope));
        let pods = self.collect(ResourceKind::Pods, scope, mapping::pods).await;
        let pod_groups = PodHealthGrouper::group(&pods);
        self.progress_reporter.report(&format!(
            "✅ {} pod(s) in {} namespace(s)",
            pods.len(),
            pod_groups.len()
        ));

        // Step 6: Autoscaling, queried concurrently
        self.progress_reporter
            .report_step("🔍 Querying autoscalers and disruption budgets...");
        let (autoscalers, disruption_budgets) = join!(
            self.collect(
                ResourceKind::HorizontalPodAutoscalers,
                scope,
                mapping::autoscalers
            ),
            self.collect(
                ResourceKind::PodDisruptionBudgets,
                scope,
                mapping::disruption_budgets
            ),
        );
        self.progress_reporter.report(&format!(
            "✅ {} HPA(s), {} PDB(s)",
            autoscalers.len(),
            disruption_budgets.len()
        ));

        // Step 7: Storage
        self.progress_reporter
            .report_step("🔍 Querying persistent volume claims...");
        let volume_claims = self
            .collect(
                ResourceKind::PersistentVolumeClaims,
                scope,
                mapping::volume_claims,
            )
            .await;
        self.progress_reporter
            .report(&format!("✅ {} PVC(s)", volume_claims.len()));

        let snapshot = ClusterSnapshot {
            kubernetes_version,
            node_pools,
            namespaces,
            mesh,
            deployments,
            statefulsets,
            cronjobs,
            daemonsets,
            pods,
            pod_groups,
            autoscalers,
            disruption_budgets,
            volume_claims,
        };

        Ok(ReportResponse::new(metadata, snapshot))
    }

    async fn check_namespace(&self, request: &ReportRequest) -> Result<()> {
        let Some(namespace) = request.scope.namespace() else {
            return Ok(());
        };

        self.progress_reporter
            .report_step(&format!("🔍 Checking namespace '{}'...", namespace));

        match self.gateway.namespace_exists(namespace).await {
            Ok(true) => {
                self.progress_reporter
                    .report(&format!("✅ Namespace '{}' found", namespace));
                Ok(())
            }
            Ok(false) => Err(ReportError::NamespaceNotFound {
                cluster: request.cluster.clone(),
                namespace: namespace.to_string(),
            }
            .into()),
            Err(e) => Err(ReportError::ClusterUnreachable {
                cluster: request.cluster.clone(),
                details: format!("{:#}", e),
            }
            .into()),
        }
    }

    /// Tries each version strategy in order, falling back to the sentinel
    async fn fetch_version(&self) -> String {
        self.progress_reporter
            .report_step("🔍 Detecting Kubernetes version...");

        for strategy in VersionDetector::strategies() {
            match self.gateway.server_version(strategy.query).await {
                Ok(raw) => {
                    if let Some(version) = strategy.parse(&raw) {
                        self.progress_reporter
                            .report(&format!("✅ Kubernetes version: {}", version));
                        return version;
                    }
                    tracing::debug!(query = ?strategy.query, "version output did not match");
                }
                Err(e) => {
                    tracing::debug!(query = ?strategy.query, error = %e, "version query failed");
                }
            }
        }

        tracing::warn!("no version strategy succeeded");
        self.progress_reporter
            .report_warning("Kubernetes version could not be determined");
        VERSION_NOT_AVAILABLE.to_string()
    }

    async fn fetch_node_pools(&self) -> Vec<NodePoolSummary> {
        self.progress_reporter.report_step("🔍 Querying nodes...");
        let nodes = self
            .collect(ResourceKind::Nodes, &Scope::Cluster, mapping::nodes)
            .await;
        let pools = NodePoolAggregator::aggregate(&nodes);
        self.progress_reporter.report(&format!(
            "✅ {} node(s) in {} pool(s)",
            nodes.len(),
            pools.len()
        ));
        pools
    }

    async fn fetch_namespaces(&self) -> Vec<NamespaceInfo> {
        self.progress_reporter.report_step("🔍 Querying namespaces...");
        let namespaces = self
            .collect(ResourceKind::Namespaces, &Scope::Cluster, mapping::namespaces)
            .await;
        self.progress_reporter
            .report(&format!("✅ {} namespace(s)", namespaces.len()));
        namespaces
    }

    /// Fetches the scoped namespace on its own when the cluster-wide listing
    /// did not yield it
    async fn fetch_scoped_namespace(&self, name: &str) -> Option<NamespaceInfo> {
        let fetched = match self.gateway.get_namespace(name).await {
            Ok(raw) => mapping::namespace(&raw),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(namespace) => Some(namespace),
            Err(e) => {
                tracing::warn!(
                    namespace = %name,
                    error = %format!("{:#}", e),
                    "scoped namespace could not be fetched"
                );
                self.progress_reporter.report_warning(&format!(
                    "Could not collect namespace '{}': {}. Continuing without it.",
                    name, e
                ));
                None
            }
        }
    }

    /// Locates the mesh control plane among all namespaces of the cluster
    ///
    /// Mesh resources are only queried once a control-plane namespace is
    /// found; they follow the run scope like any other namespaced kind.
    async fn detect_mesh(
        &self,
        namespaces: &[NamespaceInfo],
        patterns: &[String],
        scope: &Scope,
    ) -> MeshState {
        self.progress_reporter
            .report_step("🔍 Detecting service mesh...");

        let names: Vec<String> = namespaces.iter().map(|ns| ns.name().to_string()).collect();

        // First candidate hosting istiod, else the first candidate
        let mut selected: Option<(&str, Vec<WorkloadRecord>)> = None;
        for candidate in MeshDetector::candidate_namespaces(&names, patterns) {
            let deployments = self
                .collect(
                    ResourceKind::Deployments,
                    &Scope::Namespace(candidate.to_string()),
                    mapping::deployments,
                )
                .await;
            let hosts_control_plane = MeshDetector::control_plane(&deployments).is_some();
            if hosts_control_plane || selected.is_none() {
                selected = Some((candidate, deployments));
            }
            if hosts_control_plane {
                break;
            }
        }

        let Some((mesh_namespace, control_plane)) = selected else {
            self.progress_reporter.report("✅ Istio is not installed");
            return MeshState::not_installed();
        };
        let version = MeshDetector::control_plane_version(&control_plane);

        let (gateways, virtual_services, destination_rules) = join!(
            self.collect(ResourceKind::IstioGateways, scope, mapping::gateways),
            self.collect(ResourceKind::VirtualServices, scope, mapping::virtual_services),
            self.collect(ResourceKind::DestinationRules, scope, mapping::destination_rules),
        );

        self.progress_reporter.report(&format!(
            "✅ Istio {} in '{}': {} gateway(s), {} virtual service(s), {} destination rule(s)",
            version,
            mesh_namespace,
            gateways.len(),
            virtual_services.len(),
            destination_rules.len()
        ));

        MeshState::installed(
            mesh_namespace.to_string(),
            version,
            gateways,
            virtual_services,
            destination_rules,
        )
    }

    /// Lists one kind and maps it, degrading any failure to an empty collection
    async fn collect<T>(&self, kind: ResourceKind, scope: &Scope, map: MapFn<T>) -> Vec<T> {
        let mapped = match self.gateway.list(kind, scope).await {
            Ok(raw) => map(&raw),
            Err(e) => Err(e),
        };

        match mapped {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    kind = %kind,
                    error = %format!("{:#}", e),
                    "query degraded to an empty collection"
                );
                self.progress_reporter.report_warning(&format!(
                    "Could not collect {}: {}. Continuing without them.",
                    kind, e
                ));
                Vec::new()
            }
        }
    }
}
