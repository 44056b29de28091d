use crate::cluster_report::domain::Scope;

/// ReportRequest - Internal request DTO for the collection use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Kube context of the cluster to report on
    pub cluster: String,
    /// Namespace scope applied to every namespaced query
    pub scope: Scope,
    /// Substrings identifying the mesh control-plane namespace
    pub mesh_namespace_patterns: Vec<String>,
}

impl ReportRequest {
    pub fn new(cluster: String, scope: Scope, mesh_namespace_patterns: Vec<String>) -> Self {
        Self {
            cluster,
            scope,
            mesh_namespace_patterns,
        }
    }
}
