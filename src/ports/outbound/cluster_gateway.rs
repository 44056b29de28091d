use crate::cluster_report::domain::{ResourceKind, Scope, VersionQuery};
use crate::shared::Result;
use async_trait::async_trait;

/// ClusterGateway port for reading cluster state
///
/// This port abstracts the cluster-management tool used to query the
/// Kubernetes API. It returns raw documents only; decoding them into
/// records is done by the core so that every adapter shares one mapping.
///
/// # Async Support
/// All methods are async so that independent queries can run concurrently.
#[async_trait]
pub trait ClusterGateway: Send + Sync {
    /// Lists all resources of a kind within a scope
    ///
    /// Cluster-scoped kinds (nodes, namespaces) ignore the scope.
    ///
    /// # Returns
    /// The raw JSON `List` document
    ///
    /// # Errors
    /// Returns an error if the query fails, times out or the tool cannot be
    /// started
    async fn list(&self, kind: ResourceKind, scope: &Scope) -> Result<String>;

    /// Checks whether a namespace exists
    ///
    /// # Returns
    /// `Ok(false)` when the API answers that the namespace is not found
    ///
    /// # Errors
    /// Returns an error for any other failure (unreachable cluster, bad
    /// credentials, unknown context)
    async fn namespace_exists(&self, name: &str) -> Result<bool>;

    /// Fetches a single namespace object
    ///
    /// # Returns
    /// The raw JSON `Namespace` document
    async fn get_namespace(&self, name: &str) -> Result<String>;

    /// Asks the API server for its version using one query form
    ///
    /// # Returns
    /// The raw output of the version query
    async fn server_version(&self, query: VersionQuery) -> Result<String>;
}
