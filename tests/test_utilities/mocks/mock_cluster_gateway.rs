use async_trait::async_trait;
use kube_report::cluster_report::domain::{ResourceKind, VersionQuery};
use kube_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ClusterGateway answering from canned listings
///
/// Kinds without a listing fail like a missing CRD does.
#[derive(Clone, Default)]
pub struct MockClusterGateway {
    listings: HashMap<ResourceKind, String>,
    namespaces: Vec<String>,
    unreachable: bool,
    server_version: Option<String>,
    pub queries: Arc<Mutex<Vec<(ResourceKind, Scope)>>>,
}

impl MockClusterGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, kind: ResourceKind, json: &str) -> Self {
        self.listings.insert(kind, json.to_string());
        self
    }

    /// Namespaces answered by the existence check
    pub fn with_namespace(mut self, name: &str) -> Self {
        self.namespaces.push(name.to_string());
        self
    }

    pub fn with_server_version(mut self, git_version: &str) -> Self {
        self.server_version = Some(format!(
            r#"{{"serverVersion": {{"gitVersion": "{}"}}}}"#,
            git_version
        ));
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl ClusterGateway for MockClusterGateway {
    async fn list(&self, kind: ResourceKind, scope: &Scope) -> Result<String> {
        self.queries.lock().unwrap().push((kind, scope.clone()));
        if self.unreachable {
            anyhow::bail!("Unable to connect to the server");
        }
        self.listings.get(&kind).cloned().ok_or_else(|| {
            anyhow::anyhow!(
                "error: the server doesn't have a resource type \"{}\"",
                kind.api_resource()
            )
        })
    }

    async fn namespace_exists(&self, name: &str) -> Result<bool> {
        if self.unreachable {
            anyhow::bail!("Unable to connect to the server");
        }
        Ok(self.namespaces.iter().any(|ns| ns == name))
    }

    async fn get_namespace(&self, name: &str) -> Result<String> {
        if self.unreachable {
            anyhow::bail!("Unable to connect to the server");
        }
        if !self.namespaces.iter().any(|ns| ns == name) {
            anyhow::bail!("Error from server (NotFound): namespaces \"{}\" not found", name);
        }
        Ok(format!(r#"{{"kind": "Namespace", "metadata": {{"name": "{}"}}}}"#, name))
    }

    async fn server_version(&self, query: VersionQuery) -> Result<String> {
        match (query, &self.server_version) {
            (VersionQuery::Structured, Some(raw)) => Ok(raw.clone()),
            _ => anyhow::bail!("version query failed"),
        }
    }
}
