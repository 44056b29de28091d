use std::fmt;

/// Scope applied uniformly to every namespaced query of a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Every namespace of the cluster
    #[default]
    Cluster,
    /// A single namespace
    Namespace(String),
}

impl Scope {
    pub fn from_namespace(namespace: Option<String>) -> Self {
        match namespace {
            Some(ns) => Scope::Namespace(ns),
            None => Scope::Cluster,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        match self {
            Scope::Cluster => None,
            Scope::Namespace(ns) => Some(ns),
        }
    }

    /// Whether a namespace belongs to this scope
    pub fn includes(&self, namespace: &str) -> bool {
        match self {
            Scope::Cluster => true,
            Scope::Namespace(ns) => ns == namespace,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Cluster => write!(f, "all namespaces"),
            Scope::Namespace(ns) => write!(f, "namespace {}", ns),
        }
    }
}

/// Resource kinds the collector lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Nodes,
    Namespaces,
    Deployments,
    StatefulSets,
    CronJobs,
    DaemonSets,
    Pods,
    HorizontalPodAutoscalers,
    PodDisruptionBudgets,
    PersistentVolumeClaims,
    IstioGateways,
    VirtualServices,
    DestinationRules,
}

impl ResourceKind {
    /// Fully qualified API resource name, unambiguous even when several
    /// CRDs share a short name (`gateways` exists in both Istio and Gateway API)
    pub fn api_resource(&self) -> &'static str {
        match self {
            ResourceKind::Nodes => "nodes",
            ResourceKind::Namespaces => "namespaces",
            ResourceKind::Deployments => "deployments.apps",
            ResourceKind::StatefulSets => "statefulsets.apps",
            ResourceKind::CronJobs => "cronjobs.batch",
            ResourceKind::DaemonSets => "daemonsets.apps",
            ResourceKind::Pods => "pods",
            ResourceKind::HorizontalPodAutoscalers => "horizontalpodautoscalers.autoscaling",
            ResourceKind::PodDisruptionBudgets => "poddisruptionbudgets.policy",
            ResourceKind::PersistentVolumeClaims => "persistentvolumeclaims",
            ResourceKind::IstioGateways => "gateways.networking.istio.io",
            ResourceKind::VirtualServices => "virtualservices.networking.istio.io",
            ResourceKind::DestinationRules => "destinationrules.networking.istio.io",
        }
    }

    /// Cluster-scoped kinds ignore the run scope
    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, ResourceKind::Nodes | ResourceKind::Namespaces)
    }

    /// Human readable plural used in progress messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Nodes => "nodes",
            ResourceKind::Namespaces => "namespaces",
            ResourceKind::Deployments => "deployments",
            ResourceKind::StatefulSets => "statefulsets",
            ResourceKind::CronJobs => "cronjobs",
            ResourceKind::DaemonSets => "daemonsets",
            ResourceKind::Pods => "pods",
            ResourceKind::HorizontalPodAutoscalers => "HPAs",
            ResourceKind::PodDisruptionBudgets => "PDBs",
            ResourceKind::PersistentVolumeClaims => "PVCs",
            ResourceKind::IstioGateways => "Istio gateways",
            ResourceKind::VirtualServices => "virtual services",
            ResourceKind::DestinationRules => "destination rules",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Style of server version query, in the order they are attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionQuery {
    /// `version -o json`
    Structured,
    /// `version --short`, for clients that predate structured output
    Legacy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_namespace() {
        assert_eq!(Scope::from_namespace(None), Scope::Cluster);
        assert_eq!(
            Scope::from_namespace(Some("apps".to_string())),
            Scope::Namespace("apps".to_string())
        );
    }

    #[test]
    fn test_scope_includes() {
        let scoped = Scope::Namespace("apps".to_string());
        assert!(scoped.includes("apps"));
        assert!(!scoped.includes("kube-system"));
        assert!(Scope::Cluster.includes("kube-system"));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::Cluster.to_string(), "all namespaces");
        assert_eq!(
            Scope::Namespace("apps".to_string()).to_string(),
            "namespace apps"
        );
    }

    #[test]
    fn test_cluster_scoped_kinds() {
        assert!(ResourceKind::Nodes.is_cluster_scoped());
        assert!(ResourceKind::Namespaces.is_cluster_scoped());
        assert!(!ResourceKind::Pods.is_cluster_scoped());
        assert!(!ResourceKind::IstioGateways.is_cluster_scoped());
    }

    #[test]
    fn test_istio_kinds_are_fully_qualified() {
        assert_eq!(
            ResourceKind::IstioGateways.api_resource(),
            "gateways.networking.istio.io"
        );
    }
}
