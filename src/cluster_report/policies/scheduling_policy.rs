use crate::cluster_report::domain::NamespaceInfo;

/// Node selectors that pin user workloads onto system-reserved nodes
pub const DEFAULT_SUSPICIOUS_NODE_SELECTORS: [&str; 3] = [
    "kubernetes.azure.com/mode=system",
    "node-role.kubernetes.io/control-plane",
    "node-role.kubernetes.io/master",
];

/// Namespaces that legitimately schedule onto system nodes
const SYSTEM_NAMESPACES: [&str; 3] = ["kube-system", "kube-public", "kube-node-lease"];

/// SchedulingPolicy flags namespace node selectors that target system pools
#[derive(Debug, Clone)]
pub struct SchedulingPolicy {
    patterns: Vec<String>,
}

impl SchedulingPolicy {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn is_suspicious(&self, node_selector: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| node_selector.contains(pattern.as_str()))
    }

    /// Names of the namespaces whose node-selector annotation matches a
    /// suspicious pattern, in input order
    pub fn flagged_namespaces(&self, namespaces: &[NamespaceInfo]) -> Vec<String> {
        namespaces
            .iter()
            .filter(|ns| !SYSTEM_NAMESPACES.contains(&ns.name()))
            .filter(|ns| ns.node_selector().is_some_and(|s| self.is_suspicious(s)))
            .map(|ns| ns.name().to_string())
            .collect()
    }
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_SUSPICIOUS_NODE_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}
