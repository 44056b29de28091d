use serde::Serialize;

/// HorizontalPodAutoscaler projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoscalerRecord {
    pub namespace: String,
    pub name: String,
    /// `Kind/name` of the scale target
    pub target: String,
    pub min_replicas: u32,
    pub max_replicas: u32,
    pub current_replicas: u32,
}

impl AutoscalerRecord {
    /// Autoscaler pinned at its maximum cannot absorb more load
    pub fn at_max(&self) -> bool {
        self.max_replicas > 0 && self.current_replicas >= self.max_replicas
    }
}

/// PodDisruptionBudget projection
///
/// `min_available` and `max_unavailable` are int-or-percent strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisruptionBudgetRecord {
    pub namespace: String,
    pub name: String,
    pub min_available: Option<String>,
    pub max_unavailable: Option<String>,
    pub disruptions_allowed: u32,
}

impl DisruptionBudgetRecord {
    /// No voluntary eviction is currently possible (node drains will block)
    pub fn blocks_eviction(&self) -> bool {
        self.disruptions_allowed == 0
    }
}
