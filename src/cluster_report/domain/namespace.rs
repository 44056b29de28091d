use serde::Serialize;
use std::collections::BTreeMap;

/// Label enabling classic sidecar injection (`istio-injection=enabled`)
pub const INJECTION_LABEL: &str = "istio-injection";

/// Label selecting a revisioned control plane for injection
pub const REVISION_LABEL: &str = "istio.io/rev";

/// Annotation restricting every pod of the namespace to matching nodes
pub const NODE_SELECTOR_ANNOTATION: &str = "scheduler.alpha.kubernetes.io/node-selector";

/// Namespace snapshot with its mesh and scheduling settings derived once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceInfo {
    name: String,
    labels: BTreeMap<String, String>,
    annotations: BTreeMap<String, String>,
    istio_injection: bool,
    istio_revision: Option<String>,
    node_selector: Option<String>,
}

impl NamespaceInfo {
    /// Builds the namespace record, deriving injection, revision and node
    /// selector from the label and annotation maps
    ///
    /// A revision label enables injection on its own, so `istio_injection` is
    /// true for either `istio-injection=enabled` or a present `istio.io/rev`.
    /// An explicit `istio-injection=disabled` always wins.
    pub fn new(
        name: String,
        labels: BTreeMap<String, String>,
        annotations: BTreeMap<String, String>,
    ) -> Self {
        let istio_revision = labels.get(REVISION_LABEL).cloned();
        let istio_injection = match labels.get(INJECTION_LABEL).map(String::as_str) {
            Some("enabled") => true,
            Some("disabled") => false,
            _ => istio_revision.is_some(),
        };
        let node_selector = annotations
            .get(NODE_SELECTOR_ANNOTATION)
            .filter(|s| !s.is_empty())
            .cloned();

        Self {
            name,
            labels,
            annotations,
            istio_injection,
            istio_revision,
            node_selector,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    pub fn istio_injection(&self) -> bool {
        self.istio_injection
    }

    pub fn istio_revision(&self) -> Option<&str> {
        self.istio_revision.as_deref()
    }

    pub fn node_selector(&self) -> Option<&str> {
        self.node_selector.as_deref()
    }
}
