use serde::Serialize;
use std::collections::BTreeMap;

/// Placement settings copied from a pod template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub tolerations: Vec<String>,
    pub node_selector: BTreeMap<String, String>,
}

/// Deployment, StatefulSet or DaemonSet snapshot
///
/// `healthy` is decided here, once, and every output format reads it back
/// verbatim. For DaemonSets `desired` is `desiredNumberScheduled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadRecord {
    name: String,
    namespace: String,
    desired: u32,
    ready: u32,
    images: Vec<String>,
    tolerations: Vec<String>,
    node_selector: BTreeMap<String, String>,
    #[serde(skip)]
    labels: BTreeMap<String, String>,
    healthy: bool,
}

impl WorkloadRecord {
    pub fn new(
        name: String,
        namespace: String,
        desired: u32,
        ready: u32,
        images: Vec<String>,
        placement: Placement,
    ) -> Self {
        Self {
            name,
            namespace,
            desired,
            ready,
            images,
            tolerations: placement.tolerations,
            node_selector: placement.node_selector,
            labels: BTreeMap::new(),
            healthy: ready == desired,
        }
    }

    /// Attaches the object's own labels
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn desired(&self) -> u32 {
        self.desired
    }

    pub fn ready(&self) -> u32 {
        self.ready
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn tolerations(&self) -> &[String] {
        &self.tolerations
    }

    pub fn node_selector(&self) -> &BTreeMap<String, String> {
        &self.node_selector
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn healthy(&self) -> bool {
        self.healthy
    }
}

/// CronJob snapshot
///
/// CronJobs have no replica counts. A job counts as healthy unless it is
/// suspended; suspension is rendered as a warning rather than a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronJobRecord {
    name: String,
    namespace: String,
    schedule: String,
    suspended: bool,
    active: usize,
    last_schedule: Option<String>,
    tolerations: Vec<String>,
    node_selector: BTreeMap<String, String>,
    healthy: bool,
}

impl CronJobRecord {
    pub fn new(
        name: String,
        namespace: String,
        schedule: String,
        suspended: bool,
        active: usize,
        last_schedule: Option<String>,
        placement: Placement,
    ) -> Self {
        Self {
            name,
            namespace,
            schedule,
            suspended,
            active,
            last_schedule,
            tolerations: placement.tolerations,
            node_selector: placement.node_selector,
            healthy: !suspended,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn last_schedule(&self) -> Option<&str> {
        self.last_schedule.as_deref()
    }

    pub fn healthy(&self) -> bool {
        self.healthy
    }
}
