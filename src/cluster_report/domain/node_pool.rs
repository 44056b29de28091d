use serde::Serialize;

/// A single node, normalized from the raw node listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub name: String,
    pub pool: String,
    pub mode: String,
    pub ready: bool,
    pub spot: bool,
    pub taints: Vec<String>,
    pub instance_type: Option<String>,
}

/// Nodes of one pool, aggregated
///
/// `mode`, `spot`, `taints` and `instance_type` come from the first node seen
/// in the pool; pools are expected to be homogeneous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodePoolSummary {
    pub name: String,
    pub mode: String,
    pub count: usize,
    pub ready: usize,
    pub spot: bool,
    pub taints: Vec<String>,
    pub instance_type: Option<String>,
}

impl NodePoolSummary {
    /// Starts a pool summary from its first node
    pub fn from_first(node: &NodeRecord) -> Self {
        Self {
            name: node.pool.clone(),
            mode: node.mode.clone(),
            count: 1,
            ready: usize::from(node.ready),
            spot: node.spot,
            taints: node.taints.clone(),
            instance_type: node.instance_type.clone(),
        }
    }

    /// Adds another node of the same pool
    pub fn absorb(&mut self, node: &NodeRecord) {
        self.count += 1;
        if node.ready {
            self.ready += 1;
        }
    }

    pub fn all_ready(&self) -> bool {
        self.ready == self.count
    }
}
