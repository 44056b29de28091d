use crate::cluster_report::domain::{NodePoolSummary, NodeRecord};
use std::collections::BTreeMap;

/// NodePoolAggregator service grouping nodes by pool
///
/// Pure logic over normalized node records; the pool label lookup happens
/// when the node listing is mapped.
pub struct NodePoolAggregator;

impl NodePoolAggregator {
    /// Groups nodes by pool name and aggregates counts
    ///
    /// The first node seen in a pool supplies its representative mode,
    /// spot flag, taints and instance type. Pools are returned sorted by name
    /// so repeated runs render identically.
    pub fn aggregate(nodes: &[NodeRecord]) -> Vec<NodePoolSummary> {
        let mut pools: BTreeMap<&str, NodePoolSummary> = BTreeMap::new();

        for node in nodes {
            pools
                .entry(node.pool.as_str())
                .and_modify(|pool| pool.absorb(node))
                .or_insert_with(|| NodePoolSummary::from_first(node));
        }

        pools.into_values().collect()
    }
}
