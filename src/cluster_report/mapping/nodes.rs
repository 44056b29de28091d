use super::{describe_key_value_effect, parse_items, ObjectMeta};
use crate::cluster_report::domain::NodeRecord;
use crate::shared::Result;
use serde::Deserialize;

/// Pool labels by provider, in lookup order
const POOL_LABELS: [&str; 4] = [
    "kubernetes.azure.com/agentpool",
    "agentpool",
    "eks.amazonaws.com/nodegroup",
    "cloud.google.com/gke-nodepool",
];

const DEFAULT_POOL: &str = "default";
const MODE_LABEL: &str = "kubernetes.azure.com/mode";
const UNKNOWN_MODE: &str = "unknown";
const INSTANCE_TYPE_LABELS: [&str; 2] = [
    "node.kubernetes.io/instance-type",
    "beta.kubernetes.io/instance-type",
];

/// Spot/preemptible markers: `(label, value)`
const SPOT_LABELS: [(&str, &str); 3] = [
    ("kubernetes.azure.com/scalesetpriority", "spot"),
    ("eks.amazonaws.com/capacityType", "SPOT"),
    ("cloud.google.com/gke-spot", "true"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNode {
    metadata: ObjectMeta,
    spec: RawNodeSpec,
    status: RawNodeStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNodeSpec {
    taints: Vec<RawTaint>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTaint {
    key: String,
    value: Option<String>,
    effect: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNodeStatus {
    conditions: Vec<RawCondition>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCondition {
    #[serde(rename = "type")]
    condition_type: String,
    status: String,
}

/// Maps a node listing into normalized node records
pub fn nodes(json: &str) -> Result<Vec<NodeRecord>> {
    let raw: Vec<RawNode> = parse_items(json, "node")?;
    Ok(raw.into_iter().map(map_node).collect())
}

fn map_node(node: RawNode) -> NodeRecord {
    let labels = &node.metadata.labels;

    let pool = POOL_LABELS
        .iter()
        .find_map(|label| labels.get(*label))
        .cloned()
        .unwrap_or_else(|| DEFAULT_POOL.to_string());

    let mode = labels
        .get(MODE_LABEL)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_MODE.to_string());

    let spot = SPOT_LABELS
        .iter()
        .any(|(label, value)| labels.get(*label).map(String::as_str) == Some(*value));

    let instance_type = INSTANCE_TYPE_LABELS
        .iter()
        .find_map(|label| labels.get(*label))
        .cloned();

    let ready = node
        .status
        .conditions
        .iter()
        .any(|c| c.condition_type == "Ready" && c.status == "True");

    let taints = node
        .spec
        .taints
        .iter()
        .map(|t| {
            describe_key_value_effect(
                Some(t.key.as_str()),
                t.value.as_deref(),
                t.effect.as_deref(),
                false,
            )
        })
        .collect();

    NodeRecord {
        name: node.metadata.name,
        pool,
        mode,
        ready,
        spot,
        taints,
        instance_type,
    }
}
