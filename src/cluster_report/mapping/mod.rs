//! Typed mapping of raw Kubernetes JSON listings into report records
//!
//! Each resource kind has one mapping function taking the raw `List` JSON and
//! returning records. Field-presence defaults live in the serde structs
//! below instead of being scattered through query expressions. A listing that
//! does not parse is an error, which the collector turns into an empty
//! collection.

mod autoscaling;
mod mesh;
mod namespaces;
mod nodes;
mod pods;
mod storage;
mod workloads;

pub use autoscaling::{autoscalers, disruption_budgets};
pub use mesh::{destination_rules, gateways, virtual_services};
pub use namespaces::{namespace, namespaces};
pub use nodes::nodes;
pub use pods::pods;
pub use storage::volume_claims;
pub use workloads::{cronjobs, daemonsets, deployments, statefulsets};

use crate::cluster_report::domain::Placement;
use crate::shared::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope of every `kubectl get -o json` listing
#[derive(Debug, Deserialize)]
struct ItemList<T> {
    items: Vec<T>,
}

/// Parses a `List` document into its items
fn parse_items<T: DeserializeOwned>(json: &str, kind: &str) -> Result<Vec<T>> {
    let list: ItemList<T> = serde_json::from_str(json)
        .with_context(|| format!("Malformed {} listing", kind))?;
    Ok(list.items)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ObjectMeta {
    name: String,
    namespace: String,
    labels: BTreeMap<String, String>,
    annotations: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawToleration {
    key: Option<String>,
    operator: Option<String>,
    value: Option<String>,
    effect: Option<String>,
}

impl RawToleration {
    /// `key[=value][:effect]`, with `*` for a key-less `Exists` toleration
    fn describe(&self) -> String {
        describe_key_value_effect(
            self.key.as_deref(),
            self.value.as_deref(),
            self.effect.as_deref(),
            self.operator.as_deref() == Some("Exists"),
        )
    }
}

fn describe_key_value_effect(
    key: Option<&str>,
    value: Option<&str>,
    effect: Option<&str>,
    wildcard_if_keyless: bool,
) -> String {
    let mut out = match key.filter(|k| !k.is_empty()) {
        Some(k) => k.to_string(),
        None if wildcard_if_keyless => "*".to_string(),
        None => String::new(),
    };
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        out.push('=');
        out.push_str(v);
    }
    if let Some(e) = effect.filter(|e| !e.is_empty()) {
        out.push(':');
        out.push_str(e);
    }
    out
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawContainer {
    name: String,
    image: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPodSpec {
    containers: Vec<RawContainer>,
    init_containers: Vec<RawContainer>,
    tolerations: Vec<RawToleration>,
    node_selector: BTreeMap<String, String>,
    node_name: Option<String>,
}

impl RawPodSpec {
    fn placement(&self) -> Placement {
        Placement {
            tolerations: self.tolerations.iter().map(RawToleration::describe).collect(),
            node_selector: self.node_selector.clone(),
        }
    }

    fn images(&self) -> Vec<String> {
        self.containers.iter().map(|c| c.image.clone()).collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPodTemplate {
    spec: RawPodSpec,
}
