use super::{parse_items, ObjectMeta};
use crate::cluster_report::domain::NamespaceInfo;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawNamespace {
    metadata: ObjectMeta,
}

impl From<RawNamespace> for NamespaceInfo {
    fn from(ns: RawNamespace) -> Self {
        NamespaceInfo::new(ns.metadata.name, ns.metadata.labels, ns.metadata.annotations)
    }
}

/// Maps a namespace listing, preserving listing order
pub fn namespaces(json: &str) -> Result<Vec<NamespaceInfo>> {
    let raw: Vec<RawNamespace> = parse_items(json, "namespace")?;
    Ok(raw.into_iter().map(NamespaceInfo::from).collect())
}

/// Maps a single `Namespace` object
pub fn namespace(json: &str) -> Result<NamespaceInfo> {
    let raw: RawNamespace = serde_json::from_str(json).context("Malformed namespace object")?;
    Ok(raw.into())
}
