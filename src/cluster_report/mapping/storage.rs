use super::{parse_items, ObjectMeta};
use crate::cluster_report::domain::VolumeClaimRecord;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

const STORAGE_KEY: &str = "storage";
const UNSET: &str = "-";
const UNKNOWN_STATUS: &str = "Unknown";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVolumeClaim {
    metadata: ObjectMeta,
    spec: RawVolumeClaimSpec,
    status: RawVolumeClaimStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawVolumeClaimSpec {
    storage_class_name: Option<String>,
    resources: RawResources,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResources {
    requests: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVolumeClaimStatus {
    phase: Option<String>,
    capacity: BTreeMap<String, String>,
}

/// Maps a PersistentVolumeClaim listing
///
/// Size is the bound capacity, or the requested size while still pending.
pub fn volume_claims(json: &str) -> Result<Vec<VolumeClaimRecord>> {
    let raw: Vec<RawVolumeClaim> = parse_items(json, "persistentvolumeclaim")?;
    Ok(raw
        .into_iter()
        .map(|mut c| {
            let size = c
                .status
                .capacity
                .remove(STORAGE_KEY)
                .or_else(|| c.spec.resources.requests.remove(STORAGE_KEY))
                .unwrap_or_else(|| UNSET.to_string());
            VolumeClaimRecord {
                namespace: c.metadata.namespace,
                name: c.metadata.name,
                size,
                storage_class: c
                    .spec
                    .storage_class_name
                    .unwrap_or_else(|| UNSET.to_string()),
                phase: c
                    .status
                    .phase
                    .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            }
        })
        .collect())
}
