use super::{parse_items, ObjectMeta, RawPodSpec};
use crate::cluster_report::domain::{ContainerState, PodFacts, PodRecord};
use crate::cluster_report::policies::{SidecarPolicy, SIDECAR_STATUS_ANNOTATION};
use crate::shared::Result;
use serde::Deserialize;

const UNKNOWN_PHASE: &str = "Unknown";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPod {
    metadata: ObjectMeta,
    spec: RawPodSpec,
    status: RawPodStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPodStatus {
    phase: Option<String>,
    container_statuses: Vec<RawContainerStatus>,
    init_container_statuses: Vec<RawContainerStatus>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawContainerStatus {
    name: String,
    ready: bool,
    restart_count: u32,
    state: RawContainerStateDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawContainerStateDetail {
    waiting: Option<RawWaiting>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawWaiting {
    reason: Option<String>,
}

impl From<RawContainerStatus> for ContainerState {
    fn from(raw: RawContainerStatus) -> Self {
        ContainerState {
            name: raw.name,
            ready: raw.ready,
            restarts: raw.restart_count,
            waiting_reason: raw.state.waiting.and_then(|w| w.reason),
        }
    }
}

/// Maps a pod listing, detecting the mesh sidecar on each pod
pub fn pods(json: &str) -> Result<Vec<PodRecord>> {
    let raw: Vec<RawPod> = parse_items(json, "pod")?;
    Ok(raw.into_iter().map(map_pod).collect())
}

fn map_pod(pod: RawPod) -> PodRecord {
    let sidecar = SidecarPolicy::detect(
        pod.metadata
            .annotations
            .contains_key(SIDECAR_STATUS_ANNOTATION),
        pod.spec
            .containers
            .iter()
            .chain(pod.spec.init_containers.iter())
            .map(|c| (c.name.as_str(), c.image.as_str())),
    );

    let facts = PodFacts {
        namespace: pod.metadata.namespace,
        name: pod.metadata.name,
        phase: pod
            .status
            .phase
            .unwrap_or_else(|| UNKNOWN_PHASE.to_string()),
        node: pod.spec.node_name,
        containers: pod.spec.containers.into_iter().map(|c| c.name).collect(),
        container_states: pod
            .status
            .container_statuses
            .into_iter()
            .map(ContainerState::from)
            .collect(),
        init_container_states: pod
            .status
            .init_container_statuses
            .into_iter()
            .map(ContainerState::from)
            .collect(),
    };

    PodRecord::new(facts, sidecar)
}
