mod scheduling_policy;
mod sidecar_policy;

pub use scheduling_policy::{SchedulingPolicy, DEFAULT_SUSPICIOUS_NODE_SELECTORS};
pub use sidecar_policy::{SidecarPolicy, PROXY_CONTAINER_NAME, SIDECAR_STATUS_ANNOTATION};
