pub mod autoscaling;
pub mod image;
pub mod mesh;
pub mod namespace;
pub mod node_pool;
pub mod pod;
pub mod query;
pub mod report_metadata;
pub mod snapshot;
pub mod storage;
pub mod workload;

pub use autoscaling::{AutoscalerRecord, DisruptionBudgetRecord};
pub use image::image_tag;
pub use mesh::{DestinationRuleRecord, GatewayRecord, MeshState, VirtualServiceRecord};
pub use namespace::NamespaceInfo;
pub use node_pool::{NodePoolSummary, NodeRecord};
pub use pod::{ContainerState, PodFacts, PodHealthGroup, PodRecord, SidecarStatus};
pub use query::{ResourceKind, Scope, VersionQuery};
pub use report_metadata::ReportMetadata;
pub use snapshot::ClusterSnapshot;
pub use storage::VolumeClaimRecord;
pub use workload::{CronJobRecord, Placement, WorkloadRecord};
