mod mesh_detector;
mod metadata_generator;
mod node_pool_aggregator;
mod pod_health_grouper;
mod version_detector;

pub use mesh_detector::{MeshDetector, DEFAULT_MESH_NAMESPACE_PATTERN, UNKNOWN_MESH_VERSION};
pub use metadata_generator::MetadataGenerator;
pub use node_pool_aggregator::NodePoolAggregator;
pub use pod_health_grouper::PodHealthGrouper;
pub use version_detector::{VersionDetector, VersionStrategy, VERSION_NOT_AVAILABLE};
