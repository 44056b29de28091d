/// Mock implementations for testing
mod mock_cluster_gateway;
mod mock_progress_reporter;

pub use mock_cluster_gateway::MockClusterGateway;
pub use mock_progress_reporter::MockProgressReporter;
