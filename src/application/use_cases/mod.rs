/// Use cases module containing application business logic orchestration
mod collect_cluster_report;

pub use collect_cluster_report::CollectClusterReportUseCase;
