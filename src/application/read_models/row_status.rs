//! Row status classes shared by every output format
//!
//! Statuses are read from flags the records computed at collection time;
//! nothing here looks at raw counts again.

use crate::cluster_report::domain::{
    AutoscalerRecord, CronJobRecord, DisruptionBudgetRecord, NodePoolSummary, PodRecord,
    VolumeClaimRecord, WorkloadRecord,
};
use serde::Serialize;

/// Display status of one table row (CSS class in HTML, marker in Markdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Healthy,
    Unhealthy,
    Warning,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Healthy => "healthy",
            RowStatus::Unhealthy => "unhealthy",
            RowStatus::Warning => "warning",
        }
    }
}

impl From<&WorkloadRecord> for RowStatus {
    fn from(record: &WorkloadRecord) -> Self {
        if record.healthy() {
            RowStatus::Healthy
        } else {
            RowStatus::Unhealthy
        }
    }
}

impl From<&CronJobRecord> for RowStatus {
    fn from(record: &CronJobRecord) -> Self {
        if record.suspended() {
            RowStatus::Warning
        } else {
            RowStatus::Healthy
        }
    }
}

impl From<&PodRecord> for RowStatus {
    fn from(record: &PodRecord) -> Self {
        if record.problem() {
            RowStatus::Unhealthy
        } else if record.is_running() && !record.ready() {
            RowStatus::Warning
        } else {
            RowStatus::Healthy
        }
    }
}

impl From<&NodePoolSummary> for RowStatus {
    fn from(pool: &NodePoolSummary) -> Self {
        if pool.all_ready() {
            RowStatus::Healthy
        } else {
            RowStatus::Unhealthy
        }
    }
}

impl From<&AutoscalerRecord> for RowStatus {
    fn from(record: &AutoscalerRecord) -> Self {
        if record.at_max() {
            RowStatus::Warning
        } else {
            RowStatus::Healthy
        }
    }
}

impl From<&DisruptionBudgetRecord> for RowStatus {
    fn from(record: &DisruptionBudgetRecord) -> Self {
        if record.blocks_eviction() {
            RowStatus::Warning
        } else {
            RowStatus::Healthy
        }
    }
}

impl From<&VolumeClaimRecord> for RowStatus {
    fn from(record: &VolumeClaimRecord) -> Self {
        match record.phase.as_str() {
            _ if record.is_bound() => RowStatus::Healthy,
            "Lost" => RowStatus::Unhealthy,
            _ => RowStatus::Warning,
        }
    }
}

/// A record together with its row status
///
/// The record's own fields are flattened, so in JSON a row reads as the
/// record with one extra `status` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<T> {
    #[serde(flatten)]
    pub record: T,
    pub status: RowStatus,
}

impl<T> Row<T>
where
    for<'a> RowStatus: From<&'a T>,
{
    pub fn new(record: T) -> Self {
        let status = RowStatus::from(&record);
        Self { record, status }
    }
}

impl<T> Row<T> {
    pub fn with_status(record: T, status: RowStatus) -> Self {
        Self { record, status }
    }
}
