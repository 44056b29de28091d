use serde::Serialize;

/// PersistentVolumeClaim projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeClaimRecord {
    pub namespace: String,
    pub name: String,
    pub size: String,
    pub storage_class: String,
    /// Claim phase (`Bound`, `Pending`, `Lost`)
    pub phase: String,
}

impl VolumeClaimRecord {
    pub fn is_bound(&self) -> bool {
        self.phase == "Bound"
    }
}
