use crate::cluster_report::domain::{image_tag, WorkloadRecord};

/// Substring identifying the mesh control-plane namespace by default
pub const DEFAULT_MESH_NAMESPACE_PATTERN: &str = "istio";

/// Name prefix of the control-plane deployment (`istiod`, `istiod-1-20-1`)
const CONTROL_PLANE_PREFIX: &str = "istiod";

/// `app` label value carried by the control-plane deployment
const CONTROL_PLANE_APP: &str = "istiod";

/// Version reported when the control plane image carries no tag
pub const UNKNOWN_MESH_VERSION: &str = "unknown";

/// MeshDetector service locating the service mesh control plane
pub struct MeshDetector;

impl MeshDetector {
    /// Returns every namespace whose name contains one of the patterns
    ///
    /// Candidates keep the given namespace order. The caller settles on the
    /// first one hosting the control plane, else on the first candidate.
    pub fn candidate_namespaces<'a>(
        namespace_names: &'a [String],
        patterns: &[String],
    ) -> Vec<&'a str> {
        namespace_names
            .iter()
            .filter(|name| patterns.iter().any(|p| !p.is_empty() && name.contains(p.as_str())))
            .map(String::as_str)
            .collect()
    }

    /// Finds the control-plane deployment
    ///
    /// A deployment labelled `app=istiod` wins over one merely named `istiod*`.
    pub fn control_plane(deployments: &[WorkloadRecord]) -> Option<&WorkloadRecord> {
        deployments
            .iter()
            .find(|d| d.labels().get("app").map(String::as_str) == Some(CONTROL_PLANE_APP))
            .or_else(|| {
                deployments
                    .iter()
                    .find(|d| d.name().starts_with(CONTROL_PLANE_PREFIX))
            })
    }

    /// Extracts the mesh version from the control-plane deployment image tag
    pub fn control_plane_version(deployments: &[WorkloadRecord]) -> String {
        Self::control_plane(deployments)
            .and_then(|d| d.images().first())
            .and_then(|image| image_tag(image))
            .unwrap_or(UNKNOWN_MESH_VERSION)
            .to_string()
    }
}
