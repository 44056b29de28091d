use crate::cluster_report::domain::{image_tag, SidecarStatus};

/// Annotation written by the injector on every injected pod
pub const SIDECAR_STATUS_ANNOTATION: &str = "sidecar.istio.io/status";

/// Container name of the Envoy proxy
pub const PROXY_CONTAINER_NAME: &str = "istio-proxy";

/// SidecarPolicy decides whether a pod carries a mesh proxy
///
/// Both signals are needed. Pods injected by a revisioned webhook without
/// the status annotation are only visible through the container, and pods
/// whose proxy runs as a native sidecar init container only through the
/// annotation on older injectors.
pub struct SidecarPolicy;

impl SidecarPolicy {
    /// Detects the sidecar from the pod annotations and its containers
    ///
    /// # Arguments
    /// * `has_status_annotation` - whether `sidecar.istio.io/status` is set
    /// * `containers` - `(name, image)` of regular and init containers
    pub fn detect<'a>(
        has_status_annotation: bool,
        containers: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> SidecarStatus {
        let proxy_image = containers
            .into_iter()
            .find(|(name, _)| *name == PROXY_CONTAINER_NAME)
            .map(|(_, image)| image);

        SidecarStatus {
            present: has_status_annotation || proxy_image.is_some(),
            version: proxy_image.and_then(image_tag).map(String::from),
        }
    }
}
