/// Extracts the tag from a container image reference
///
/// Handles registry ports (`registry:5000/istio/proxyv2:1.20.1`) and digests
/// (`proxyv2:1.20.1@sha256:...`). Returns `None` for untagged references.
pub fn image_tag(image: &str) -> Option<&str> {
    let without_digest = image.split('@').next().unwrap_or(image);
    let last_segment = without_digest.rsplit('/').next().unwrap_or(without_digest);

    match last_segment.rsplit_once(':') {
        Some((_, tag)) if !tag.is_empty() => Some(tag),
        _ => None,
    }
}
