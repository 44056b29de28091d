use crate::cluster_report::domain::ReportMetadata;
use chrono::{Timelike, Utc};

/// MetadataGenerator service stamping a report run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates report metadata with the current time as collection time
    ///
    /// The timestamp is truncated to whole seconds: it appears in the file
    /// name and should read the same everywhere in the document.
    pub fn generate(
        cluster: &str,
        namespace: Option<&str>,
        tool_name: &str,
        tool_version: &str,
    ) -> ReportMetadata {
        let now = Utc::now();
        let collected_at = now.with_nanosecond(0).unwrap_or(now);

        ReportMetadata::new(
            cluster.to_string(),
            namespace.map(String::from),
            collected_at,
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates report metadata with this tool's name and compile-time version
    pub fn generate_default(cluster: &str, namespace: Option<&str>) -> ReportMetadata {
        Self::generate(
            cluster,
            namespace,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )
    }
}
