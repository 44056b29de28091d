use chrono::{DateTime, Utc};

/// ReportMetadata value object describing one collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    cluster: String,
    namespace: Option<String>,
    collected_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(
        cluster: String,
        namespace: Option<String>,
        collected_at: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            cluster,
            namespace,
            collected_at,
            tool_name,
            tool_version,
        }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// File stem `<cluster>[_<namespace>]_<YYYYmmdd_HHMMSS>`
    ///
    /// Characters that are not safe in file names (`/` and `:` appear in EKS
    /// context ARNs) are replaced with `-`.
    pub fn file_stem(&self) -> String {
        let mut stem = sanitize_file_component(&self.cluster);
        if let Some(ns) = &self.namespace {
            stem.push('_');
            stem.push_str(&sanitize_file_component(ns));
        }
        stem.push('_');
        stem.push_str(&self.collected_at.format("%Y%m%d_%H%M%S").to_string());
        stem
    }
}

fn sanitize_file_component(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '@' => '-',
            other => other,
        })
        .collect()
}
