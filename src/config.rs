//! Configuration file support for kube-report.
//!
//! Provides YAML-based configuration through `kube-report.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::kubectl::DEFAULT_KUBECTL;
use crate::application::dto::OutputFormat;
use crate::cluster_report::policies::DEFAULT_SUSPICIOUS_NODE_SELECTORS;
use crate::cluster_report::services::DEFAULT_MESH_NAMESPACE_PATTERN;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "kube-report.config.yml";

/// Report directory used when neither the CLI nor the config names one
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

/// Per-query timeout used when neither the CLI nor the config sets one
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub kubectl: Option<PathBuf>,
    pub query_timeout_secs: Option<u64>,
    pub mesh_namespace_patterns: Option<Vec<String>>,
    pub suspicious_node_selectors: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::info!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.query_timeout_secs == Some(0) {
        return Err(ReportError::Validation {
            message: "query_timeout_secs must be greater than 0".to_string(),
        }
        .into());
    }

    let pattern_lists = [
        ("mesh_namespace_patterns", &config.mesh_namespace_patterns),
        ("suspicious_node_selectors", &config.suspicious_node_selectors),
    ];
    for (field, patterns) in pattern_lists {
        let Some(patterns) = patterns else {
            continue;
        };
        if let Some(i) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(ReportError::Validation {
                message: format!("{}[{}] must not be empty", field, i),
            }
            .into());
        }
    }

    if matches!(&config.mesh_namespace_patterns, Some(p) if p.is_empty()) {
        return Err(ReportError::Validation {
            message: "mesh_namespace_patterns must list at least one pattern".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line, each overriding its config key
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub kubectl: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    /// Set when the requested format was not recognized
    pub format_warning: Option<String>,
    pub output_dir: PathBuf,
    pub kubectl: PathBuf,
    pub query_timeout: Duration,
    pub mesh_namespace_patterns: Vec<String>,
    pub suspicious_node_selectors: Vec<String>,
}

impl Settings {
    /// Merges CLI values over config values over built-in defaults
    ///
    /// # Errors
    /// Returns `ReportError::Validation` for a zero `--timeout`
    pub fn resolve(cli: CliOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        if cli.timeout_secs == Some(0) {
            return Err(ReportError::Validation {
                message: "--timeout must be greater than 0".to_string(),
            }
            .into());
        }

        let (format, format_warning) = match cli.format.or(config.format) {
            Some(raw) => OutputFormat::parse_lenient(&raw),
            None => (OutputFormat::default(), None),
        };

        let timeout_secs = cli
            .timeout_secs
            .or(config.query_timeout_secs)
            .unwrap_or(DEFAULT_QUERY_TIMEOUT_SECS);

        Ok(Self {
            format,
            format_warning,
            output_dir: cli
                .output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            kubectl: cli
                .kubectl
                .or(config.kubectl)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KUBECTL)),
            query_timeout: Duration::from_secs(timeout_secs),
            mesh_namespace_patterns: config
                .mesh_namespace_patterns
                .unwrap_or_else(|| vec![DEFAULT_MESH_NAMESPACE_PATTERN.to_string()]),
            suspicious_node_selectors: config.suspicious_node_selectors.unwrap_or_else(|| {
                DEFAULT_SUSPICIOUS_NODE_SELECTORS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            }),
        })
    }
}
