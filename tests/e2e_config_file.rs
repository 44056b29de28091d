/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to the written report, using `assert_cmd` and `tempfile` for isolated test environments.
#[cfg(unix)]
mod test_utilities;

#[cfg(unix)]
mod config_tests {
    use super::test_utilities::fake_kubectl;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // ============================================================================
    // Helper Functions
    // ============================================================================

    /// Write a config file naming the fake kubectl plus extra keys.
    fn write_config(path: &Path, kubectl: &Path, extra: &str) {
        let content = format!("kubectl: {}\n{}", kubectl.display(), extra);
        fs::write(path, content).unwrap();
    }

    fn extensions_in(dir: &Path) -> Vec<String> {
        fake_kubectl::reports_in(dir)
            .iter()
            .filter_map(|p| p.extension().map(|e| e.to_string_lossy().to_string()))
            .collect()
    }

    // ============================================================================
    // Auto-discovery
    // ============================================================================

    #[test]
    fn test_auto_discovered_config_sets_format_and_output_dir() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(
            &dir.path().join("kube-report.config.yml"),
            &kubectl,
            "format: markdown\noutput_dir: out\n",
        );

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .arg("prod-aks")
            .assert()
            .success()
            .stdout(predicate::str::contains("out/prod-aks_"));

        assert_eq!(extensions_in(&dir.path().join("out")), vec!["md"]);
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(
            &dir.path().join("kube-report.config.yml"),
            &kubectl,
            "format: markdown\n",
        );

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .args(["prod-aks", "html"])
            .assert()
            .success();

        assert_eq!(extensions_in(&dir.path().join("reports")), vec!["html"]);
    }

    // ============================================================================
    // Explicit --config
    // ============================================================================

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, &kubectl, "format: json\nquery_timeout_secs: 5\n");

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .args(["prod-aks", "--config"])
            .arg(&config_path)
            .assert()
            .success();

        assert_eq!(extensions_in(&dir.path().join("reports")), vec!["json"]);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .args(["prod-aks", "--config", "missing.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    // ============================================================================
    // Validation and warnings
    // ============================================================================

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(
            &dir.path().join("kube-report.config.yml"),
            &kubectl,
            "check_cve: true\n",
        );

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .arg("prod-aks")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'check_cve' will be ignored",
            ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(
            &dir.path().join("kube-report.config.yml"),
            &kubectl,
            "query_timeout_secs: 0\n",
        );

        cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .arg("prod-aks")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("query_timeout_secs must be greater than 0"));

        assert!(!dir.path().join("reports").exists());
    }

    #[test]
    fn test_suspicious_selector_from_config_is_flagged() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(
            &dir.path().join("kube-report.config.yml"),
            &kubectl,
            "suspicious_node_selectors:\n  - agentpool=system\n",
        );

        let output = cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .arg("prod-aks")
            .assert()
            .success()
            .get_output()
            .clone();

        let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let content = fs::read_to_string(dir.path().join(printed)).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["summary"]["config_warning"], true);
        assert_eq!(
            report["summary"]["flagged_namespaces"],
            serde_json::json!(["shop"])
        );
    }

    #[test]
    fn test_default_selectors_do_not_flag_user_pools() {
        let dir = TempDir::new().unwrap();
        let kubectl = fake_kubectl::install(dir.path());
        write_config(&dir.path().join("kube-report.config.yml"), &kubectl, "");

        let output = cargo_bin_cmd!("kube-report")
            .current_dir(dir.path())
            .args(["prod-aks", "--stdout"])
            .assert()
            .success()
            .get_output()
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["summary"]["config_warning"], false);
    }
}
