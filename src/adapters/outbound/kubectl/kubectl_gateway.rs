use crate::cluster_report::domain::{ResourceKind, Scope, VersionQuery};
use crate::ports::outbound::ClusterGateway;
use crate::shared::Result;
use anyhow::{bail, Context};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Binary looked up on `PATH` when none is configured
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Reason kubectl prints for an API `NotFound` answer
const NOT_FOUND_REASON: &str = "(NotFound)";

/// Captured result of one kubectl invocation
struct KubectlOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

/// KubectlGateway adapter querying a cluster through the kubectl CLI
///
/// Every invocation carries `--context <cluster>`, so the user's current
/// context is never used implicitly. Each query is bounded by the configured
/// timeout and the child is killed if the query future is dropped.
pub struct KubectlGateway {
    binary: PathBuf,
    context: String,
    timeout: Duration,
}

impl KubectlGateway {
    pub fn new(binary: impl Into<PathBuf>, context: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            context: context.into(),
            timeout,
        }
    }

    /// Arguments of a list query, without the context flag
    fn list_args(kind: ResourceKind, scope: &Scope) -> Vec<String> {
        let mut args = vec!["get".to_string(), kind.api_resource().to_string()];
        if !kind.is_cluster_scoped() {
            match scope.namespace() {
                Some(ns) => {
                    args.push("-n".to_string());
                    args.push(ns.to_string());
                }
                None => args.push("-A".to_string()),
            }
        }
        args.push("-o".to_string());
        args.push("json".to_string());
        args
    }

    fn version_args(query: VersionQuery) -> Vec<String> {
        match query {
            VersionQuery::Structured => vec!["version".into(), "-o".into(), "json".into()],
            VersionQuery::Legacy => vec!["version".into(), "--short".into()],
        }
    }

    async fn run(&self, args: &[String]) -> Result<KubectlOutput> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .arg("--context")
            .arg(&self.context)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let started = Instant::now();
        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "kubectl {} timed out after {}s",
                    args.join(" "),
                    self.timeout.as_secs()
                )
            })?
            .with_context(|| format!("Failed to run {}", self.binary.display()))?;

        tracing::debug!(
            args = %args.join(" "),
            context = %self.context,
            status = %output.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "kubectl finished"
        );

        Ok(KubectlOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// True only for the API server's answer about this very namespace
///
/// Client-side failures such as a missing context or credential plugin also
/// say "not found" and must not be taken for a missing namespace.
fn is_namespace_not_found(stderr: &str, name: &str) -> bool {
    stderr.contains(NOT_FOUND_REASON)
        && stderr.contains(&format!("namespaces \"{}\" not found", name))
}

#[async_trait]
impl ClusterGateway for KubectlGateway {
    async fn list(&self, kind: ResourceKind, scope: &Scope) -> Result<String> {
        let output = self.run(&Self::list_args(kind, scope)).await?;
        if !output.success {
            bail!("kubectl get {} failed: {}", kind.api_resource(), output.stderr.trim());
        }
        Ok(output.stdout)
    }

    async fn namespace_exists(&self, name: &str) -> Result<bool> {
        let args = vec![
            "get".to_string(),
            "namespace".to_string(),
            name.to_string(),
            "-o".to_string(),
            "name".to_string(),
        ];
        let output = self.run(&args).await?;
        if output.success {
            return Ok(true);
        }
        if is_namespace_not_found(&output.stderr, name) {
            return Ok(false);
        }
        bail!("{}", output.stderr.trim())
    }

    async fn get_namespace(&self, name: &str) -> Result<String> {
        let args = vec![
            "get".to_string(),
            "namespace".to_string(),
            name.to_string(),
            "-o".to_string(),
            "json".to_string(),
        ];
        let output = self.run(&args).await?;
        if !output.success {
            bail!("kubectl get namespace {} failed: {}", name, output.stderr.trim());
        }
        Ok(output.stdout)
    }

    async fn server_version(&self, query: VersionQuery) -> Result<String> {
        let output = self.run(&Self::version_args(query)).await?;
        if !output.success {
            bail!("kubectl version failed: {}", output.stderr.trim());
        }
        Ok(output.stdout)
    }
}
