use clap::{ArgAction, Parser};
use kube_report::config::CliOverrides;
use std::path::PathBuf;

/// Generate a health report of a Kubernetes cluster from kubectl listings
#[derive(Parser, Debug)]
#[command(name = "kube-report")]
#[command(version)]
#[command(
    about = "Generate a health report of a Kubernetes cluster",
    long_about = "Queries a cluster through kubectl and renders nodes, namespaces, \
                  Istio, workloads, pod health, autoscaling and storage as an \
                  HTML, JSON or Markdown report."
)]
pub struct Args {
    /// Kube context of the cluster to report on
    #[arg(value_name = "CLUSTER")]
    pub cluster: String,

    /// Output format: html, json or markdown (md). Unknown values fall back to json
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,

    /// Restrict every namespaced query to this namespace
    #[arg(value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Directory the report is written to (default: reports)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to config file (default: auto-discover kube-report.config.yml in current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// kubectl binary to run (default: kubectl from PATH)
    #[arg(long, value_name = "PATH")]
    pub kubectl: Option<PathBuf>,

    /// Timeout of each kubectl query in seconds (default: 60)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the report on stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Values that override the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format.clone(),
            output_dir: self.output_dir.clone(),
            kubectl: self.kubectl.clone(),
            timeout_secs: self.timeout,
        }
    }

    /// Log filter directive for the verbosity flag count
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
