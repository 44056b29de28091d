use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI gates to distinguish a refused run (bad scope)
/// from an argument error or an unexpected failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written (or printed) successfully
    Success = 0,
    /// A run precondition failed (unknown namespace, unreachable cluster)
    PreconditionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (template error, file I/O error, etc.)
    ApplicationError = 3,
    /// The run was interrupted with Ctrl-C
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PreconditionFailed => write!(f, "Precondition Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// Only fatal conditions live here. A failing resource query is never an
/// error at this level; the collector degrades it to an empty collection.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Namespace '{namespace}' does not exist in cluster '{cluster}'\n\n💡 Hint: Check the namespace name with `kubectl get namespaces --context {cluster}`")]
    NamespaceNotFound { cluster: String, namespace: String },

    #[error("Unable to reach cluster '{cluster}': {details}\n\n💡 Hint: Verify that the kube context exists and that your credentials are valid")]
    ClusterUnreachable { cluster: String, details: String },

    #[error("Invalid {kind} '{value}': {reason}")]
    InvalidIdentifier {
        kind: String,
        value: String,
        reason: String,
    },

    #[error("Failed to render {format} report\nDetails: {details}")]
    RenderError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ReportError {
    /// Exit code a fatal error of this kind maps to
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportError::NamespaceNotFound { .. } | ReportError::ClusterUnreachable { .. } => {
                ExitCode::PreconditionFailed
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PreconditionFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::PreconditionFailed),
            "Precondition Failed (1)"
        );
        assert_eq!(format!("{}", ExitCode::Interrupted), "Interrupted (130)");
    }

    #[test]
    fn test_namespace_not_found_display() {
        let error = ReportError::NamespaceNotFound {
            cluster: "prod-aks".to_string(),
            namespace: "payments".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Namespace 'payments' does not exist"));
        assert!(display.contains("prod-aks"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_cluster_unreachable_display() {
        let error = ReportError::ClusterUnreachable {
            cluster: "dev".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unable to reach cluster 'dev'"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReportError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let missing = ReportError::NamespaceNotFound {
            cluster: "c".to_string(),
            namespace: "n".to_string(),
        };
        assert_eq!(missing.exit_code(), ExitCode::PreconditionFailed);

        let render = ReportError::RenderError {
            format: "html".to_string(),
            details: "boom".to_string(),
        };
        assert_eq!(render.exit_code(), ExitCode::ApplicationError);
    }
}
