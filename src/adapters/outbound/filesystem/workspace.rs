use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WORKSPACE_PREFIX: &str = ".kube-report-";

/// Scoped staging directory for a report being written
///
/// The directory lives inside the output directory so the final move is a
/// same-filesystem rename. It is removed when the workspace is dropped,
/// whether the run succeeded, failed or was interrupted.
#[derive(Debug)]
pub struct ReportWorkspace {
    dir: TempDir,
}

impl ReportWorkspace {
    /// Creates the staging directory inside `output_dir`
    pub fn create_in(output_dir: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(output_dir)
            .map_err(|e| ReportError::FileWriteError {
                path: output_dir.to_path_buf(),
                details: format!("Failed to create staging directory: {}", e),
            })?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to a file of the workspace and returns its path
    pub fn stage(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let staged = self.dir.path().join(file_name);
        fs::write(&staged, content).map_err(|e| ReportError::FileWriteError {
            path: staged.clone(),
            details: e.to_string(),
        })?;
        Ok(staged)
    }

    /// Moves a staged file to its final destination
    pub fn commit(&self, staged: &Path, destination: &Path) -> Result<()> {
        fs::rename(staged, destination).map_err(|e| ReportError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
