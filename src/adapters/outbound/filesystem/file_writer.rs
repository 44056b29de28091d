use super::workspace::ReportWorkspace;
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the report file
///
/// This adapter implements the OutputPresenter port for file output. The
/// output directory is created if missing and the document is staged in a
/// [`ReportWorkspace`] before being renamed into place, so a failed or
/// interrupted run never leaves a partial report behind.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn output_dir(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_output_dir(&self) -> Result<()> {
        let dir = self.output_dir();
        fs::create_dir_all(dir).map_err(|e| ReportError::FileWriteError {
            path: dir.to_path_buf(),
            details: format!("Failed to create output directory: {}", e),
        })?;
        Ok(())
    }

    /// Security validation before writing: reject an output path that is an
    /// existing symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(ReportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn file_name(&self) -> Result<String> {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ReportError::FileWriteError {
                    path: self.output_path.clone(),
                    details: "Output path has no file name".to_string(),
                }
                .into()
            })
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let file_name = self.file_name()?;
        self.ensure_output_dir()?;
        self.validate_output_security()?;

        let workspace = ReportWorkspace::create_in(self.output_dir())?;
        let staged = workspace.stage(&file_name, content)?;
        workspace.commit(&staged, &self.output_path)?;

        tracing::info!(path = %self.output_path.display(), bytes = content.len(), "report written");
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the document to stdout
///
/// This adapter implements the OutputPresenter port for `--stdout` runs.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
