use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// This port abstracts the output destination (report file or stdout).
pub trait OutputPresenter {
    /// Presents the rendered document to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - Writing or moving the file into place fails
    /// - The destination is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
