/// Filesystem adapters for report output
mod file_writer;
mod workspace;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use workspace::ReportWorkspace;
