use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering a report document
///
/// This port abstracts the rendering logic for the supported formats
/// (HTML, JSON, Markdown).
pub trait ReportFormatter {
    /// Renders the report using the shared read model
    ///
    /// # Arguments
    /// * `model` - Read model with the snapshot, metadata and derived summary
    ///
    /// # Returns
    /// The complete document as a string
    ///
    /// # Errors
    /// Returns an error if template rendering or serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
