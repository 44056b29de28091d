/// Formatter adapters for the report output formats
mod html_formatter;
mod json_formatter;
mod markdown_formatter;

pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;

use crate::shared::error::ReportError;

/// Flattens a template error and its causes into one message
///
/// Tera puts the useful part (which variable, which line) in the source
/// chain, not in the top-level message.
fn render_error(format: &str, error: &tera::Error) -> ReportError {
    let mut details = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        details.push_str(": ");
        details.push_str(&cause.to_string());
        source = cause.source();
    }
    ReportError::RenderError {
        format: format.to_string(),
        details,
    }
}
