use super::render_error;
use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

const TEMPLATE_NAME: &str = "report.md";
const TEMPLATE: &str = include_str!("templates/report.md");

/// MarkdownFormatter adapter for the text report
///
/// Uses two template helpers: the `md_cell` filter for table cells and the
/// `status_icon` function turning a row status into a marker.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace("\r\n", " ").replace('\n', " ")
    }

    fn md_cell(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
        Ok(Value::String(Self::escape_markdown_table_cell(&text)))
    }

    fn status_icon(args: &HashMap<String, Value>) -> tera::Result<Value> {
        let icon = match args.get("status").and_then(Value::as_str) {
            Some("healthy") => "✅",
            Some("unhealthy") => "❌",
            Some("warning") => "⚠️",
            _ => "•",
        };
        Ok(Value::String(icon.to_string()))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut tera = Tera::default();
        tera.register_filter("md_cell", Self::md_cell);
        tera.register_function("status_icon", Self::status_icon);
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| render_error("markdown", &e))?;
        let context =
            Context::from_serialize(model).map_err(|e| render_error("markdown", &e))?;
        let markdown = tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| render_error("markdown", &e))?;
        Ok(markdown)
    }
}
