use super::render_error;
use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use tera::{Context, Tera};

/// The `.html` suffix turns on Tera's HTML autoescaping
const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("templates/report.html");

/// HtmlFormatter adapter for the styled single-file report
///
/// CSS is embedded in the template and every section is a `<details>`
/// element, so the file opens anywhere without network access. Row classes
/// come straight from the read model's row statuses.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| render_error("html", &e))?;
        let context = Context::from_serialize(model).map_err(|e| render_error("html", &e))?;
        let html = tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| render_error("html", &e))?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_model;
    use super::*;

    #[test]
    fn test_format_html_skeleton() {
        let html = HtmlFormatter::new().format(&sample_model()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Cluster report: prod-aks</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<details open>"));
        assert!(html.contains("Istio is not installed."));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_format_html_row_classes() {
        let html = HtmlFormatter::new().format(&sample_model()).unwrap();
        // healthy deployment, ready pool, problem pod
        assert!(html.contains("<tr class=\"healthy\">"));
        assert!(html.contains("<tr class=\"unhealthy\">"));
        assert!(!html.contains("<tr class=\"warning\">"));
    }

    #[test]
    fn test_format_html_escapes_values() {
        let html = HtmlFormatter::new().format(&sample_model()).unwrap();
        assert!(html.contains("ImagePullBackOff|&lt;retry&gt;"));
        assert!(!html.contains("<retry>"));
    }

    #[test]
    fn test_format_html_summary_cards() {
        let html = HtmlFormatter::new().format(&sample_model()).unwrap();
        assert!(html.contains("1/1</div><div class=\"label\">Healthy deployments"));
        assert!(html.contains("0%</div><div class=\"label\">Sidecar coverage (0/1)"));
    }
}
