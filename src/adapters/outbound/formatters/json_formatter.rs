use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// JsonFormatter adapter for the machine-readable report
///
/// The read model is serialized as is; its field names are the document keys.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(|e| {
            ReportError::RenderError {
                format: "json".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sample_model;
    use super::*;

    #[test]
    fn test_format_json_document() {
        let output = JsonFormatter::new().format(&sample_model()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["metadata"]["cluster"], "prod-aks");
        assert_eq!(value["metadata"]["collected_at"], "2026-10-18T09:30:05Z");
        assert_eq!(value["summary"]["total_pods"], 1);
        assert_eq!(value["summary"]["problem_pods"], 1);
        assert_eq!(value["istio"]["installed"], false);
        assert_eq!(value["workloads"]["deployments"][0]["healthy"], true);
        assert_eq!(value["workloads"]["deployments"][0]["status"], "healthy");
        assert_eq!(value["pod_health"][0]["problem_pods"][0]["problem"], true);
        assert!(value["storage"]["pvcs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_format_json_is_stable() {
        let model = sample_model();
        let formatter = JsonFormatter::new();
        assert_eq!(formatter.format(&model).unwrap(), formatter.format(&model).unwrap());
    }
}
