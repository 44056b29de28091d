use super::{parse_items, ObjectMeta};
use crate::cluster_report::domain::{AutoscalerRecord, DisruptionBudgetRecord};
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;

/// `minReplicas` default of the autoscaling API
const DEFAULT_MIN_REPLICAS: u32 = 1;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAutoscaler {
    metadata: ObjectMeta,
    spec: RawAutoscalerSpec,
    status: RawAutoscalerStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAutoscalerSpec {
    scale_target_ref: RawTargetRef,
    min_replicas: Option<u32>,
    max_replicas: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTargetRef {
    kind: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAutoscalerStatus {
    current_replicas: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDisruptionBudget {
    metadata: ObjectMeta,
    spec: RawDisruptionBudgetSpec,
    status: RawDisruptionBudgetStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawDisruptionBudgetSpec {
    min_available: Option<Value>,
    max_unavailable: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawDisruptionBudgetStatus {
    disruptions_allowed: u32,
}

/// Renders an int-or-string field (`2`, `"50%"`)
fn int_or_string(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Maps a HorizontalPodAutoscaler listing
pub fn autoscalers(json: &str) -> Result<Vec<AutoscalerRecord>> {
    let raw: Vec<RawAutoscaler> = parse_items(json, "horizontalpodautoscaler")?;
    Ok(raw
        .into_iter()
        .map(|h| AutoscalerRecord {
            namespace: h.metadata.namespace,
            name: h.metadata.name,
            target: format!(
                "{}/{}",
                h.spec.scale_target_ref.kind, h.spec.scale_target_ref.name
            ),
            min_replicas: h.spec.min_replicas.unwrap_or(DEFAULT_MIN_REPLICAS),
            max_replicas: h.spec.max_replicas,
            current_replicas: h.status.current_replicas,
        })
        .collect())
}

/// Maps a PodDisruptionBudget listing
pub fn disruption_budgets(json: &str) -> Result<Vec<DisruptionBudgetRecord>> {
    let raw: Vec<RawDisruptionBudget> = parse_items(json, "poddisruptionbudget")?;
    Ok(raw
        .into_iter()
        .map(|p| DisruptionBudgetRecord {
            namespace: p.metadata.namespace,
            name: p.metadata.name,
            min_available: int_or_string(p.spec.min_available),
            max_unavailable: int_or_string(p.spec.max_unavailable),
            disruptions_allowed: p.status.disruptions_allowed,
        })
        .collect())
}
