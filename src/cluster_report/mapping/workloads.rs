use super::{parse_items, ObjectMeta, RawPodTemplate};
use crate::cluster_report::domain::{CronJobRecord, WorkloadRecord};
use crate::shared::Result;
use serde::Deserialize;

/// Replica count assumed when `spec.replicas` is absent
const DEFAULT_REPLICAS: u32 = 1;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawReplicated {
    metadata: ObjectMeta,
    spec: RawReplicatedSpec,
    status: RawReplicatedStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawReplicatedSpec {
    replicas: Option<u32>,
    template: RawPodTemplate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawReplicatedStatus {
    ready_replicas: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDaemonSet {
    metadata: ObjectMeta,
    spec: RawDaemonSetSpec,
    status: RawDaemonSetStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDaemonSetSpec {
    template: RawPodTemplate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawDaemonSetStatus {
    desired_number_scheduled: u32,
    number_ready: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCronJob {
    metadata: ObjectMeta,
    spec: RawCronJobSpec,
    status: RawCronJobStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCronJobSpec {
    schedule: String,
    suspend: Option<bool>,
    job_template: RawJobTemplate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJobTemplate {
    spec: RawJobSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJobSpec {
    template: RawPodTemplate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawCronJobStatus {
    active: Vec<serde_json::Value>,
    last_schedule_time: Option<String>,
}

/// Maps a Deployment listing
pub fn deployments(json: &str) -> Result<Vec<WorkloadRecord>> {
    replicated(json, "deployment")
}

/// Maps a StatefulSet listing
pub fn statefulsets(json: &str) -> Result<Vec<WorkloadRecord>> {
    replicated(json, "statefulset")
}

fn replicated(json: &str, kind: &str) -> Result<Vec<WorkloadRecord>> {
    let raw: Vec<RawReplicated> = parse_items(json, kind)?;
    Ok(raw
        .into_iter()
        .map(|w| {
            let pod_spec = &w.spec.template.spec;
            WorkloadRecord::new(
                w.metadata.name,
                w.metadata.namespace,
                w.spec.replicas.unwrap_or(DEFAULT_REPLICAS),
                w.status.ready_replicas.unwrap_or(0),
                pod_spec.images(),
                pod_spec.placement(),
            )
            .with_labels(w.metadata.labels)
        })
        .collect())
}

/// Maps a DaemonSet listing; desired is the scheduled node count
pub fn daemonsets(json: &str) -> Result<Vec<WorkloadRecord>> {
    let raw: Vec<RawDaemonSet> = parse_items(json, "daemonset")?;
    Ok(raw
        .into_iter()
        .map(|d| {
            let pod_spec = &d.spec.template.spec;
            WorkloadRecord::new(
                d.metadata.name,
                d.metadata.namespace,
                d.status.desired_number_scheduled,
                d.status.number_ready,
                pod_spec.images(),
                pod_spec.placement(),
            )
            .with_labels(d.metadata.labels)
        })
        .collect())
}

/// Maps a CronJob listing
pub fn cronjobs(json: &str) -> Result<Vec<CronJobRecord>> {
    let raw: Vec<RawCronJob> = parse_items(json, "cronjob")?;
    Ok(raw
        .into_iter()
        .map(|c| {
            let placement = c.spec.job_template.spec.template.spec.placement();
            CronJobRecord::new(
                c.metadata.name,
                c.metadata.namespace,
                c.spec.schedule,
                c.spec.suspend.unwrap_or(false),
                c.status.active.len(),
                c.status.last_schedule_time,
                placement,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_deployments() {
        let json = r#"{
            "items": [
                {
                    "metadata": {"name": "api", "namespace": "shop", "labels": {"app": "api"}},
                    "spec": {
                        "replicas": 3,
                        "template": {"spec": {
                            "containers": [
                                {"name": "api", "image": "acr.io/shop/api:2.4.1"},
                                {"name": "istio-proxy", "image": "istio/proxyv2:1.20.1"}
                            ],
                            "tolerations": [{"key": "workload", "operator": "Equal", "value": "web", "effect": "NoSchedule"}],
                            "nodeSelector": {"agentpool": "user"}
                        }}
                    },
                    "status": {"readyReplicas": 3}
                },
                {
                    "metadata": {"name": "worker", "namespace": "shop"},
                    "spec": {"template": {"spec": {"containers": [{"name": "w", "image": "worker"}]}}},
                    "status": {}
                }
            ]
        }"#;

        let deployments = deployments(json).unwrap();
        assert_eq!(deployments.len(), 2);

        let api = &deployments[0];
        assert_eq!(api.name(), "api");
        assert_eq!(api.namespace(), "shop");
        assert_eq!(api.desired(), 3);
        assert_eq!(api.ready(), 3);
        assert!(api.healthy());
        assert_eq!(api.images().len(), 2);
        assert_eq!(api.labels().get("app").map(String::as_str), Some("api"));
        assert_eq!(api.tolerations(), ["workload=web:NoSchedule".to_string()]);
        assert_eq!(
            api.node_selector().get("agentpool").map(String::as_str),
            Some("user")
        );

        let worker = &deployments[1];
        assert_eq!(worker.desired(), DEFAULT_REPLICAS);
        assert_eq!(worker.ready(), 0);
        assert!(!worker.healthy());
    }

    #[test]
    fn test_scaled_to_zero_is_healthy() {
        let json = r#"{"items": [{"metadata": {"name": "db", "namespace": "data"}, "spec": {"replicas": 0}, "status": {}}]}"#;
        let sets = statefulsets(json).unwrap();
        assert_eq!(sets[0].desired(), 0);
        assert!(sets[0].healthy());
    }

    #[test]
    fn test_map_daemonsets() {
        let json = r#"{"items": [{
            "metadata": {"name": "fluent-bit", "namespace": "logging"},
            "spec": {"template": {"spec": {"containers": [{"name": "fb", "image": "fluent/fluent-bit:2.2"}]}}},
            "status": {"desiredNumberScheduled": 5, "numberReady": 4}
        }]}"#;
        let daemonsets = daemonsets(json).unwrap();
        assert_eq!(daemonsets[0].desired(), 5);
        assert_eq!(daemonsets[0].ready(), 4);
        assert!(!daemonsets[0].healthy());
    }

    #[test]
    fn test_map_cronjobs() {
        let json = r#"{"items": [
            {
                "metadata": {"name": "nightly", "namespace": "ops"},
                "spec": {
                    "schedule": "0 2 * * *",
                    "jobTemplate": {"spec": {"template": {"spec": {
                        "containers": [{"name": "job", "image": "ops/backup:1"}],
                        "tolerations": [{"operator": "Exists"}]
                    }}}}
                },
                "status": {"active": [{"name": "nightly-123"}], "lastScheduleTime": "2026-10-17T02:00:00Z"}
            },
            {
                "metadata": {"name": "paused", "namespace": "ops"},
                "spec": {"schedule": "*/5 * * * *", "suspend": true}
            }
        ]}"#;

        let cronjobs = cronjobs(json).unwrap();
        assert_eq!(cronjobs.len(), 2);
        assert_eq!(cronjobs[0].schedule(), "0 2 * * *");
        assert_eq!(cronjobs[0].active(), 1);
        assert!(!cronjobs[0].suspended());
        assert!(cronjobs[0].healthy());

        assert!(cronjobs[1].suspended());
        assert!(!cronjobs[1].healthy());
        assert_eq!(cronjobs[1].active(), 0);
    }
}
