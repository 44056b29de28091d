use crate::cluster_report::domain::{PodHealthGroup, PodRecord};
use std::collections::BTreeMap;

/// PodHealthGrouper service building per-namespace pod groups
pub struct PodHealthGrouper;

impl PodHealthGrouper {
    /// Groups pods by namespace, sorted by namespace name
    ///
    /// Every pod lands in exactly one group, so group totals always sum to
    /// the number of pods given.
    pub fn group(pods: &[PodRecord]) -> Vec<PodHealthGroup> {
        let mut by_namespace: BTreeMap<&str, Vec<&PodRecord>> = BTreeMap::new();
        for pod in pods {
            by_namespace.entry(pod.namespace()).or_default().push(pod);
        }

        by_namespace
            .into_iter()
            .map(|(namespace, members)| PodHealthGroup {
                namespace: namespace.to_string(),
                total: members.len(),
                running: members.iter().filter(|p| p.is_running()).count(),
                sidecars: members.iter().filter(|p| p.has_sidecar()).count(),
                problem_pods: members
                    .iter()
                    .filter(|p| p.problem())
                    .map(|p| (*p).clone())
                    .collect(),
                pods: members.into_iter().cloned().collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster_report::domain::{ContainerState, PodFacts, SidecarStatus};

    fn pod(namespace: &str, name: &str, phase: &str, sidecar: bool) -> PodRecord {
        PodRecord::new(
            PodFacts {
                namespace: namespace.to_string(),
                name: name.to_string(),
                phase: phase.to_string(),
                node: None,
                containers: vec!["app".to_string()],
                container_states: vec![ContainerState {
                    name: "app".to_string(),
                    ready: phase == "Running",
                    restarts: 0,
                    waiting_reason: None,
                }],
                init_container_states: vec![],
            },
            SidecarStatus {
                present: sidecar,
                version: None,
            },
        )
    }

    #[test]
    fn test_group_by_namespace() {
        let pods = vec![
            pod("web", "web-1", "Running", true),
            pod("api", "api-1", "Running", false),
            pod("web", "web-2", "Pending", true),
            pod("api", "api-2", "Failed", false),
            pod("web", "web-3", "Succeeded", false),
        ];

        let groups = PodHealthGrouper::group(&pods);
        assert_eq!(groups.len(), 2);

        let api = &groups[0];
        assert_eq!(api.namespace, "api");
        assert_eq!(api.total, 2);
        assert_eq!(api.running, 1);
        assert_eq!(api.sidecars, 0);
        assert_eq!(api.problem_pods.len(), 1);
        assert_eq!(api.problem_pods[0].name(), "api-2");

        let web = &groups[1];
        assert_eq!(web.namespace, "web");
        assert_eq!(web.total, 3);
        assert_eq!(web.running, 1);
        assert_eq!(web.sidecars, 2);
        assert_eq!(web.problem_pods.len(), 1);
    }

    #[test]
    fn test_group_totals_sum_to_pod_count() {
        let pods: Vec<PodRecord> = (0..11)
            .map(|i| pod(["a", "b", "c", "d"][i % 4], &format!("p{}", i), "Running", false))
            .collect();
        let groups = PodHealthGrouper::group(&pods);
        assert_eq!(groups.iter().map(|g| g.total).sum::<usize>(), pods.len());
        assert_eq!(
            groups.iter().map(|g| g.pods.len()).sum::<usize>(),
            pods.len()
        );
    }

    #[test]
    fn test_group_empty() {
        assert!(PodHealthGrouper::group(&[]).is_empty());
    }
}
