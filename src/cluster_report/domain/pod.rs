use serde::Serialize;

/// Phases that are not a problem
const HEALTHY_PHASES: [&str; 2] = ["Running", "Succeeded"];

/// Observed state of one container, as reported in pod status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerState {
    pub name: String,
    pub ready: bool,
    pub restarts: u32,
    pub waiting_reason: Option<String>,
}

/// Mesh sidecar found in a pod
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidecarStatus {
    pub present: bool,
    pub version: Option<String>,
}

/// Raw facts about a pod, before health derivation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodFacts {
    pub namespace: String,
    pub name: String,
    pub phase: String,
    pub node: Option<String>,
    pub containers: Vec<String>,
    pub container_states: Vec<ContainerState>,
    pub init_container_states: Vec<ContainerState>,
}

/// Pod snapshot with its health flags derived once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodRecord {
    namespace: String,
    name: String,
    phase: String,
    ready: bool,
    containers: Vec<String>,
    ready_containers: usize,
    has_sidecar: bool,
    sidecar_version: Option<String>,
    problem: bool,
    reason: String,
    restarts: u32,
    node: String,
}

impl PodRecord {
    /// Derives the pod health flags
    ///
    /// - `problem`: phase is neither `Running` nor `Succeeded`
    /// - `reason`: first waiting reason of a regular container, then of an
    ///   init container, falling back to the phase
    /// - `ready`: at least one container status and all of them ready
    pub fn new(facts: PodFacts, sidecar: SidecarStatus) -> Self {
        let problem = !HEALTHY_PHASES.contains(&facts.phase.as_str());

        let reason = facts
            .container_states
            .iter()
            .chain(facts.init_container_states.iter())
            .filter_map(|c| c.waiting_reason.as_deref())
            .find(|r| !r.is_empty())
            .map(String::from)
            .unwrap_or_else(|| facts.phase.clone());

        let ready_containers = facts.container_states.iter().filter(|c| c.ready).count();
        let ready = !facts.container_states.is_empty()
            && ready_containers == facts.container_states.len();
        let restarts = facts.container_states.iter().map(|c| c.restarts).sum();

        Self {
            namespace: facts.namespace,
            name: facts.name,
            phase: facts.phase,
            ready,
            containers: facts.containers,
            ready_containers,
            has_sidecar: sidecar.present,
            sidecar_version: sidecar.version,
            problem,
            reason,
            restarts,
            node: facts.node.unwrap_or_default(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> &str {
        &self.phase
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn containers(&self) -> &[String] {
        &self.containers
    }

    pub fn ready_containers(&self) -> usize {
        self.ready_containers
    }

    pub fn has_sidecar(&self) -> bool {
        self.has_sidecar
    }

    pub fn sidecar_version(&self) -> Option<&str> {
        self.sidecar_version.as_deref()
    }

    pub fn problem(&self) -> bool {
        self.problem
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn is_running(&self) -> bool {
        self.phase == "Running"
    }
}

/// Pods of one namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodHealthGroup {
    pub namespace: String,
    pub total: usize,
    pub running: usize,
    pub sidecars: usize,
    pub pods: Vec<PodRecord>,
    pub problem_pods: Vec<PodRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(phase: &str, states: Vec<ContainerState>) -> PodFacts {
        PodFacts {
            namespace: "apps".to_string(),
            name: "api-0".to_string(),
            phase: phase.to_string(),
            node: Some("aks-user-0".to_string()),
            containers: states.iter().map(|s| s.name.clone()).collect(),
            container_states: states,
            init_container_states: vec![],
        }
    }

    fn state(name: &str, ready: bool, waiting: Option<&str>) -> ContainerState {
        ContainerState {
            name: name.to_string(),
            ready,
            restarts: 0,
            waiting_reason: waiting.map(String::from),
        }
    }

    #[test]
    fn test_running_pod_is_not_a_problem() {
        let pod = PodRecord::new(
            facts("Running", vec![state("app", true, None)]),
            SidecarStatus::default(),
        );
        assert!(!pod.problem());
        assert!(pod.ready());
        assert_eq!(pod.reason(), "Running");
        assert_eq!(pod.ready_containers(), 1);
    }

    #[test]
    fn test_succeeded_pod_is_not_a_problem() {
        let pod = PodRecord::new(
            facts("Succeeded", vec![state("job", false, None)]),
            SidecarStatus::default(),
        );
        assert!(!pod.problem());
        assert!(!pod.ready());
    }

    #[test]
    fn test_image_pull_backoff() {
        let pod = PodRecord::new(
            facts("Pending", vec![state("app", false, Some("ImagePullBackOff"))]),
            SidecarStatus::default(),
        );
        assert!(pod.problem());
        assert_eq!(pod.reason(), "ImagePullBackOff");
        assert!(!pod.ready());
    }

    #[test]
    fn test_reason_skips_empty_and_uses_first_waiting() {
        let pod = PodRecord::new(
            facts(
                "Running",
                vec![
                    state("app", true, Some("")),
                    state("worker", false, Some("CrashLoopBackOff")),
                    state("cache", false, Some("ContainerCreating")),
                ],
            ),
            SidecarStatus::default(),
        );
        assert!(!pod.problem());
        assert_eq!(pod.reason(), "CrashLoopBackOff");
    }

    #[test]
    fn test_reason_falls_back_to_init_containers() {
        let mut f = facts("Pending", vec![]);
        f.init_container_states = vec![state("migrate", false, Some("ErrImagePull"))];
        let pod = PodRecord::new(f, SidecarStatus::default());
        assert_eq!(pod.reason(), "ErrImagePull");
    }

    #[test]
    fn test_pod_without_statuses_is_not_ready() {
        let pod = PodRecord::new(facts("Pending", vec![]), SidecarStatus::default());
        assert!(!pod.ready());
        assert_eq!(pod.reason(), "Pending");
        assert_eq!(pod.node(), "aks-user-0");
    }

    #[test]
    fn test_restarts_are_summed() {
        let mut a = state("app", true, None);
        a.restarts = 2;
        let mut b = state("sidecar", true, None);
        b.restarts = 3;
        let pod = PodRecord::new(facts("Running", vec![a, b]), SidecarStatus::default());
        assert_eq!(pod.restarts(), 5);
    }
}
