//! A stand-in `kubectl` for driving the binary end to end
//!
//! The script answers the queries of a small cluster: three namespaces (one
//! pinned to the `system` pool), one 3/3 deployment, a running pod and a pod
//! stuck in `ImagePullBackOff`. It
//! has no Istio namespace and no autoscaling or storage CRD answers, so those
//! queries fail like they would against a bare cluster.

use std::fs;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
case "$1 $2" in
  "version -o")
    echo '{"clientVersion":{"gitVersion":"v1.29.1"},"serverVersion":{"gitVersion":"v1.29.2"}}'
    ;;
  "get namespace")
    if [ "$3" = "shop" ] && [ "$5" = "json" ]; then
      echo '{"kind": "Namespace", "metadata": {"name": "shop"}}'
    elif [ "$3" = "shop" ]; then
      echo "namespace/shop"
    else
      echo "Error from server (NotFound): namespaces \"$3\" not found" >&2
      exit 1
    fi
    ;;
  "get nodes")
    cat <<'JSON'
{"kind": "List", "items": [
  {"metadata": {"name": "kind-control-plane", "labels": {"agentpool": "system"}},
   "status": {"conditions": [{"type": "Ready", "status": "True"}]}}
]}
JSON
    ;;
  "get namespaces")
    cat <<'JSON'
{"kind": "List", "items": [
  {"metadata": {"name": "default"}},
  {"metadata": {"name": "kube-system"}},
  {"metadata": {"name": "shop",
    "annotations": {"scheduler.alpha.kubernetes.io/node-selector": "agentpool=system"}}}
]}
JSON
    ;;
  "get deployments.apps")
    cat <<'JSON'
{"kind": "List", "items": [
  {"metadata": {"name": "api", "namespace": "shop"},
   "spec": {"replicas": 3, "template": {"spec": {"containers": [{"name": "api", "image": "shop/api:1.0"}]}}},
   "status": {"readyReplicas": 3}}
]}
JSON
    ;;
  "get pods")
    cat <<'JSON'
{"kind": "List", "items": [
  {"metadata": {"name": "api-0", "namespace": "shop"},
   "spec": {"nodeName": "kind-control-plane", "containers": [{"name": "api", "image": "shop/api:1.0"}]},
   "status": {"phase": "Running", "containerStatuses": [{"name": "api", "ready": true, "restartCount": 0}]}},
  {"metadata": {"name": "web-0", "namespace": "shop"},
   "spec": {"containers": [{"name": "web", "image": "shop/web:missing"}]},
   "status": {"phase": "Pending", "containerStatuses": [
     {"name": "web", "ready": false, "restartCount": 0,
      "state": {"waiting": {"reason": "ImagePullBackOff", "message": "Back-off pulling image"}}}]}},
  {"metadata": {"name": "coredns-0", "namespace": "kube-system"},
   "spec": {"containers": [{"name": "coredns", "image": "coredns:1.11"}]},
   "status": {"phase": "Running", "containerStatuses": [{"name": "coredns", "ready": true, "restartCount": 0}]}}
]}
JSON
    ;;
  "get statefulsets.apps"|"get daemonsets.apps"|"get cronjobs.batch")
    echo '{"kind": "List", "items": []}'
    ;;
  *)
    echo "error: the server doesn't have a resource type \"$2\"" >&2
    exit 1
    ;;
esac
"#;

/// Writes the fake kubectl into `dir` and returns its path
#[cfg(unix)]
pub fn install(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-kubectl");
    fs::write(&path, SCRIPT).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Report files written under `dir`
pub fn reports_in(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().path())
            .filter(|p| p.is_file())
            .collect(),
        Err(_) => Vec::new(),
    }
}
