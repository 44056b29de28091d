use super::{parse_items, ObjectMeta};
use crate::cluster_report::domain::{DestinationRuleRecord, GatewayRecord, VirtualServiceRecord};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGateway {
    metadata: ObjectMeta,
    spec: RawGatewaySpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGatewaySpec {
    selector: BTreeMap<String, String>,
    servers: Vec<RawServer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawServer {
    hosts: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVirtualService {
    metadata: ObjectMeta,
    spec: RawVirtualServiceSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVirtualServiceSpec {
    hosts: Vec<String>,
    gateways: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDestinationRule {
    metadata: ObjectMeta,
    spec: RawDestinationRuleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDestinationRuleSpec {
    host: String,
    subsets: Vec<RawSubset>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSubset {
    name: String,
}

/// Maps an Istio Gateway listing; hosts of all servers, first occurrence kept
pub fn gateways(json: &str) -> Result<Vec<GatewayRecord>> {
    let raw: Vec<RawGateway> = parse_items(json, "gateway")?;
    Ok(raw
        .into_iter()
        .map(|g| {
            let mut hosts: Vec<String> = Vec::new();
            for host in g.spec.servers.into_iter().flat_map(|s| s.hosts) {
                if !hosts.contains(&host) {
                    hosts.push(host);
                }
            }
            GatewayRecord {
                namespace: g.metadata.namespace,
                name: g.metadata.name,
                selector: g.spec.selector,
                hosts,
            }
        })
        .collect())
}

/// Maps an Istio VirtualService listing
pub fn virtual_services(json: &str) -> Result<Vec<VirtualServiceRecord>> {
    let raw: Vec<RawVirtualService> = parse_items(json, "virtualservice")?;
    Ok(raw
        .into_iter()
        .map(|v| VirtualServiceRecord {
            namespace: v.metadata.namespace,
            name: v.metadata.name,
            hosts: v.spec.hosts,
            gateways: v.spec.gateways,
        })
        .collect())
}

/// Maps an Istio DestinationRule listing
pub fn destination_rules(json: &str) -> Result<Vec<DestinationRuleRecord>> {
    let raw: Vec<RawDestinationRule> = parse_items(json, "destinationrule")?;
    Ok(raw
        .into_iter()
        .map(|d| DestinationRuleRecord {
            namespace: d.metadata.namespace,
            name: d.metadata.name,
            host: d.spec.host,
            subsets: d.spec.subsets.into_iter().map(|s| s.name).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_gateways() {
        let json = r#"{"items": [{
            "metadata": {"name": "public", "namespace": "istio-ingress"},
            "spec": {
                "selector": {"istio": "ingressgateway"},
                "servers": [
                    {"port": {"number": 443}, "hosts": ["shop.example.com", "api.example.com"]},
                    {"port": {"number": 80}, "hosts": ["shop.example.com"]}
                ]
            }
        }]}"#;

        let gateways = gateways(json).unwrap();
        assert_eq!(gateways.len(), 1);
        assert_eq!(
            gateways[0].selector.get("istio").map(String::as_str),
            Some("ingressgateway")
        );
        assert_eq!(gateways[0].hosts, vec!["shop.example.com", "api.example.com"]);
    }

    #[test]
    fn test_map_virtual_services_and_destination_rules() {
        let vs_json = r#"{"items": [{
            "metadata": {"name": "shop", "namespace": "shop"},
            "spec": {"hosts": ["shop.example.com"], "gateways": ["istio-ingress/public"]}
        }]}"#;
        let dr_json = r#"{"items": [{
            "metadata": {"name": "api", "namespace": "shop"},
            "spec": {"host": "api.shop.svc.cluster.local", "subsets": [{"name": "v1"}, {"name": "v2"}]}
        }]}"#;

        let vss = virtual_services(vs_json).unwrap();
        assert_eq!(vss[0].gateways, vec!["istio-ingress/public"]);

        let drs = destination_rules(dr_json).unwrap();
        assert_eq!(drs[0].host, "api.shop.svc.cluster.local");
        assert_eq!(drs[0].subsets, vec!["v1", "v2"]);
    }
}
