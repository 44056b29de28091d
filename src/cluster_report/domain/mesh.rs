use serde::Serialize;
use std::collections::BTreeMap;

/// Istio `Gateway` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayRecord {
    pub namespace: String,
    pub name: String,
    pub selector: BTreeMap<String, String>,
    pub hosts: Vec<String>,
}

/// Istio `VirtualService` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualServiceRecord {
    pub namespace: String,
    pub name: String,
    pub hosts: Vec<String>,
    pub gateways: Vec<String>,
}

/// Istio `DestinationRule` resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationRuleRecord {
    pub namespace: String,
    pub name: String,
    pub host: String,
    pub subsets: Vec<String>,
}

/// Service mesh state of the cluster
///
/// Fields are private so that a mesh that is not installed can never carry
/// a version, a namespace or mesh resources, and counts always match lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshState {
    installed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    gateways: Vec<GatewayRecord>,
    virtual_services: Vec<VirtualServiceRecord>,
    destination_rules: Vec<DestinationRuleRecord>,
    gateway_count: usize,
    virtual_service_count: usize,
    destination_rule_count: usize,
}

impl MeshState {
    pub fn not_installed() -> Self {
        Self {
            installed: false,
            version: None,
            namespace: None,
            gateways: Vec::new(),
            virtual_services: Vec::new(),
            destination_rules: Vec::new(),
            gateway_count: 0,
            virtual_service_count: 0,
            destination_rule_count: 0,
        }
    }

    pub fn installed(
        namespace: String,
        version: String,
        gateways: Vec<GatewayRecord>,
        virtual_services: Vec<VirtualServiceRecord>,
        destination_rules: Vec<DestinationRuleRecord>,
    ) -> Self {
        Self {
            installed: true,
            version: Some(version),
            namespace: Some(namespace),
            gateway_count: gateways.len(),
            virtual_service_count: virtual_services.len(),
            destination_rule_count: destination_rules.len(),
            gateways,
            virtual_services,
            destination_rules,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn gateways(&self) -> &[GatewayRecord] {
        &self.gateways
    }

    pub fn virtual_services(&self) -> &[VirtualServiceRecord] {
        &self.virtual_services
    }

    pub fn destination_rules(&self) -> &[DestinationRuleRecord] {
        &self.destination_rules
    }
}

impl Default for MeshState {
    fn default() -> Self {
        Self::not_installed()
    }
}
