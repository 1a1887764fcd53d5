//! Azure subnet data model.

use super::ResourceReference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A subnet inside a virtual network, in the camelCase shape
/// `az network vnet show` prints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Name of the subnet, unique (ignoring case) within its VNet.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Single prefix form, as Azure reports subnets with one prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix: Option<String>,
    /// Multi prefix form. New subnets always use this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefixes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_allocations: Option<Vec<ResourceReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table: Option<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat_gateway: Option<ResourceReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_endpoints: Option<Vec<ServiceEndpoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegations: Option<Vec<Delegation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_endpoint_network_policies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_link_service_network_policies: Option<String>,
    /// Everything else Azure returned (ipConfigurations, provisioningState, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Subnet {
    /// Empty subnet called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Subnet {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// All address prefixes, whichever of the two fields holds them.
    pub fn prefixes(&self) -> Vec<&str> {
        match &self.address_prefixes {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ => self.address_prefix.iter().map(String::as_str).collect(),
        }
    }
}

/// Service endpoint enabling private routing to a platform service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    /// Service name, e.g. `Microsoft.Storage`.
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceEndpoint {
    pub fn new(service: impl Into<String>) -> Self {
        ServiceEndpoint {
            service: service.into(),
            ..Default::default()
        }
    }
}

/// Hands control of the subnet to a platform service.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub name: String,
    /// Delegated service, e.g. `Microsoft.Web/serverFarms`.
    pub service_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Delegation {
    pub fn new(name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Delegation {
            name: name.into(),
            service_name: service_name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_name_ignores_case() {
        let subnet = Subnet::new("FrontEnd");
        assert!(subnet.has_name("frontend"));
        assert!(subnet.has_name("FRONTEND"));
        assert!(!subnet.has_name("front-end"));
    }

    #[test]
    fn test_prefixes_single_and_list() {
        let mut subnet = Subnet::new("a");
        assert!(subnet.prefixes().is_empty());

        subnet.address_prefix = Some("10.0.1.0/24".to_string());
        assert_eq!(subnet.prefixes(), vec!["10.0.1.0/24"]);

        subnet.address_prefixes = Some(vec!["10.0.2.0/24".into(), "10.0.3.0/24".into()]);
        assert_eq!(subnet.prefixes(), vec!["10.0.2.0/24", "10.0.3.0/24"]);
    }

    #[test]
    fn test_deserialize_az_subnet() {
        let json = serde_json::json!({
            "name": "snet-web",
            "addressPrefix": "10.1.0.0/24",
            "networkSecurityGroup": {
                "id": "/x/networkSecurityGroups/nsg-web",
                "resourceGroup": "rg"
            },
            "serviceEndpoints": [{
                "service": "Microsoft.Sql",
                "locations": ["westeurope"],
                "provisioningState": "Succeeded"
            }],
            "delegations": [],
            "privateEndpointNetworkPolicies": "Disabled",
            "provisioningState": "Succeeded"
        });
        let subnet: Subnet = serde_json::from_value(json).unwrap();
        assert_eq!(subnet.name, "snet-web");
        assert_eq!(subnet.prefixes(), vec!["10.1.0.0/24"]);
        assert_eq!(
            subnet
                .network_security_group
                .as_ref()
                .and_then(|n| n.resource_name()),
            Some("nsg-web")
        );
        let endpoints = subnet.service_endpoints.as_ref().unwrap();
        assert_eq!(endpoints[0].service, "Microsoft.Sql");
        assert_eq!(endpoints[0].extra["provisioningState"], "Succeeded");
        assert_eq!(
            subnet.private_endpoint_network_policies.as_deref(),
            Some("Disabled")
        );
        assert_eq!(subnet.private_link_service_network_policies, None);
        assert_eq!(subnet.extra["provisioningState"], "Succeeded");
    }

    #[test]
    fn test_deserialize_null_properties() {
        let json = serde_json::json!({
            "name": "snet-null",
            "addressPrefix": "10.1.1.0/24",
            "ipAllocations": null,
            "natGateway": null,
            "networkSecurityGroup": null,
            "serviceEndpoints": null,
            "delegations": null,
            "privateEndpointNetworkPolicies": null
        });
        let subnet: Subnet = serde_json::from_value(json).unwrap();
        assert_eq!(subnet.ip_allocations, None);
        assert_eq!(subnet.nat_gateway, None);
        assert_eq!(subnet.service_endpoints, None);
        assert_eq!(subnet.private_endpoint_network_policies, None);
    }

    #[test]
    fn test_empty_ip_allocations_kept() {
        let json = serde_json::json!({ "name": "a", "ipAllocations": [] });
        let subnet: Subnet = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(subnet.ip_allocations, Some(vec![]));
        assert_eq!(serde_json::to_value(&subnet).unwrap(), json);
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let subnet = Subnet::new("bare");
        let json = serde_json::to_value(&subnet).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "bare" }));
    }
}
