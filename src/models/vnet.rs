//! Azure Virtual Network (VNet) data model.

use super::Subnet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A virtual network and the subnets it owns.
///
/// The subnet list keeps insertion order; names are unique ignoring case.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetwork {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_space: Option<AddressSpace>,
    /// `null` from `az` reads as no subnets.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub subnets: Vec<Subnet>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The VNet level address ranges.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpace {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub address_prefixes: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VirtualNetwork {
    /// Create an empty VNet called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        VirtualNetwork {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Find a subnet by name, ignoring case.
    pub fn find_subnet(&self, name: &str) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.has_name(name))
    }

    /// Subnet names in list order.
    pub fn subnet_names(&self) -> Vec<&str> {
        self.subnets.iter().map(|s| s.name.as_str()).collect()
    }

    /// VNet address prefixes, empty if the address space is unknown.
    pub fn address_prefixes(&self) -> &[String] {
        self.address_space
            .as_ref()
            .map(|a| a.address_prefixes.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for VirtualNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VNet '{}' [{}] ({} subnets)",
            self.name,
            self.address_prefixes().join(", "),
            self.subnets.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_subnet_ignores_case() {
        let mut vnet = VirtualNetwork::new("vnet-hub");
        vnet.subnets.push(Subnet::new("GatewaySubnet"));
        vnet.subnets.push(Subnet::new("snet-app"));

        assert_eq!(
            vnet.find_subnet("gatewaysubnet").map(|s| s.name.as_str()),
            Some("GatewaySubnet")
        );
        assert!(vnet.find_subnet("SNET-APP").is_some());
        assert!(vnet.find_subnet("snet-db").is_none());
        assert_eq!(vnet.subnet_names(), vec!["GatewaySubnet", "snet-app"]);
    }

    #[test]
    fn test_display() {
        let mut vnet = VirtualNetwork::new("vnet-hub");
        assert_eq!(vnet.to_string(), "VNet 'vnet-hub' [] (0 subnets)");

        vnet.address_space = Some(AddressSpace {
            address_prefixes: vec!["10.0.0.0/16".into(), "10.1.0.0/16".into()],
            ..Default::default()
        });
        vnet.subnets.push(Subnet::new("a"));
        assert_eq!(
            vnet.to_string(),
            "VNet 'vnet-hub' [10.0.0.0/16, 10.1.0.0/16] (1 subnets)"
        );
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = serde_json::json!({
            "name": "vnet-spoke",
            "location": "westeurope",
            "addressSpace": { "addressPrefixes": ["10.2.0.0/16"] },
            "dhcpOptions": { "dnsServers": ["10.0.0.4"] },
            "tags": { "env": "prod" },
            "subnets": [{
                "name": "default",
                "addressPrefix": "10.2.0.0/24",
                "ipConfigurations": [{ "id": "/nic1" }]
            }]
        });
        let vnet: VirtualNetwork = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(vnet.address_prefixes(), ["10.2.0.0/16".to_string()]);
        assert_eq!(vnet.extra["tags"]["env"], "prod");
        assert_eq!(serde_json::to_value(&vnet).unwrap(), json);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let json = r#"{
            "name": "v",
            "addressSpace": { "addressPrefixes": null },
            "subnets": null
        }"#;
        let vnet: VirtualNetwork = serde_json::from_str(json).unwrap();
        assert!(vnet.subnets.is_empty());
        assert!(vnet.address_prefixes().is_empty());

        let json = r#"{
            "name": "v",
            "subnets": [{
                "name": "a",
                "addressPrefix": "10.0.0.0/24",
                "ipAllocations": null,
                "natGateway": null
            }]
        }"#;
        let vnet: VirtualNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(vnet.subnet_names(), vec!["a"]);
        assert_eq!(vnet.subnets[0].ip_allocations, None);
        assert_eq!(vnet.subnets[0].nat_gateway, None);
    }

    #[test]
    fn test_empty_ip_allocations_round_trip() {
        let json = serde_json::json!({
            "name": "v",
            "subnets": [
                { "name": "a", "addressPrefix": "10.0.0.0/24", "ipAllocations": [] },
                { "name": "b", "addressPrefix": "10.0.1.0/24" }
            ]
        });
        let vnet: VirtualNetwork = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(vnet.subnets[0].ip_allocations, Some(vec![]));
        assert_eq!(vnet.subnets[1].ip_allocations, None);
        assert_eq!(serde_json::to_value(&vnet).unwrap(), json);
    }
}
