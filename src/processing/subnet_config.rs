//! Parameters for a new subnet.
//!
//! [`SubnetConfig`] is built once by the caller and only read by
//! [`add_subnet`](super::add_subnet). The NSG / route table / NAT gateway links
//! come in two forms, see [`Associations`].

use crate::config::DEFAULT_POLICY_FLAG;
use crate::models::{Delegation, ResourceReference};

/// Raw resource ids for the three associations a subnet can carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceIds {
    pub network_security_group: Option<String>,
    pub route_table: Option<String>,
    pub nat_gateway: Option<String>,
}

/// Full resource objects (e.g. a fetched NSG) whose ids are linked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceObjects {
    pub network_security_group: Option<ResourceReference>,
    pub route_table: Option<ResourceReference>,
    pub nat_gateway: Option<ResourceReference>,
}

impl ResourceObjects {
    /// [`Associations::ByResource`] linking these objects, with `fallback`
    /// ids for the slots that have no object.
    pub fn with_ids(self, fallback: ResourceIds) -> Associations {
        Associations::ByResource {
            objects: self,
            ids: fallback,
        }
    }
}

/// How the caller supplied the subnet's associations.
#[derive(Debug, Clone, PartialEq)]
pub enum Associations {
    /// Ids used as given.
    ById(ResourceIds),
    /// Ids taken from resource objects. A supplied object always replaces
    /// the matching entry of `ids`, even when the object carries no id.
    ByResource {
        objects: ResourceObjects,
        ids: ResourceIds,
    },
}

impl Associations {
    pub fn by_resource_id(ids: ResourceIds) -> Self {
        Associations::ById(ids)
    }

    pub fn by_resource(objects: ResourceObjects) -> Self {
        Associations::ByResource {
            objects,
            ids: ResourceIds::default(),
        }
    }

    /// Final ids to link, after objects have overridden raw ids.
    pub fn resolve(&self) -> ResourceIds {
        match self {
            Associations::ById(ids) => ids.clone(),
            Associations::ByResource { objects, ids } => {
                let pick = |object: &Option<ResourceReference>, id: &Option<String>| match object {
                    Some(object) => object.id.clone(),
                    None => id.clone(),
                };
                ResourceIds {
                    network_security_group: pick(
                        &objects.network_security_group,
                        &ids.network_security_group,
                    ),
                    route_table: pick(&objects.route_table, &ids.route_table),
                    nat_gateway: pick(&objects.nat_gateway, &ids.nat_gateway),
                }
            }
        }
    }
}

impl Default for Associations {
    fn default() -> Self {
        Associations::ById(ResourceIds::default())
    }
}

/// Everything optional about a new subnet. `None` leaves the field unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubnetConfig {
    pub address_prefixes: Option<Vec<String>>,
    pub ip_allocations: Option<Vec<ResourceReference>>,
    pub associations: Associations,
    pub service_endpoints: Option<Vec<String>>,
    pub delegations: Option<Vec<Delegation>>,
    pub private_endpoint_network_policies: Option<String>,
    pub private_link_service_network_policies: Option<String>,
}

impl SubnetConfig {
    /// `privateEndpointNetworkPolicies` to write, defaulting to `Enabled`.
    pub fn private_endpoint_policies(&self) -> String {
        policy_or_default(self.private_endpoint_network_policies.as_deref())
    }

    /// `privateLinkServiceNetworkPolicies` to write, defaulting to `Enabled`.
    pub fn private_link_service_policies(&self) -> String {
        policy_or_default(self.private_link_service_network_policies.as_deref())
    }
}

fn policy_or_default(flag: Option<&str>) -> String {
    match flag {
        Some(flag) if !flag.is_empty() => flag.to_string(),
        _ => DEFAULT_POLICY_FLAG.to_string(),
    }
}
