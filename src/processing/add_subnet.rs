//! Append a new subnet to a virtual network.

use super::SubnetConfig;
use crate::error::{SubnetConfigError, SubnetConfigResult};
use crate::models::{ResourceReference, ServiceEndpoint, Subnet, VirtualNetwork};
use colored::Colorize;

/// Add subnet `name` built from `config` to the end of `vnet.subnets`.
///
/// Fails with [`SubnetConfigError::DuplicateName`] if the VNet already has a
/// subnet of that name (ignoring case); `vnet` is left untouched then.
/// Nothing is sent to Azure, the caller persists the returned VNet.
///
/// # Arguments
/// * `vnet` - The VNet to modify in place
/// * `name` - Name of the new subnet
/// * `config` - Optional subnet settings
///
/// # Returns
/// * `Ok(&mut VirtualNetwork)` - `vnet`, now holding the new subnet last
pub fn add_subnet<'a>(
    vnet: &'a mut VirtualNetwork,
    name: &str,
    config: &SubnetConfig,
) -> SubnetConfigResult<&'a mut VirtualNetwork> {
    if let Some(existing) = vnet.find_subnet(name) {
        log::warn!(
            "{} subnet '{name}' in VNet '{vnet_name}', '{existing}' already exists",
            "rejected".on_red(),
            vnet_name = vnet.name,
            existing = existing.name,
        );
        return Err(SubnetConfigError::DuplicateName(name.to_string()));
    }

    let subnet = build_subnet(name, config);
    log::debug!("new subnet {:?}", subnet);
    vnet.subnets.push(subnet);

    log::info!(
        "Added subnet '{name}' to VNet '{vnet_name}' => {count} subnets",
        name = name.green(),
        vnet_name = vnet.name,
        count = vnet.subnets.len()
    );
    Ok(vnet)
}

fn build_subnet(name: &str, config: &SubnetConfig) -> Subnet {
    let ids = config.associations.resolve();

    let mut subnet = Subnet::new(name);
    subnet.address_prefixes = config.address_prefixes.clone();

    if let Some(allocations) = &config.ip_allocations {
        subnet
            .ip_allocations
            .get_or_insert_with(Vec::new)
            .extend(allocations.iter().cloned());
    }

    subnet.network_security_group = id_reference(ids.network_security_group);
    subnet.route_table = id_reference(ids.route_table);
    subnet.nat_gateway = id_reference(ids.nat_gateway);

    subnet.service_endpoints = config
        .service_endpoints
        .as_ref()
        .map(|names| names.iter().map(ServiceEndpoint::new).collect());

    subnet.delegations = config.delegations.clone();

    subnet.private_endpoint_network_policies = Some(config.private_endpoint_policies());
    subnet.private_link_service_network_policies = Some(config.private_link_service_policies());

    subnet
}

/// Id-only reference, skipped for a missing or empty id.
fn id_reference(id: Option<String>) -> Option<ResourceReference> {
    id.filter(|id| !id.is_empty()).map(ResourceReference::from_id)
}
