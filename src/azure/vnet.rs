//! Loading virtual networks and linked resources.
//!
//! A VNet comes either from a JSON file (as saved by
//! `az network vnet show --output json`) or straight from the `az` CLI.

use super::cli;
use crate::models::{ResourceReference, VirtualNetwork};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::path::Path;

/// Parse JSON, reporting the path of the first field that fails.
fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("JSON START:\n\n{}\n\nJSON END\n", json);
        Box::<dyn Error>::from(format!("Error parsing {what}: path={} error={}", e.path(), e))
    })
}

/// Parse a VNet JSON document.
pub fn parse_vnet_json(json: &str) -> Result<VirtualNetwork, Box<dyn Error>> {
    parse_json(json, "VNet JSON")
}

/// Read a VNet from a JSON file.
///
/// # Arguments
/// * `path` - File holding one VNet object
///
/// # Returns
/// * `Ok(VirtualNetwork)` - The parsed VNet
/// * `Err` - If the file is missing or not a VNet document
pub fn read_vnet_file(path: impl AsRef<Path>) -> Result<VirtualNetwork, Box<dyn Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("VNet file does not exist: {}", path.display()).into());
    }
    log::info!("Reading VNet from file: {}", path.display());
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading VNet file {}: {e}", path.display()))?;
    let vnet = parse_vnet_json(&json)?;
    log::info!("Loaded {vnet}");
    Ok(vnet)
}

/// Read a full resource object (NSG, route table, NAT gateway) from a JSON
/// file. Only its id is used when linking it to a subnet.
pub fn read_resource_file(path: impl AsRef<Path>) -> Result<ResourceReference, Box<dyn Error>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading resource file {}: {e}", path.display()))?;
    let resource: ResourceReference = parse_json(&json, "resource JSON")?;
    log::debug!(
        "Resource from {}: id={:?}",
        path.display(),
        resource.id.as_deref().unwrap_or("<none>")
    );
    Ok(resource)
}

/// Arguments for `az network vnet show`, one entry per argument.
fn vnet_show_args<'a>(
    resource_group: &'a str,
    vnet_name: &'a str,
    subscription: Option<&'a str>,
) -> Vec<&'a str> {
    let mut args = vec![
        "network",
        "vnet",
        "show",
        "--resource-group",
        resource_group,
        "--name",
        vnet_name,
    ];
    if let Some(subscription) = subscription {
        args.extend(["--subscription", subscription]);
    }
    args.extend(["--output", "json"]);
    args
}

/// Fetch a VNet with the Azure CLI.
///
/// # Arguments
/// * `resource_group` - Resource group of the VNet
/// * `vnet_name` - Name of the VNet
/// * `subscription` - Optional subscription name or id
pub fn fetch_vnet(
    resource_group: &str,
    vnet_name: &str,
    subscription: Option<&str>,
) -> Result<VirtualNetwork, Box<dyn Error>> {
    let args = vnet_show_args(resource_group, vnet_name, subscription);
    let output = cli::run_args("az", &args)?;
    let vnet = parse_vnet_json(&output)?;
    log::info!("Fetched {vnet} from resource group '{resource_group}'");
    Ok(vnet)
}
