//! Add subnets to Azure virtual network definitions.
//!
//! A VNet is loaded (from a JSON file or the `az` CLI), edited in memory with
//! [`processing::add_subnet`] and written back out as JSON for a separate
//! update step to apply.
//!
//! - [`models`] - VNet / subnet data model
//! - [`processing`] - Subnet validation and construction
//! - [`azure`] - Loading VNets and linked resources
//! - [`output`] - JSON and terminal output
//! - [`cli`] - Command line front end

pub mod azure;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use models::VirtualNetwork;
use std::error::Error;
use std::path::PathBuf;

pub use error::SubnetConfigError;
pub use processing::{add_subnet, SubnetConfig};

/// Where to read the VNet from.
#[derive(Debug, Clone, PartialEq)]
pub enum VnetSource {
    /// JSON file as saved from `az network vnet show`.
    File(PathBuf),
    /// Live VNet, fetched with the `az` CLI.
    Azure {
        resource_group: String,
        vnet_name: String,
        subscription: Option<String>,
    },
}

/// Load the VNet to edit.
pub fn load_vnet(source: &VnetSource) -> Result<VirtualNetwork, Box<dyn Error>> {
    match source {
        VnetSource::File(path) => azure::read_vnet_file(path),
        VnetSource::Azure {
            resource_group,
            vnet_name,
            subscription,
        } => azure::fetch_vnet(resource_group, vnet_name, subscription.as_deref()),
    }
}
