//! Azure CLI interaction and VNet loading.
//!
//! This module supplies the VNet that gets edited:
//! - [`cli`] - Command execution for Azure CLI
//! - [`vnet`] - Reading VNets and linked resources from files or `az`

mod cli;
mod vnet;

// Re-export public types and functions
pub use cli::run_args;
pub use vnet::{fetch_vnet, parse_vnet_json, read_resource_file, read_vnet_file};
