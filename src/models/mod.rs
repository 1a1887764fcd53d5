//! Domain models for Azure virtual network editing.
//!
//! This module contains the core data structures used throughout the application:
//! - [`VirtualNetwork`] - the VNet aggregate that owns its subnets
//! - [`Subnet`], [`ServiceEndpoint`], [`Delegation`] - subnet configuration
//! - [`ResourceReference`] - id-only links to NSGs, route tables, NAT gateways
//! - [`Ipv4`] - IPv4 CIDR helpers for summaries

mod ipv4;
mod resource;
mod subnet;
mod vnet;

use serde::{Deserialize, Deserializer};

// Re-export public types
pub use ipv4::{
    broadcast_addr, get_cidr_mask, num_az_hosts, Ipv4, AZ_RESERVED_ADDRESSES, MAX_LENGTH,
};
pub use resource::ResourceReference;
pub use subnet::{Delegation, ServiceEndpoint, Subnet};
pub use vnet::{AddressSpace, VirtualNetwork};

/// `az` prints unset lists as `null`; read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
