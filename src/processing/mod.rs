//! Virtual network editing logic.
//!
//! - [`subnet_config`] - Parameters describing a new subnet
//! - [`add_subnet`] - Validate and append a subnet to a VNet

mod add_subnet;
mod subnet_config;

// Re-export public functions
pub use add_subnet::add_subnet;
pub use subnet_config::{Associations, ResourceIds, ResourceObjects, SubnetConfig};
