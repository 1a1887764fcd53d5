//! Output of the edited VNet.
//!
//! - [`json`] - JSON document for a later update call
//! - [`terminal`] - Terminal summary with colors

mod json;
mod terminal;

pub use json::{vnet_to_json, write_vnet_json};
pub use terminal::{format_field, print_vnet_summary, summary_rows, SubnetSummaryRow};
