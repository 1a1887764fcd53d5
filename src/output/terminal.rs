//! Terminal output utilities.
//!
//! Provides formatting helpers and the VNet subnet summary table.

use crate::models::{Ipv4, ResourceReference, Subnet, VirtualNetwork};
use colored::Colorize;
use itertools::Itertools;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// One line of the subnet summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SubnetSummaryRow {
    pub name: String,
    pub prefixes: String,
    pub broadcast: String,
    pub az_hosts: String,
    pub nsg: String,
    pub route_table: String,
    pub nat_gateway: String,
    pub service_endpoints: String,
    pub delegations: String,
}

const NONE: &str = "-";

impl SubnetSummaryRow {
    pub fn new(subnet: &Subnet) -> Self {
        let prefixes = subnet.prefixes();
        // computed columns use the first prefix only
        let first = prefixes.first().and_then(|p| Ipv4::new(p).ok());

        let link_name = |link: Option<&ResourceReference>| {
            link.and_then(|l| l.resource_name()).unwrap_or(NONE).to_string()
        };

        SubnetSummaryRow {
            name: subnet.name.clone(),
            prefixes: or_none(prefixes.iter().join(",")),
            broadcast: first.map(|ip| ip.broadcast().to_string()).unwrap_or_else(|| NONE.into()),
            az_hosts: first
                .and_then(|ip| ip.az_hosts())
                .map(|n| n.to_string())
                .unwrap_or_else(|| NONE.into()),
            nsg: link_name(subnet.network_security_group.as_ref()),
            route_table: link_name(subnet.route_table.as_ref()),
            nat_gateway: link_name(subnet.nat_gateway.as_ref()),
            service_endpoints: or_none(
                subnet
                    .service_endpoints
                    .iter()
                    .flatten()
                    .map(|e| &e.service)
                    .join(","),
            ),
            delegations: or_none(
                subnet
                    .delegations
                    .iter()
                    .flatten()
                    .map(|d| &d.service_name)
                    .join(","),
            ),
        }
    }
}

fn or_none(s: String) -> String {
    if s.is_empty() {
        NONE.to_string()
    } else {
        s
    }
}

/// Summary rows for every subnet, in VNet order.
pub fn summary_rows(vnet: &VirtualNetwork) -> Vec<SubnetSummaryRow> {
    vnet.subnets.iter().map(SubnetSummaryRow::new).collect()
}

/// Print the VNet and its subnets to stdout.
///
/// `highlight` marks a subnet (e.g. the one just added) in green.
pub fn print_vnet_summary(vnet: &VirtualNetwork, highlight: Option<&str>) {
    println!(
        "VNET: '{name}' {location} - {cidrs}",
        name = vnet.name.bold(),
        location = vnet.location.as_deref().unwrap_or(NONE),
        cidrs = or_none(vnet.address_prefixes().iter().join(", "))
    );
    println!(
        r#"{:>26},{:>34},{:>17},{:>8},{:>22},{:>22},{:>22},  "service_endpoints",  "delegations""#,
        "\"subnet_name\"",
        "\"prefixes\"",
        "\"broadcast\"",
        "\"hosts\"",
        "\"nsg\"",
        "\"route_table\"",
        "\"nat_gateway\""
    );

    for row in summary_rows(vnet) {
        let line = format!(
            "{name},{prefixes},{broadcast},{hosts},{nsg},{rt},{nat},{se},{dl}",
            name = format_field(&row.name, 26),
            prefixes = format_field(&row.prefixes, 34),
            broadcast = format_field(&row.broadcast, 17),
            hosts = format_field(&row.az_hosts, 8),
            nsg = format_field(&row.nsg, 22),
            rt = format_field(&row.route_table, 22),
            nat = format_field(&row.nat_gateway, 22),
            se = format_field(&row.service_endpoints, 21),
            dl = format_field(&row.delegations, 15),
        );
        let is_highlighted = highlight.is_some_and(|h| row.name.to_lowercase() == h.to_lowercase());
        if is_highlighted {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
    log::info!("VNET '{}': {} subnets", vnet.name, vnet.subnets.len());
}
