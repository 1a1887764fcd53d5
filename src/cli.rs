//! Command-line interface
//!
//! Uses clap with derive. Argument names follow the `az network vnet subnet`
//! commands where one exists.

use crate::azure::read_resource_file;
use crate::config::Settings;
use crate::models::{Delegation, ResourceReference};
use crate::output::{print_vnet_summary, write_vnet_json};
use crate::processing::{add_subnet, Associations, ResourceIds, ResourceObjects, SubnetConfig};
use crate::{load_vnet, VnetSource};
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Edit Azure virtual network definitions offline
#[derive(Parser, Debug)]
#[command(name = "azure-vnet-subnet-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// log4rs configuration file [default: $AZ_SUBNET_LOG_CONFIG or log4rs.yml]
    #[arg(long, global = true)]
    pub log_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a subnet to a VNet and print or save the result
    AddSubnet(AddSubnetArgs),

    /// Print the subnets of a VNet
    Show {
        #[command(flatten)]
        source: VnetSourceArgs,
    },
}

/// Where the VNet comes from
#[derive(Args, Debug)]
pub struct VnetSourceArgs {
    /// VNet JSON file (output of `az network vnet show`)
    #[arg(
        long,
        conflicts_with_all = ["resource_group", "vnet_name"],
        required_unless_present = "resource_group"
    )]
    pub vnet_file: Option<PathBuf>,

    /// Resource group of the VNet to fetch with az
    #[arg(short = 'g', long, requires = "vnet_name")]
    pub resource_group: Option<String>,

    /// Name of the VNet to fetch with az
    #[arg(long, requires = "resource_group")]
    pub vnet_name: Option<String>,

    /// Subscription for az [default: $AZ_SUBNET_SUBSCRIPTION]
    #[arg(long)]
    pub subscription: Option<String>,
}

impl VnetSourceArgs {
    pub fn to_source(&self, settings: &Settings) -> Result<VnetSource, Box<dyn Error>> {
        if let Some(path) = &self.vnet_file {
            return Ok(VnetSource::File(path.clone()));
        }
        match (&self.resource_group, &self.vnet_name) {
            (Some(resource_group), Some(vnet_name)) => Ok(VnetSource::Azure {
                resource_group: resource_group.clone(),
                vnet_name: vnet_name.clone(),
                subscription: self.subscription.clone().or_else(|| settings.subscription.clone()),
            }),
            _ => Err("Either --vnet-file or --resource-group with --vnet-name is required".into()),
        }
    }
}

/// Options for `add-subnet`
#[derive(Args, Debug)]
pub struct AddSubnetArgs {
    #[command(flatten)]
    pub source: VnetSourceArgs,

    /// Name of the new subnet
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Address prefix in CIDR form, repeat for several
    #[arg(long = "address-prefix", value_name = "CIDR")]
    pub address_prefixes: Vec<String>,

    /// Id of an IP allocation to link, repeat for several
    #[arg(long = "ip-allocation-id", value_name = "ID")]
    pub ip_allocation_ids: Vec<String>,

    /// Network security group id
    #[arg(long, value_name = "ID")]
    pub network_security_group_id: Option<String>,

    /// Network security group JSON file, its id wins over --network-security-group-id
    #[arg(long, value_name = "FILE")]
    pub network_security_group_file: Option<PathBuf>,

    /// Route table id
    #[arg(long, value_name = "ID")]
    pub route_table_id: Option<String>,

    /// Route table JSON file, its id wins over --route-table-id
    #[arg(long, value_name = "FILE")]
    pub route_table_file: Option<PathBuf>,

    /// NAT gateway id
    #[arg(long, value_name = "ID")]
    pub nat_gateway_id: Option<String>,

    /// NAT gateway JSON file, its id wins over --nat-gateway-id
    #[arg(long, value_name = "FILE")]
    pub nat_gateway_file: Option<PathBuf>,

    /// Service endpoint, e.g. Microsoft.Storage, repeat for several
    #[arg(long = "service-endpoint", value_name = "SERVICE")]
    pub service_endpoints: Vec<String>,

    /// Delegation as NAME=SERVICE, e.g. web=Microsoft.Web/serverFarms
    #[arg(long = "delegation", value_name = "NAME=SERVICE", value_parser = parse_delegation)]
    pub delegations: Vec<Delegation>,

    /// Private endpoint network policies [default: Enabled]
    #[arg(
        long,
        value_parser = [
            "Enabled",
            "Disabled",
            "NetworkSecurityGroupEnabled",
            "RouteTableEnabled",
        ]
    )]
    pub private_endpoint_network_policies: Option<String>,

    /// Private link service network policies [default: Enabled]
    #[arg(long, value_parser = ["Enabled", "Disabled"])]
    pub private_link_service_network_policies: Option<String>,

    /// Write the VNet JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a subnet summary after adding
    #[arg(long)]
    pub summary: bool,
}

fn parse_delegation(s: &str) -> Result<Delegation, String> {
    match s.split_once('=') {
        Some((name, service)) if !name.trim().is_empty() && !service.trim().is_empty() => {
            Ok(Delegation::new(name.trim(), service.trim()))
        }
        _ => Err(format!("expected NAME=SERVICE, got '{s}'")),
    }
}

fn some_if_any<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn read_optional_resource(
    path: Option<&Path>,
) -> Result<Option<ResourceReference>, Box<dyn Error>> {
    path.map(read_resource_file).transpose()
}

impl AddSubnetArgs {
    /// Turn the arguments into a [`SubnetConfig`], reading any resource files.
    ///
    /// Any `--*-file` switches the links to resource object mode.
    pub fn subnet_config(&self) -> Result<SubnetConfig, Box<dyn Error>> {
        let ids = ResourceIds {
            network_security_group: self.network_security_group_id.clone(),
            route_table: self.route_table_id.clone(),
            nat_gateway: self.nat_gateway_id.clone(),
        };

        let by_resource = self.network_security_group_file.is_some()
            || self.route_table_file.is_some()
            || self.nat_gateway_file.is_some();

        let associations = if by_resource {
            let objects = ResourceObjects {
                network_security_group: read_optional_resource(
                    self.network_security_group_file.as_deref(),
                )?,
                route_table: read_optional_resource(self.route_table_file.as_deref())?,
                nat_gateway: read_optional_resource(self.nat_gateway_file.as_deref())?,
            };
            objects.with_ids(ids)
        } else {
            Associations::by_resource_id(ids)
        };

        Ok(SubnetConfig {
            address_prefixes: some_if_any(self.address_prefixes.clone()),
            ip_allocations: some_if_any(
                self.ip_allocation_ids
                    .iter()
                    .map(ResourceReference::from_id)
                    .collect(),
            ),
            associations,
            service_endpoints: some_if_any(self.service_endpoints.clone()),
            delegations: some_if_any(self.delegations.clone()),
            private_endpoint_network_policies: self.private_endpoint_network_policies.clone(),
            private_link_service_network_policies: self
                .private_link_service_network_policies
                .clone(),
        })
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli, settings: &Settings) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::AddSubnet(args) => {
            let config = args.subnet_config()?;
            let mut vnet = load_vnet(&args.source.to_source(settings)?)?;
            add_subnet(&mut vnet, &args.name, &config)?;
            write_vnet_json(&vnet, args.output.as_deref())?;
            if args.summary {
                print_vnet_summary(&vnet, Some(&args.name));
            }
        }
        Commands::Show { source } => {
            let vnet = load_vnet(&source.to_source(settings)?)?;
            print_vnet_summary(&vnet, None);
        }
    }
    Ok(())
}
