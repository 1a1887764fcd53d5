//! IPv4 CIDR helpers used when summarising subnet address prefixes.
//!
//! Address prefixes are stored as plain strings on the model; [`Ipv4`] is only
//! parsed on demand for display, so a malformed prefix never blocks an edit.

use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Addresses Azure keeps for itself in every subnet
/// (network, gateway, 2x DNS, broadcast).
pub const AZ_RESERVED_ADDRESSES: u64 = 5;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use azure_vnet_subnet_config::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        return Err("Network length is too long".into());
    }
    // shift in u64 so a /0 does not overflow
    let right_len = MAX_LENGTH - len;
    let mask = (u32::MAX as u64 >> right_len) << right_len;
    Ok(mask as u32)
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from((u32::from(addr) & mask) | !mask))
}

/// Number of addresses Azure hands out to NICs in a subnet of size `/len`.
///
/// Azure's smallest subnet is a /29, anything smaller is rejected.
pub fn num_az_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH - 3 {
        return Err(format!("/{len} is smaller than the smallest Azure subnet (/29)").into());
    }
    Ok((1u64 << (MAX_LENGTH - len)) - AZ_RESERVED_ADDRESSES)
}

/// IPv4 address with CIDR notation support.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let (addr, mask) = addr_cidr
            .trim()
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask '{addr_cidr}'"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address '{addr}'"))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| format!("Invalid mask '{mask}'"))?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        // mask was range checked in new()
        broadcast_addr(self.addr, self.mask).unwrap_or(Ipv4Addr::BROADCAST)
    }

    /// Usable host count, `None` when the prefix is too small for Azure.
    pub fn az_hosts(&self) -> Option<u64> {
        num_az_hosts(self.mask).ok()
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
