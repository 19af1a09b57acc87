//! Subnet engine: derives the full [`SubnetInfo`] report for an
//! (address, prefix) pair.
//!
//! Every quantity is recomputed from the inputs on each call; there is no
//! caching and no state shared between calls.

use crate::models::{
    broadcast_addr, is_valid_cidr, is_valid_ipv4, network_addr, subnet_mask, wildcard_mask,
    IpClass, IpType, SubnetInfo, MAX_LENGTH,
};
use itertools::Itertools;
use std::error::Error;
use std::net::Ipv4Addr;

/// First usable address: network + 1, except at /31 and /32 where the
/// network address itself is usable (point-to-point / host route).
pub fn first_usable_ip(network: Ipv4Addr, cidr: u8) -> Ipv4Addr {
    if cidr >= MAX_LENGTH - 1 {
        network
    } else {
        Ipv4Addr::from(u32::from(network) + 1)
    }
}

/// Last usable address: broadcast - 1, with the same /31 and /32 exception.
pub fn last_usable_ip(broadcast: Ipv4Addr, cidr: u8) -> Ipv4Addr {
    if cidr >= MAX_LENGTH - 1 {
        broadcast
    } else {
        Ipv4Addr::from(u32::from(broadcast) - 1)
    }
}

/// Total addresses in the subnet: 2^(32-cidr).
pub fn total_hosts(cidr: u8) -> u64 {
    1u64 << (MAX_LENGTH - cidr)
}

/// Usable host count: total minus network and broadcast, except /31 (2) and
/// /32 (1) where no addresses are subtracted.
pub fn usable_hosts(cidr: u8) -> u64 {
    match cidr {
        31 => 2,
        32 => 1,
        _ => total_hosts(cidr) - 2,
    }
}

/// Address class from the first octet. 0 and 127 belong to no class and map
/// to [`IpClass::Unknown`], even though 127 is loopback for [`ip_type`].
pub fn ip_class(addr: Ipv4Addr) -> IpClass {
    match addr.octets()[0] {
        1..=126 => IpClass::A,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        240..=255 => IpClass::E,
        _ => IpClass::Unknown,
    }
}

/// RFC1918 plus loopback check, applied to the raw input address.
pub fn ip_type(addr: Ipv4Addr) -> IpType {
    let octets = addr.octets();
    match (octets[0], octets[1]) {
        (10, _) => IpType::Private,
        (172, 16..=31) => IpType::Private,
        (192, 168) => IpType::Private,
        (127, _) => IpType::Private,
        _ => IpType::Public,
    }
}

/// Each octet as zero-padded 8-bit binary, joined with '.'.
pub fn ip_to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Compute the full subnet report for an address string and prefix length.
///
/// Returns an error when the address is not a strict dotted quad or the
/// prefix exceeds 32; no partial report is ever produced.
pub fn calculate_ip_info(ip: &str, cidr: u8) -> Result<SubnetInfo, Box<dyn Error>> {
    if !is_valid_ipv4(ip) {
        return Err(format!("Invalid IPv4 address: {ip}").into());
    }
    if !is_valid_cidr(cidr) {
        return Err(format!("Invalid CIDR prefix: /{cidr}").into());
    }
    let addr: Ipv4Addr = ip.parse()?;
    log::debug!("calculate_ip_info({addr}/{cidr})");

    let network = network_addr(addr, cidr)?;
    let broadcast = broadcast_addr(addr, cidr)?;

    Ok(SubnetInfo {
        ip_address: addr,
        cidr,
        network_address: network,
        broadcast_address: broadcast,
        subnet_mask: Ipv4Addr::from(subnet_mask(cidr)?),
        wildcard_mask: Ipv4Addr::from(wildcard_mask(cidr)?),
        first_usable_ip: first_usable_ip(network, cidr),
        last_usable_ip: last_usable_ip(broadcast, cidr),
        total_hosts: total_hosts(cidr),
        usable_hosts: usable_hosts(cidr),
        ip_class: ip_class(addr),
        ip_type: ip_type(addr),
        binary: ip_to_binary(addr),
    })
}
