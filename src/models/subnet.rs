//! Subnet report data model.

use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Address class derived from the first octet of the input address.
///
/// 0 and 127 fall outside every class range and map to [`IpClass::Unknown`];
/// 127.x.x.x is still loopback for [`IpType`] purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast range (224-239).
    D,
    /// Reserved range (240-255).
    E,
    Unknown,
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D (Multicast)",
            IpClass::E => "E (Reserved)",
            IpClass::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

impl Serialize for IpClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Public/private classification of the input address (RFC1918 + loopback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpType {
    Private,
    Public,
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            IpType::Private => "Private",
            IpType::Public => "Public",
        };
        write!(f, "{label}")
    }
}

impl Serialize for IpType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Full set of quantities derived from an (address, prefix) pair.
///
/// Recomputed fresh on every query; holds no references back to the engine.
///
/// Invariants: `network_address & wildcard == 0` and
/// `broadcast_address == network_address | wildcard`, where `wildcard` is the
/// 32-bit complement of `subnet_mask`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The input address, as given.
    pub ip_address: Ipv4Addr,
    /// The input prefix length.
    pub cidr: u8,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    /// Network + 1, except /31 and /32 where it is the network itself.
    pub first_usable_ip: Ipv4Addr,
    /// Broadcast - 1, except /31 and /32 where it is the broadcast itself.
    pub last_usable_ip: Ipv4Addr,
    /// 2^(32-cidr).
    pub total_hosts: u64,
    /// Total minus network and broadcast; 2 at /31, 1 at /32.
    pub usable_hosts: u64,
    /// Class of the input address, not of the network address.
    pub ip_class: IpClass,
    /// Classification of the input address, not of the network address.
    pub ip_type: IpType,
    /// The input address as dot-grouped 8-bit binary.
    pub binary: String,
}
