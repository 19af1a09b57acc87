//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for an address/prefix pair, strict dotted-quad
//! validation, and the 32-bit mask arithmetic the subnet engine builds on.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Strict dotted-quad check: exactly four octets in 0-255, each written the
/// way its integer value round-trips (no leading zeros, signs or whitespace).
pub fn is_valid_ipv4(ip: &str) -> bool {
    match DOTTED_QUAD.captures(ip) {
        Some(caps) => (1..=4).all(|i| {
            let part = &caps[i];
            match part.parse::<u32>() {
                Ok(n) => n <= 255 && n.to_string() == part,
                Err(_) => false,
            }
        }),
        None => false,
    }
}

/// A CIDR prefix is valid when it is at most 32 bits.
pub fn is_valid_cidr(cidr: u8) -> bool {
    cidr <= MAX_LENGTH
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The top `cidr` bits are set, the rest are zero; `cidr = 0` gives an
/// all-zero mask.
///
/// # Examples
/// ```
/// use calc_toolkit::models::subnet_mask;
/// assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn subnet_mask(cidr: u8) -> Result<u32, Box<dyn Error>> {
    if cidr > MAX_LENGTH {
        Err("CIDR prefix is too long".into())
    } else {
        let right_len = MAX_LENGTH - cidr;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// The wildcard mask is the 32-bit complement of the subnet mask.
pub fn wildcard_mask(cidr: u8) -> Result<u32, Box<dyn Error>> {
    Ok(!subnet_mask(cidr)?)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = subnet_mask(cidr)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, cidr: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = subnet_mask(cidr)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub cidr: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.cidr);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR notation {s}: {e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// Applies the same strict octet validation as [`is_valid_ipv4`].
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err("Invalid address/prefix".into());
        }
        if !is_valid_ipv4(parts[0]) {
            return Err(format!("Invalid IPv4 address {}", parts[0]).into());
        }
        let addr = Ipv4Addr::from_str(parts[0])?;
        let cidr: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid CIDR prefix {}", parts[1]))?;
        if !is_valid_cidr(cidr) {
            return Err("CIDR prefix is too long".into());
        }
        Ok(Ipv4 { addr, cidr })
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.cidr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ipv4() {
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("192.168.1.10"));
        assert!(is_valid_ipv4("255.255.255.255"));

        assert!(!is_valid_ipv4("256.1.1.1"));
        assert!(!is_valid_ipv4("1.1.1"));
        assert!(!is_valid_ipv4("1.1.1.1.1"));
        assert!(!is_valid_ipv4("01.2.3.4"));
        assert!(!is_valid_ipv4("1.2.3.04"));
        assert!(!is_valid_ipv4(" 1.2.3.4"));
        assert!(!is_valid_ipv4("1.2.3.+4"));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn test_is_valid_cidr() {
        assert!(is_valid_cidr(0));
        assert!(is_valid_cidr(24));
        assert!(is_valid_cidr(32));
        assert!(!is_valid_cidr(33));
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(subnet_mask(0).unwrap(), 0x00000000);
        assert_eq!(subnet_mask(8).unwrap(), 0xFF000000);
        assert_eq!(subnet_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(subnet_mask(32).unwrap(), 0xFFFFFFFF);

        assert!(subnet_mask(33).is_err());
    }

    #[test]
    fn test_wildcard_mask_is_complement() {
        for cidr in 0..=32 {
            let mask = subnet_mask(cidr).unwrap();
            let wildcard = wildcard_mask(cidr).unwrap();
            assert_eq!(mask & wildcard, 0);
            assert_eq!(mask | wildcard, u32::MAX);
        }
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(network_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(
            network_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 42)
        );

        assert!(network_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );

        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 24).is_ok());
    }

    #[test]
    fn test_ipv4_new() {
        let ip = Ipv4::new("10.1.1.0/28").unwrap();
        assert_eq!(ip.addr, Ipv4Addr::new(10, 1, 1, 0));
        assert_eq!(ip.cidr, 28);
        assert_eq!(ip.to_string(), "10.1.1.0/28");

        assert!(Ipv4::new("10.1.1.0").is_err());
        assert!(Ipv4::new("10.1.1.0/33").is_err());
        assert!(Ipv4::new("256.1.1.0/24").is_err());
        assert!(Ipv4::new("10.01.1.0/24").is_err());
    }

    #[test]
    fn test_ipv4_serde_round_trip() {
        let ip = Ipv4::new("192.168.1.10/24").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"192.168.1.10/24\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);
    }
}
