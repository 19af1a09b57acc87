//! Domain models for the calculator toolkit.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetInfo`] - derived subnet report with class/type enums
//! - [`CalculatorState`] - the basic-calculator display state

mod calculator;
mod ipv4;
mod subnet;

// Re-export public types
pub use calculator::{CalculatorState, Operation};
pub use ipv4::{
    broadcast_addr, is_valid_cidr, is_valid_ipv4, network_addr, subnet_mask, wildcard_mask, Ipv4,
    MAX_LENGTH,
};
pub use subnet::{IpClass, IpType, SubnetInfo};
