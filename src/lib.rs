// cargo watch -x 'fmt' -x 'run'  // 'run -- 192.168.1.10/24'

pub mod models;
pub mod output;
pub mod processing;

use models::Ipv4;
use std::error::Error;

pub use models::{CalculatorState, IpClass, IpType, Operation, SubnetInfo};
pub use processing::{calculate_ip_info, format_display_value};

/// Compute a subnet report from CIDR notation (e.g., "192.168.1.10/24").
pub fn subnet_report(cidr_notation: &str) -> Result<SubnetInfo, Box<dyn Error>> {
    let target = Ipv4::new(cidr_notation)?;
    calculate_ip_info(&target.addr.to_string(), target.cidr)
}
