//! JSON output for subnet reports.

use crate::models::SubnetInfo;
use std::error::Error;

/// Serialize a subnet report as pretty-printed JSON.
pub fn to_json(info: &SubnetInfo) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(info)?)
}
