//! Terminal output for subnet reports.

use crate::models::SubnetInfo;
use colored::Colorize;

/// Right-align a label to the given width, with a trailing colon.
pub fn format_label(label: &str, width: usize) -> String {
    let labelled = format!("{label}:");
    if labelled.len() >= width {
        labelled
    } else {
        format!("{labelled:>width$}")
    }
}

/// Print a subnet report as an aligned, colored key/value table.
pub fn print_subnet_report(info: &SubnetInfo) {
    const WIDTH: usize = 19;

    println!(
        "{}",
        format!("Subnet report for {}/{}", info.ip_address, info.cidr).bold()
    );

    let rows: Vec<(&str, String)> = vec![
        ("Network address", info.network_address.to_string()),
        ("Broadcast address", info.broadcast_address.to_string()),
        ("Subnet mask", info.subnet_mask.to_string()),
        ("Wildcard mask", info.wildcard_mask.to_string()),
        ("First usable IP", info.first_usable_ip.to_string()),
        ("Last usable IP", info.last_usable_ip.to_string()),
        ("Total hosts", info.total_hosts.to_string()),
        ("Usable hosts", info.usable_hosts.to_string()),
        ("IP class", info.ip_class.to_string()),
        ("IP type", info.ip_type.to_string()),
        ("Binary", info.binary.clone()),
    ];

    for (label, value) in rows {
        println!("{} {}", format_label(label, WIDTH).blue(), value.green());
    }
}
