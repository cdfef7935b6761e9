//! Terminal output utilities.
//!
//! Provides formatting helpers and colored summary reports.

use colored::Colorize;
use itertools::Itertools;

use crate::models::{AddressClass, Ipv4Address, Ipv4Network};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a one-address summary: class, default mask, predicate flags.
pub fn address_report(ip: &Ipv4Address) -> String {
    log::debug!("#Start address_report({ip})");

    let class = match ip.class() {
        AddressClass::Unclassified => "unclassified".dimmed().to_string(),
        class => class.to_string().bold().to_string(),
    };
    let default_mask = match ip.default_mask() {
        Some(mask) => mask.to_string(),
        None => "none".to_string(),
    };

    format!(
        "address:      {ip}\n\
         class:        {class}\n\
         default mask: {default_mask}\n\
         flags:        {flags}",
        flags = address_flags(ip)
    )
}

fn address_flags(ip: &Ipv4Address) -> String {
    let mut flags = Vec::new();
    if ip.is_private() {
        flags.push("private".yellow().to_string());
    }
    if ip.is_loopback() {
        flags.push("loopback".cyan().to_string());
    }
    if ip.is_link_local() {
        flags.push("link-local".magenta().to_string());
    }

    if flags.is_empty() {
        "none".to_string()
    } else {
        flags.iter().join(",")
    }
}

/// Render a network summary with its range size and a first-page sample.
pub fn network_report(net: &Ipv4Network) -> String {
    log::debug!("#Start network_report({net})");

    let range = net.to_range();
    // size() is last - first; the inclusive address count is one more.
    let address_count = u64::from(range.size()) + 1;
    let page = range.first_page();
    let sample = page.addresses.iter().map(|ip| ip.to_string()).join(", ");

    format!(
        "network:      {net}\n\
         mask:         {mask}\n\
         broadcast:    {broadcast}\n\
         range:        {range} ({address_count} addresses)\n\
         first {count}:     {sample}",
        mask = net.mask(),
        broadcast = net.broadcast().to_string().green(),
        count = page.count,
    )
}
