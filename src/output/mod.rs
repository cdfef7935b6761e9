//! Output formatting for IPv4 summaries.
//!
//! This module handles rendering values for display:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::page_to_csv;
pub use terminal::{address_report, format_field, network_report};
