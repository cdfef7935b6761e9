//! CSV output formatting for range enumeration.

use itertools::Itertools;

use crate::models::{AddressClass, RangePage};

use super::terminal::format_field;

/// Render one page of a range enumeration as CSV rows.
///
/// Columns: address, class, private, loopback, link_local. An empty page
/// renders the header only.
pub fn page_to_csv(page: &RangePage) -> String {
    log::debug!(
        "#Start page_to_csv() page {index} count {count}",
        index = page.index,
        count = page.count
    );

    let header =
        r#"        "address",       "class","private","loopback","link_local""#.to_string();

    let rows = page.addresses.iter().map(|ip| {
        let class = match ip.class() {
            AddressClass::Unclassified => "unclassified".to_string(),
            class => class.to_string(),
        };
        format!(
            "{address},{class},{private},{loopback},{link_local}",
            address = format_field(ip, 17),
            class = format_field(class, 14),
            private = format_field(ip.is_private(), 9),
            loopback = format_field(ip.is_loopback(), 10),
            link_local = format_field(ip.is_link_local(), 12),
        )
    });

    std::iter::once(header).chain(rows).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4Network;

    #[test]
    fn test_page_to_csv_rows() {
        let range = Ipv4Network::parse("192.168.0.0/30").unwrap().to_range();
        let csv = page_to_csv(&range.page(25, 0));
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 5, "header plus four addresses");
        assert!(lines[0].contains("\"address\""));
        assert!(lines[1].contains("\"192.168.0.0\""));
        assert!(lines[1].contains("\"C\""));
        assert!(lines[1].contains("\"true\""));
        assert!(lines[4].contains("\"192.168.0.3\""));
    }

    #[test]
    fn test_page_to_csv_empty_page() {
        let range = Ipv4Network::parse("192.168.0.0/30").unwrap().to_range();
        let csv = page_to_csv(&range.page(25, 3));
        assert_eq!(csv.lines().count(), 1, "header only");
    }
}
