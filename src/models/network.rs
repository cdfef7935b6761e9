//! IPv4 networks: an address truncated by a mask.

use std::fmt;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Ipv4Error;

use super::{Ipv4Address, Ipv4Mask, Ipv4Range};

/// An IPv4 network in CIDR terms: a network address and its mask.
///
/// The stored network address always has every host bit zeroed; the
/// broadcast address is derived on demand and never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Network {
    network: Ipv4Address,
    mask: Ipv4Mask,
}

impl Ipv4Network {
    /// Derive the network containing `ip` under `mask`.
    ///
    /// The network address is `ip` AND `mask`: every bit beyond the mask's
    /// prefix is zeroed.
    pub fn new(ip: Ipv4Address, mask: Ipv4Mask) -> Ipv4Network {
        Ipv4Network {
            network: Ipv4Address::from_value(ip.value() & mask.value()),
            mask,
        }
    }

    /// Parse a CIDR string such as `"10.1.1.0/24"`.
    ///
    /// The address part follows dotted-decimal parsing rules; the prefix
    /// must be a decimal integer between 0 and 32.
    pub fn parse(cidr: &str) -> Result<Ipv4Network, Ipv4Error> {
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(Ipv4Error::CidrParse(cidr.to_string()));
        }

        let ip = Ipv4Address::parse(parts[0])?;
        let prefix: u32 = parts[1]
            .parse()
            .map_err(|_| Ipv4Error::CidrParse(cidr.to_string()))?;
        if prefix > 32 {
            return Err(Ipv4Error::PrefixOutOfRange(prefix));
        }
        let mask = Ipv4Mask::from_prefix(prefix as u8)?;

        Ok(Ipv4Network::new(ip, mask))
    }

    /// The network address (host bits zeroed).
    pub fn network(&self) -> Ipv4Address {
        self.network
    }

    /// The network's mask.
    pub fn mask(&self) -> Ipv4Mask {
        self.mask
    }

    /// The broadcast address: the last address of the network's range.
    pub fn broadcast(&self) -> Ipv4Address {
        self.to_range().last()
    }

    /// The inclusive range from the network address to the broadcast
    /// address (every host bit set).
    pub fn to_range(&self) -> Ipv4Range {
        let broadcast = Ipv4Address::from_value(self.network.value() | !self.mask.value());
        Ipv4Range::new(self.network, broadcast)
    }

    /// Whether `ip` shares this network's prefix.
    ///
    /// True iff masking `ip` with this network's mask yields this network's
    /// address.
    pub fn contains(&self, ip: Ipv4Address) -> bool {
        ip.mask_with(self.mask).network() == self.network
    }

    /// Whether two networks share any addresses.
    ///
    /// Symmetric: true iff either network's boundary address (network or
    /// broadcast) falls inside the other's range.
    pub fn overlaps(&self, other: &Ipv4Network) -> bool {
        let ours = self.to_range();
        let theirs = other.to_range();

        theirs.contains(self.network)
            || theirs.contains(self.broadcast())
            || ours.contains(other.network)
            || ours.contains(other.broadcast())
    }
}

impl fmt::Display for Ipv4Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.mask.prefix_len())
    }
}

impl FromStr for Ipv4Network {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Ipv4Network, Ipv4Error> {
        Ipv4Network::parse(s)
    }
}

impl Serialize for Ipv4Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Network {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Network::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(cidr: &str) -> Ipv4Network {
        Ipv4Network::parse(cidr).unwrap()
    }

    #[test]
    fn test_network_derivation() {
        let network = Ipv4Network::new(
            Ipv4Address::new(10, 1, 1, 22),
            Ipv4Mask::from_prefix(24).unwrap(),
        );
        assert_eq!(network.network(), Ipv4Address::new(10, 1, 1, 0));
        assert_eq!(network.broadcast(), Ipv4Address::new(10, 1, 1, 255));
        assert_eq!(network.mask().prefix_len(), 24);
    }

    #[test]
    fn test_derivation_across_octet_boundaries() {
        let network = Ipv4Network::new(
            Ipv4Address::new(192, 168, 130, 77),
            Ipv4Mask::from_prefix(18).unwrap(),
        );
        assert_eq!(network.network(), Ipv4Address::new(192, 168, 128, 0));
        assert_eq!(network.broadcast(), Ipv4Address::new(192, 168, 191, 255));
    }

    #[test]
    fn test_parse_cidr() {
        let network = net("10.1.1.22/24");
        assert_eq!(network.network(), Ipv4Address::new(10, 1, 1, 0));
        assert_eq!(network.to_string(), "10.1.1.0/24");

        // /0 and /32 are both legal.
        assert_eq!(net("10.1.1.1/0").network(), Ipv4Address::new(0, 0, 0, 0));
        assert_eq!(net("10.1.1.1/32").network(), Ipv4Address::new(10, 1, 1, 1));
    }

    #[test]
    fn test_parse_cidr_errors() {
        assert_eq!(
            Ipv4Network::parse("10.1.1.0"),
            Err(Ipv4Error::CidrParse("10.1.1.0".to_string()))
        );
        assert_eq!(
            Ipv4Network::parse("10.1.1.0/24/8"),
            Err(Ipv4Error::CidrParse("10.1.1.0/24/8".to_string()))
        );
        assert_eq!(
            Ipv4Network::parse("10.1.1.0/x"),
            Err(Ipv4Error::CidrParse("10.1.1.0/x".to_string()))
        );
        assert_eq!(
            Ipv4Network::parse("10.1.1.0/33"),
            Err(Ipv4Error::PrefixOutOfRange(33))
        );
        assert_eq!(
            Ipv4Network::parse("10.1.1/24"),
            Err(Ipv4Error::AddressParse("10.1.1".to_string()))
        );
        assert_eq!(
            Ipv4Network::parse("10.1.1.256/24"),
            Err(Ipv4Error::OctetOutOfRange {
                position: 4,
                value: 256
            })
        );
    }

    #[test]
    fn test_to_range() {
        let range = net("10.1.1.0/24").to_range();
        assert_eq!(range.first(), Ipv4Address::new(10, 1, 1, 0));
        assert_eq!(range.last(), Ipv4Address::new(10, 1, 1, 255));
        assert_eq!(range.size(), 255);
    }

    #[test]
    fn test_contains() {
        let network = net("10.1.1.0/24");
        assert!(network.contains(Ipv4Address::new(10, 1, 1, 0)));
        assert!(network.contains(Ipv4Address::new(10, 1, 1, 200)));
        assert!(network.contains(Ipv4Address::new(10, 1, 1, 255)));
        assert!(!network.contains(Ipv4Address::new(10, 1, 2, 1)));
        assert!(!network.contains(Ipv4Address::new(11, 1, 1, 1)));
    }

    #[test]
    fn test_overlaps() {
        let a = net("10.1.1.0/24");
        let b = net("10.1.0.0/16");
        let c = net("10.2.0.0/16");

        // Nesting overlaps in both directions.
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
        assert!(!b.overlaps(&c));

        // A network overlaps itself.
        assert!(a.overlaps(&a));

        // Adjacent networks do not overlap.
        let left = net("10.1.0.0/25");
        let right = net("10.1.0.128/25");
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
    }

    #[test]
    fn test_display() {
        assert_eq!(net("10.1.1.22/24").to_string(), "10.1.1.0/24");
        assert_eq!(net("0.0.0.0/0").to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_serde_round_trip() {
        let network = net("192.168.0.0/16");
        let json = serde_json::to_string(&network).unwrap();
        assert_eq!(json, "\"192.168.0.0/16\"");
        let back: Ipv4Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, network);

        assert!(serde_json::from_str::<Ipv4Network>("\"192.168.0.0\"").is_err());
    }
}
