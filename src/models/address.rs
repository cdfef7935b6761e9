//! IPv4 addresses and their classification.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::blocks;
use crate::codec::{self, BitArray, Octets};
use crate::error::Ipv4Error;

use super::{Ipv4Mask, Ipv4Network};

/// The legacy RFC 791 address-space partition by leading bits.
///
/// [`Unclassified`](AddressClass::Unclassified) is the "no match" result
/// (e.g. 0.x.x.x, which precedes the class A range); it displays as an
/// empty string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
    Unclassified,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Unclassified => "",
        };
        write!(f, "{name}")
    }
}

/// An immutable IPv4 address.
///
/// Stored as its four octets; the bit and `u32` representations are derived
/// and always consistent. Equality, ordering, and hashing follow the 32-bit
/// numeric value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Address {
    octets: Octets,
}

impl Ipv4Address {
    /// Create an address from four octets.
    pub const fn new(oct1: u8, oct2: u8, oct3: u8, oct4: u8) -> Ipv4Address {
        Ipv4Address {
            octets: [oct1, oct2, oct3, oct4],
        }
    }

    /// Create an address from an octet array.
    pub const fn from_octets(octets: Octets) -> Ipv4Address {
        Ipv4Address { octets }
    }

    /// Create an address from a 32-element bit array.
    ///
    /// Fails if any element is not 0 or 1.
    pub fn from_bits(bits: BitArray) -> Result<Ipv4Address, Ipv4Error> {
        Ok(Ipv4Address {
            octets: codec::bits_to_octets(bits)?,
        })
    }

    /// Create an address from its big-endian unsigned 32-bit value.
    pub const fn from_value(value: u32) -> Ipv4Address {
        Ipv4Address {
            octets: value.to_be_bytes(),
        }
    }

    /// Parse a dotted-decimal string such as `"10.1.1.1"`.
    pub fn parse(s: &str) -> Result<Ipv4Address, Ipv4Error> {
        Ok(Ipv4Address {
            octets: codec::parse_dotted_decimal(s)?,
        })
    }

    /// The address's octets, most significant first.
    pub fn octets(&self) -> Octets {
        self.octets
    }

    /// The address's 32 bits in network order.
    pub fn bits(&self) -> BitArray {
        codec::octets_to_bits(self.octets)
    }

    /// The address as a big-endian unsigned 32-bit value.
    pub const fn value(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The RFC 791 class, checked in order A through E; first match wins.
    ///
    /// Loopback addresses fall inside the class A range and classify as A
    /// while also answering [`is_loopback`](Ipv4Address::is_loopback).
    pub fn class(&self) -> AddressClass {
        for (class, range) in blocks::CLASS_RANGES.iter() {
            if range.contains(*self) {
                return *class;
            }
        }
        AddressClass::Unclassified
    }

    /// The conventional default mask for the address's class.
    ///
    /// `/8`, `/16`, `/24` for classes A, B, C; `None` for D, E, and
    /// unclassified addresses.
    pub fn default_mask(&self) -> Option<Ipv4Mask> {
        blocks::class_default_mask(self.class())
    }

    /// Whether the address is in the RFC 1122 loopback block (127/8).
    pub fn is_loopback(&self) -> bool {
        blocks::RFC1122_LOOPBACK.contains(*self)
    }

    /// Whether the address is in the RFC 3927 link-local (APIPA) block.
    pub fn is_link_local(&self) -> bool {
        blocks::RFC3927_LINK_LOCAL.contains(*self)
    }

    /// Whether the address is in any RFC 1918 private-use block.
    pub fn is_private(&self) -> bool {
        blocks::RFC1918_PRIVATE_BLOCKS
            .iter()
            .any(|range| range.contains(*self))
    }

    /// Truncate the address with `mask`, producing the containing network.
    pub fn mask_with(&self, mask: Ipv4Mask) -> Ipv4Network {
        Ipv4Network::new(*self, mask)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.octets.iter().join("."))
    }
}

impl FromStr for Ipv4Address {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Ipv4Address, Ipv4Error> {
        Ipv4Address::parse(s)
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Ipv4Address {
        Ipv4Address::from_value(value)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Ipv4Address {
        Ipv4Address::from_octets(addr.octets())
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(ip: Ipv4Address) -> Ipv4Addr {
        Ipv4Addr::from(ip.octets())
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::parse(&s).map_err(de::Error::custom)
    }
}
