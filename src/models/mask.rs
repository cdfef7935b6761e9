//! IPv4 subnet masks.
//!
//! A mask shares the physical shape of an address but its bits must form a
//! contiguous prefix: a run of ones followed only by zeros. Every
//! construction path checks the invariant, so an existing mask is always
//! valid.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};

use crate::codec::{self, BitArray, Octets};
use crate::error::Ipv4Error;

/// Maximum prefix length of an IPv4 subnet mask (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// An IPv4 subnet mask with a contiguous run of leading 1 bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Mask {
    octets: Octets,
}

impl Ipv4Mask {
    /// Create a mask from four octets.
    ///
    /// Fails if the combined bits contain a 1 after a 0.
    pub fn new(oct1: u8, oct2: u8, oct3: u8, oct4: u8) -> Result<Ipv4Mask, Ipv4Error> {
        Ipv4Mask::from_octets([oct1, oct2, oct3, oct4])
    }

    /// Create a mask from an octet array.
    pub fn from_octets(octets: Octets) -> Result<Ipv4Mask, Ipv4Error> {
        check_prefix_bits(&codec::octets_to_bits(octets))?;
        Ok(Ipv4Mask { octets })
    }

    /// Create a mask from a 32-element bit array.
    ///
    /// Rejects elements other than 0/1, then enforces the prefix rule.
    pub fn from_bits(bits: BitArray) -> Result<Ipv4Mask, Ipv4Error> {
        let octets = codec::bits_to_octets(bits)?;
        check_prefix_bits(&bits)?;
        Ok(Ipv4Mask { octets })
    }

    /// Create a mask from a prefix length between 0 and 32.
    pub fn from_prefix(prefix: u8) -> Result<Ipv4Mask, Ipv4Error> {
        if prefix > MAX_PREFIX {
            return Err(Ipv4Error::PrefixOutOfRange(u32::from(prefix)));
        }

        // Shift in u64 so a /0 does not overflow the shift width.
        let right = u64::from(MAX_PREFIX - prefix);
        let value = ((u64::from(u32::MAX) >> right) << right) as u32;

        Ok(Ipv4Mask {
            octets: value.to_be_bytes(),
        })
    }

    /// Parse a dotted-decimal mask string such as `"255.255.255.0"`.
    pub fn parse(s: &str) -> Result<Ipv4Mask, Ipv4Error> {
        let octets = codec::parse_dotted_decimal(s).map_err(|e| match e {
            Ipv4Error::AddressParse(_) => Ipv4Error::MaskParse(s.to_string()),
            other => other,
        })?;
        Ipv4Mask::from_octets(octets)
    }

    /// The mask's octets, most significant first.
    pub fn octets(&self) -> Octets {
        self.octets
    }

    /// The mask's 32 bits in network order.
    pub fn bits(&self) -> BitArray {
        codec::octets_to_bits(self.octets)
    }

    /// The mask as a big-endian unsigned 32-bit value.
    pub fn value(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// The count of leading 1 bits (the index of the first 0, or 32).
    pub fn prefix_len(&self) -> u8 {
        self.value().leading_ones() as u8
    }
}

/// Enforce the contiguous-prefix rule: no 1 may follow a 0.
fn check_prefix_bits(bits: &BitArray) -> Result<(), Ipv4Error> {
    let mut seen_zero = false;
    for (i, &bit) in bits.iter().enumerate() {
        if bit == 0 {
            seen_zero = true;
        } else if seen_zero {
            return Err(Ipv4Error::MaskNotPrefix { position: i + 1 });
        }
    }
    Ok(())
}

impl fmt::Display for Ipv4Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.octets.iter().join("."))
    }
}

impl FromStr for Ipv4Mask {
    type Err = Ipv4Error;

    fn from_str(s: &str) -> Result<Ipv4Mask, Ipv4Error> {
        Ipv4Mask::parse(s)
    }
}

impl Serialize for Ipv4Mask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Mask {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Mask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Mask::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefix() {
        assert_eq!(Ipv4Mask::from_prefix(0).unwrap().octets(), [0, 0, 0, 0]);
        assert_eq!(Ipv4Mask::from_prefix(8).unwrap().octets(), [255, 0, 0, 0]);
        assert_eq!(
            Ipv4Mask::from_prefix(12).unwrap().octets(),
            [255, 240, 0, 0]
        );
        assert_eq!(
            Ipv4Mask::from_prefix(24).unwrap().octets(),
            [255, 255, 255, 0]
        );
        assert_eq!(
            Ipv4Mask::from_prefix(32).unwrap().octets(),
            [255, 255, 255, 255]
        );
        assert_eq!(
            Ipv4Mask::from_prefix(33),
            Err(Ipv4Error::PrefixOutOfRange(33))
        );
    }

    #[test]
    fn test_prefix_len() {
        for prefix in 0..=32u8 {
            assert_eq!(Ipv4Mask::from_prefix(prefix).unwrap().prefix_len(), prefix);
        }
    }

    #[test]
    fn test_from_octets_valid() {
        let mask = Ipv4Mask::new(255, 255, 255, 0).unwrap();
        assert_eq!(mask.prefix_len(), 24);
        assert_eq!(mask.value(), 0xFFFF_FF00);

        assert!(Ipv4Mask::new(0, 0, 0, 0).is_ok());
        assert!(Ipv4Mask::new(255, 255, 255, 255).is_ok());
        assert!(Ipv4Mask::new(255, 128, 0, 0).is_ok());
    }

    #[test]
    fn test_from_octets_rejects_non_prefix() {
        // 255.255.0.1 has a 1 in the final bit after the zeros start.
        assert_eq!(
            Ipv4Mask::new(255, 255, 0, 1),
            Err(Ipv4Error::MaskNotPrefix { position: 32 })
        );
        // 255.0.255.0: the second 255 starts at bit 17.
        assert_eq!(
            Ipv4Mask::new(255, 0, 255, 0),
            Err(Ipv4Error::MaskNotPrefix { position: 17 })
        );
        assert!(Ipv4Mask::new(0, 255, 0, 0).is_err());
    }

    #[test]
    fn test_from_bits() {
        let mut bits = [0u8; 32];
        for bit in bits.iter_mut().take(24) {
            *bit = 1;
        }
        let mask = Ipv4Mask::from_bits(bits).unwrap();
        assert_eq!(mask.octets(), [255, 255, 255, 0]);
        assert_eq!(mask.prefix_len(), 24);

        // A 1 after a 0 is rejected with the offending position.
        bits[31] = 1;
        assert_eq!(
            Ipv4Mask::from_bits(bits),
            Err(Ipv4Error::MaskNotPrefix { position: 32 })
        );

        // Non-binary contents are rejected before the prefix check.
        let mut bad = [0u8; 32];
        bad[0] = 3;
        assert_eq!(
            Ipv4Mask::from_bits(bad),
            Err(Ipv4Error::BitNotBinary {
                position: 1,
                value: 3
            })
        );
    }

    #[test]
    fn test_parse() {
        let mask = Ipv4Mask::parse("255.255.255.0").unwrap();
        assert_eq!(mask.prefix_len(), 24);

        assert_eq!(
            Ipv4Mask::parse("255.255.0"),
            Err(Ipv4Error::MaskParse("255.255.0".to_string()))
        );
        assert_eq!(
            Ipv4Mask::parse("255.255.0.1"),
            Err(Ipv4Error::MaskNotPrefix { position: 32 })
        );
        assert_eq!(
            Ipv4Mask::parse("255.256.0.0"),
            Err(Ipv4Error::OctetOutOfRange {
                position: 2,
                value: 256
            })
        );
    }

    #[test]
    fn test_display_and_value() {
        let mask = Ipv4Mask::from_prefix(16).unwrap();
        assert_eq!(mask.to_string(), "255.255.0.0");
        assert_eq!(mask.value(), 0xFFFF_0000);
        assert_eq!("255.255.0.0".parse::<Ipv4Mask>().unwrap(), mask);
    }

    #[test]
    fn test_serde_round_trip() {
        let mask = Ipv4Mask::from_prefix(24).unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "\"255.255.255.0\"");
        let back: Ipv4Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);

        assert!(serde_json::from_str::<Ipv4Mask>("\"255.0.255.0\"").is_err());
    }
}
