//! Conversions between the representations of a 32-bit IPv4 quantity.
//!
//! Everything here is a pure function over fixed-size arrays: a 4-element
//! octet array, a 32-element bit array (big-endian, most significant bit of
//! octet 1 first), an unsigned 32-bit value, and a dotted-decimal string.
//! Array lengths are enforced by the types; runtime checks remain only for
//! bit contents (0/1) and for values arriving as strings.

use crate::error::Ipv4Error;

/// The four octets of an IPv4 address, most significant first.
pub type Octets = [u8; 4];

/// The 32 bits of an IPv4 address in network order, each element 0 or 1.
pub type BitArray = [u8; 32];

/// Expand octets into their big-endian bit representation.
pub fn octets_to_bits(octets: Octets) -> BitArray {
    let mut bits = [0u8; 32];
    for (i, octet) in octets.iter().enumerate() {
        for j in 0..8 {
            bits[i * 8 + j] = (octet >> (7 - j)) & 1;
        }
    }
    bits
}

/// Collapse a bit array back into octets.
///
/// Fails if any element is not 0 or 1, naming the 1-based bit position.
pub fn bits_to_octets(bits: BitArray) -> Result<Octets, Ipv4Error> {
    validate_bits(&bits)?;

    let mut octets = [0u8; 4];
    for (i, chunk) in bits.chunks_exact(8).enumerate() {
        octets[i] = chunk.iter().fold(0u8, |byte, &bit| (byte << 1) | bit);
    }
    Ok(octets)
}

/// Interpret a bit array as a big-endian unsigned 32-bit value.
///
/// Fails if any element is not 0 or 1.
pub fn bits_to_value(bits: BitArray) -> Result<u32, Ipv4Error> {
    validate_bits(&bits)?;

    Ok(bits
        .iter()
        .fold(0u32, |value, &bit| (value << 1) | u32::from(bit)))
}

/// Expand a value into its 32 big-endian bits, zero-padded on the left.
pub fn value_to_bits(value: u32) -> BitArray {
    octets_to_bits(value.to_be_bytes())
}

/// Parse a dotted-decimal string into octets.
///
/// Requires exactly four dot-separated decimal parts, each inclusively
/// between 0 and 255, with no surrounding content.
pub fn parse_dotted_decimal(s: &str) -> Result<Octets, Ipv4Error> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(Ipv4Error::AddressParse(s.to_string()));
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        let value: u64 = part.parse().map_err(|_| Ipv4Error::OctetNotNumeric {
            position: i + 1,
            text: part.to_string(),
        })?;
        if value > 255 {
            return Err(Ipv4Error::OctetOutOfRange {
                position: i + 1,
                value,
            });
        }
        octets[i] = value as u8;
    }
    Ok(octets)
}

fn validate_bits(bits: &BitArray) -> Result<(), Ipv4Error> {
    for (i, &bit) in bits.iter().enumerate() {
        if bit > 1 {
            return Err(Ipv4Error::BitNotBinary {
                position: i + 1,
                value: bit,
            });
        }
    }
    Ok(())
}
