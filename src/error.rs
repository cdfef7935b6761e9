//! Error types for IPv4 value construction and parsing.
//!
//! Every failure is raised at construction or parse time, so a value that
//! exists is internally consistent for its whole lifetime. Variants fall
//! into three families:
//! - argument errors: a well-formed input carried an out-of-domain value
//!   ([`OctetOutOfRange`], [`OctetNotNumeric`], [`BitNotBinary`],
//!   [`PrefixOutOfRange`]),
//! - format errors: a value is structurally invalid for its role
//!   ([`MaskNotPrefix`]),
//! - parse errors: a string does not decompose into the expected parts
//!   ([`AddressParse`], [`MaskParse`], [`CidrParse`]).
//!
//! Bit and octet positions in messages are 1-based.
//!
//! [`OctetOutOfRange`]: Ipv4Error::OctetOutOfRange
//! [`OctetNotNumeric`]: Ipv4Error::OctetNotNumeric
//! [`BitNotBinary`]: Ipv4Error::BitNotBinary
//! [`PrefixOutOfRange`]: Ipv4Error::PrefixOutOfRange
//! [`MaskNotPrefix`]: Ipv4Error::MaskNotPrefix
//! [`AddressParse`]: Ipv4Error::AddressParse
//! [`MaskParse`]: Ipv4Error::MaskParse
//! [`CidrParse`]: Ipv4Error::CidrParse

use thiserror::Error;

/// Errors that can occur while constructing or parsing IPv4 values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    #[error("bad value for octet {position}, {value}. Value must be inclusively between 0 and 255")]
    OctetOutOfRange { position: usize, value: u64 },

    #[error("octet {position} is not a decimal number: {text:?}")]
    OctetNotNumeric { position: usize, text: String },

    #[error("bit arrays must only contain 1s or 0s. Received {value} at bit {position}")]
    BitNotBinary { position: usize, value: u8 },

    #[error("invalid network prefix: {0}. Value must be inclusively between 0 and 32")]
    PrefixOutOfRange(u32),

    #[error("invalid mask bits. Found a 1 following a 0 at bit {position}")]
    MaskNotPrefix { position: usize },

    #[error("invalid IPv4 address string: {0}")]
    AddressParse(String),

    #[error("failed to parse subnet mask string: {0}")]
    MaskParse(String),

    #[error("invalid CIDR string: {0}")]
    CidrParse(String),
}
