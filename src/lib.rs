//! IPv4 addressing value objects.
//!
//! Representations of addresses, subnet masks, CIDR networks, and
//! contiguous address ranges, with classification against the well-known
//! reserved blocks ([`blocks`]) and basic network arithmetic: masking,
//! containment, overlap, and lazy enumeration.
//!
//! ```
//! use ipv4_kit::{Ipv4Address, Ipv4Mask, Ipv4Network};
//!
//! # fn main() -> Result<(), ipv4_kit::Ipv4Error> {
//! let ip = Ipv4Address::parse("10.1.1.22")?;
//! assert!(ip.is_private());
//!
//! let network = ip.mask_with(Ipv4Mask::from_prefix(24)?);
//! assert_eq!(network.to_string(), "10.1.1.0/24");
//! assert_eq!(network.broadcast(), Ipv4Address::new(10, 1, 1, 255));
//! assert!(network.contains(Ipv4Address::new(10, 1, 1, 200)));
//! # Ok(())
//! # }
//! ```
//!
//! Every type is an immutable `Copy` value: construction validates fully,
//! no method mutates, and values can be shared across threads freely.

pub mod blocks;
pub mod codec;
mod error;
pub mod models;
pub mod output;

pub use error::Ipv4Error;
pub use models::{
    AddressClass, AddressIter, Ipv4Address, Ipv4Mask, Ipv4Network, Ipv4Range, RangePage,
    DEFAULT_PAGE_SIZE, MAX_PREFIX,
};
