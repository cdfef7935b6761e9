//! Well-known reserved and special-use IPv4 blocks.
//!
//! Immutable ranges initialized once at first use and consulted, never
//! mutated, by address classification. Each constant names the RFC that
//! defines the block.

use lazy_static::lazy_static;

use crate::codec::Octets;
use crate::models::{AddressClass, Ipv4Address, Ipv4Mask, Ipv4Range};

/// A special IP indicating any address assigned to a local interface.
pub const ALL_ZERO: Ipv4Address = Ipv4Address::new(0, 0, 0, 0);

/// The `localhost` address of the current device.
pub const LOCALHOST: Ipv4Address = Ipv4Address::new(127, 0, 0, 1);

/// Unforwarded broadcast on the local hardware segment.
pub const LIMITED_BROADCAST: Ipv4Address = Ipv4Address::new(255, 255, 255, 255);

fn block(first: Octets, last: Octets) -> Ipv4Range {
    Ipv4Range::new(Ipv4Address::from_octets(first), Ipv4Address::from_octets(last))
}

lazy_static! {
    /// This host on this network. RFC 1122 §3.2.1.3.
    pub static ref RFC1122_THIS_HOST_THIS_NETWORK: Ipv4Range =
        block([0, 0, 0, 0], [0, 255, 255, 255]);

    /// Private use within the class A space (10/8). RFC 1918 §3.
    pub static ref RFC1918_PRIVATE_USE_CLASS_A: Ipv4Range =
        block([10, 0, 0, 0], [10, 255, 255, 255]);

    /// Carrier-grade NAT shared address space (100.64/10). RFC 6598 §7.
    pub static ref RFC6598_SHARED_ADDRESS_SPACE: Ipv4Range =
        block([100, 64, 0, 0], [100, 127, 255, 255]);

    /// The loopback network (127/8). RFC 1122 §3.2.1.3.
    pub static ref RFC1122_LOOPBACK: Ipv4Range =
        block([127, 0, 0, 0], [127, 255, 255, 255]);

    /// Link-local (APIPA) addressing (169.254/16). RFC 3927.
    pub static ref RFC3927_LINK_LOCAL: Ipv4Range =
        block([169, 254, 0, 0], [169, 254, 255, 255]);

    /// Private use within the class B space (172.16/12). RFC 1918 §3.
    pub static ref RFC1918_PRIVATE_USE_CLASS_B: Ipv4Range =
        block([172, 16, 0, 0], [172, 31, 255, 255]);

    /// IETF protocol assignments (192.0.0/24). RFC 6890 §2.1.
    pub static ref RFC5736_IETF_PROTOCOL_ASSIGNMENTS: Ipv4Range =
        block([192, 0, 0, 0], [192, 0, 0, 255]);

    /// DS-Lite (192.0.0.0/29). RFC 6333.
    pub static ref RFC6333_DS_LITE: Ipv4Range =
        block([192, 0, 0, 0], [192, 0, 0, 7]);

    /// TEST-NET-1 documentation block (192.0.2/24). RFC 5737.
    pub static ref RFC5737_TEST_NET_1: Ipv4Range =
        block([192, 0, 2, 0], [192, 0, 2, 255]);

    /// 6to4 relay anycast (192.88.99/24). RFC 3068.
    pub static ref RFC3068_6_TO_4_RELAY_ANYCAST: Ipv4Range =
        block([192, 88, 99, 0], [192, 88, 99, 255]);

    /// Private use within the class C space (192.168/16). RFC 1918 §3.
    pub static ref RFC1918_PRIVATE_USE_CLASS_C: Ipv4Range =
        block([192, 168, 0, 0], [192, 168, 255, 255]);

    /// Benchmarking (198.18/15). RFC 2544.
    pub static ref RFC2544_BENCHMARKING: Ipv4Range =
        block([198, 18, 0, 0], [198, 19, 255, 255]);

    /// TEST-NET-2 documentation block (198.51.100/24). RFC 5737.
    pub static ref RFC5737_TEST_NET_2: Ipv4Range =
        block([198, 51, 100, 0], [198, 51, 100, 255]);

    /// TEST-NET-3 documentation block (203.0.113/24). RFC 5737.
    pub static ref RFC5737_TEST_NET_3: Ipv4Range =
        block([203, 0, 113, 0], [203, 0, 113, 255]);

    /// IP multicast (224/4). RFC 5771.
    pub static ref RFC5771_IP_MULTICAST: Ipv4Range =
        block([224, 0, 0, 0], [239, 255, 255, 255]);

    /// MCAST-TEST-NET (233.252.0/24). RFC 5771.
    pub static ref RFC5771_MCAST_TEST_NET: Ipv4Range =
        block([233, 252, 0, 0], [233, 252, 0, 255]);

    /// Reserved for future use, formerly class E (240/4). RFC 1112 §4.
    pub static ref RFC1112_RESERVED: Ipv4Range =
        block([240, 0, 0, 0], [255, 255, 255, 255]);

    /// The three RFC 1918 private-use blocks.
    pub static ref RFC1918_PRIVATE_BLOCKS: [Ipv4Range; 3] = [
        *RFC1918_PRIVATE_USE_CLASS_A,
        *RFC1918_PRIVATE_USE_CLASS_B,
        *RFC1918_PRIVATE_USE_CLASS_C,
    ];

    /// RFC 791 class A network range (1.0.0.0 through 127.255.255.255).
    pub static ref RFC791_CLASS_A_NETWORK: Ipv4Range =
        block([1, 0, 0, 0], [127, 255, 255, 255]);

    /// RFC 791 class B network range.
    pub static ref RFC791_CLASS_B_NETWORK: Ipv4Range =
        block([128, 0, 0, 0], [191, 255, 255, 255]);

    /// RFC 791 class C network range.
    pub static ref RFC791_CLASS_C_NETWORK: Ipv4Range =
        block([192, 0, 0, 0], [223, 255, 255, 255]);

    /// RFC 988 class D (multicast) network range.
    pub static ref RFC988_CLASS_D_NETWORK: Ipv4Range =
        block([224, 0, 0, 0], [239, 255, 255, 255]);

    /// RFC 988 class E (reserved) network range.
    pub static ref RFC988_CLASS_E_NETWORK: Ipv4Range =
        block([240, 0, 0, 0], [255, 255, 255, 255]);

    /// Class ranges in classification order; first match wins.
    pub static ref CLASS_RANGES: [(AddressClass, Ipv4Range); 5] = [
        (AddressClass::A, *RFC791_CLASS_A_NETWORK),
        (AddressClass::B, *RFC791_CLASS_B_NETWORK),
        (AddressClass::C, *RFC791_CLASS_C_NETWORK),
        (AddressClass::D, *RFC988_CLASS_D_NETWORK),
        (AddressClass::E, *RFC988_CLASS_E_NETWORK),
    ];

    /// Conventional default masks for the classful ranges that have one.
    pub static ref CLASS_DEFAULT_MASKS: [(AddressClass, Ipv4Mask); 3] = [
        (
            AddressClass::A,
            Ipv4Mask::from_prefix(8).expect("/8 is a valid prefix"),
        ),
        (
            AddressClass::B,
            Ipv4Mask::from_prefix(16).expect("/16 is a valid prefix"),
        ),
        (
            AddressClass::C,
            Ipv4Mask::from_prefix(24).expect("/24 is a valid prefix"),
        ),
    ];
}

/// The default mask for `class`, if it has a conventional one.
pub fn class_default_mask(class: AddressClass) -> Option<Ipv4Mask> {
    CLASS_DEFAULT_MASKS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, mask)| *mask)
}
