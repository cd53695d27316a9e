//! # Address Arithmetic
//!
//! Width and increment helpers shared by both address families.
//!
//! Addresses are handled as fixed-width big-endian octets (4 for IPv4, 16 for
//! IPv6) so the same carry logic serves both.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const IPV4_WIDTH: u8 = 32;
pub const IPV6_WIDTH: u8 = 128;

/// Number of bits in the address family of `addr`.
pub fn width(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_WIDTH,
        IpAddr::V6(_) => IPV6_WIDTH,
    }
}

/// Returns the address following `addr`, wrapping at the top of its family.
pub fn next_address(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(increment_octets(v4.octets()))),
        IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(increment_octets(v6.octets()))),
    }
}

fn increment_octets<const N: usize>(mut octets: [u8; N]) -> [u8; N] {
    for octet in octets.iter_mut().rev() {
        let (value, carry) = octet.overflowing_add(1);
        *octet = value;
        if !carry {
            break;
        }
    }
    octets
}

/// Re-expresses `addr` in the family of `reference`.
///
/// An IPv4 address maps to its `::ffff:a.b.c.d` form, and an IPv4-mapped IPv6
/// address maps back to IPv4. Any other cross-family pair has no equivalent
/// and yields `None`.
pub fn to_family_of(addr: IpAddr, reference: &IpAddr) -> Option<IpAddr> {
    match (addr, reference) {
        (IpAddr::V4(_), IpAddr::V4(_)) | (IpAddr::V6(_), IpAddr::V6(_)) => Some(addr),
        (IpAddr::V4(v4), IpAddr::V6(_)) => Some(IpAddr::V6(v4.to_ipv6_mapped())),
        (IpAddr::V6(v6), IpAddr::V4(_)) => v6.to_ipv4_mapped().map(IpAddr::V4),
    }
}

/// Keeps only the bits of `addr` selected by `mask` (`addr & mask`).
///
/// Returns `None` when the two are of different families.
pub fn network_bits(addr: IpAddr, mask: IpAddr) -> Option<IpAddr> {
    match (addr, mask) {
        (IpAddr::V4(a), IpAddr::V4(m)) => {
            Some(IpAddr::V4(Ipv4Addr::from(u32::from(a) & u32::from(m))))
        }
        (IpAddr::V6(a), IpAddr::V6(m)) => {
            Some(IpAddr::V6(Ipv6Addr::from(u128::from(a) & u128::from(m))))
        }
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
