//! # Network Range Model
//!
//! Decodes CIDR text into a [`NetworkRange`] and a bare address into a
//! [`CandidateAddress`].
//!
//! Decoding is strict: the CIDR form needs an explicit `/prefix`, the address
//! part must be a full dotted quad or a standard IPv6 address, and the prefix
//! must be plain decimal digits. Abbreviations such as `10/8` are rejected.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::DecodeError;
use crate::network::address;

/// An inclusive range of addresses described by a base address and a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NetworkRange {
    network: IpNetwork,
    first_addr: IpAddr,
    last_addr: IpAddr,
}

impl NetworkRange {
    /// Builds the range covering `base_addr/prefix`.
    ///
    /// `base_addr` is kept as given; host bits are only cleared for
    /// [`NetworkRange::first_address`].
    pub fn new(base_addr: IpAddr, prefix: u8) -> Result<Self, DecodeError> {
        let width = address::width(&base_addr);
        let network = IpNetwork::new(base_addr, prefix)
            .map_err(|_| DecodeError::PrefixTooLong { prefix, width })?;
        let (first_addr, last_addr) = bounds(&network);

        Ok(Self {
            network,
            first_addr,
            last_addr,
        })
    }

    /// The address as written in the CIDR text.
    pub fn base_address(&self) -> IpAddr {
        self.network.ip()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// Full bit width of the range's address family.
    pub fn width(&self) -> u8 {
        address::width(&self.base_address())
    }

    pub fn mask(&self) -> IpAddr {
        self.network.mask()
    }

    pub fn first_address(&self) -> IpAddr {
        self.first_addr
    }

    pub fn last_address(&self) -> IpAddr {
        self.last_addr
    }

    /// True when the prefix covers every bit, leaving a single address.
    pub fn is_single_host(&self) -> bool {
        self.prefix() == self.width()
    }

    pub fn network(&self) -> IpNetwork {
        self.network
    }
}

impl FromStr for NetworkRange {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(DecodeError::MissingPrefix(s.to_string()));
        };

        let base_addr = ip_str
            .parse::<IpAddr>()
            .map_err(|_| DecodeError::InvalidAddress(ip_str.to_string()))?;

        let prefix = parse_prefix(prefix_str)?;

        NetworkRange::new(base_addr, prefix)
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_address(), self.prefix())
    }
}

/// A single address to test against a [`NetworkRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateAddress {
    addr: IpAddr,
}

impl CandidateAddress {
    pub fn new(addr: IpAddr) -> Self {
        Self { addr }
    }

    pub fn address(&self) -> IpAddr {
        self.addr
    }
}

impl FromStr for CandidateAddress {
    type Err = DecodeError;

    /// Decodes `s` as a single-host range (`/32` or `/128`) and keeps its address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = s
            .parse::<IpAddr>()
            .map_err(|_| DecodeError::InvalidAddress(s.to_string()))?;

        let host = NetworkRange::new(addr, address::width(&addr))?;

        Ok(Self::new(host.first_address()))
    }
}

impl fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.addr)
    }
}

fn parse_prefix(s: &str) -> Result<u8, DecodeError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidPrefix(s.to_string()));
    }

    s.parse::<u8>()
        .map_err(|_| DecodeError::InvalidPrefix(s.to_string()))
}

/// First and last address of `network`: host bits cleared, then set.
fn bounds(network: &IpNetwork) -> (IpAddr, IpAddr) {
    match network {
        IpNetwork::V4(net) => {
            let first: u32 = u32::from(net.network());
            let mask: u32 = u32::from(net.mask());
            (
                IpAddr::V4(Ipv4Addr::from(first)),
                IpAddr::V4(Ipv4Addr::from(first | !mask)),
            )
        }
        IpNetwork::V6(net) => {
            let first: u128 = u128::from(net.network());
            let mask: u128 = u128::from(net.mask());
            (
                IpAddr::V6(Ipv6Addr::from(first)),
                IpAddr::V6(Ipv6Addr::from(first | !mask)),
            )
        }
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
