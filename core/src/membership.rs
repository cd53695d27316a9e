//! Range membership checks.
//!
//! Two semantics are available behind [`MembershipTest`]:
//!
//! * [`RangeWalker`] steps through the range one address at a time from its
//!   first address. The walk ends once it reaches the last address, and that
//!   address is never compared, so it is not a member of any multi-address
//!   range. This is the default.
//! * [`MaskMatcher`] compares network bits only, and so also accepts the last
//!   address.
//!
//! Both agree everywhere else. The walk is linear in the size of the range.

use std::net::IpAddr;

use cidrcheck_common::config::MatchStrategy;
use cidrcheck_common::network::address;
use cidrcheck_common::network::range::{CandidateAddress, NetworkRange};
use tracing::{debug, trace};

/// A membership predicate over a decoded range and candidate.
pub trait MembershipTest {
    fn contains(&self, range: &NetworkRange, candidate: &CandidateAddress) -> bool;
}

pub struct RangeWalker;

impl MembershipTest for RangeWalker {
    fn contains(&self, range: &NetworkRange, candidate: &CandidateAddress) -> bool {
        is_in_range(range, candidate)
    }
}

pub struct MaskMatcher;

impl MembershipTest for MaskMatcher {
    fn contains(&self, range: &NetworkRange, candidate: &CandidateAddress) -> bool {
        let Some(target) = comparable_address(range, candidate) else {
            return false;
        };
        let mask: IpAddr = range.mask();

        match (
            address::network_bits(target, mask),
            address::network_bits(range.base_address(), mask),
        ) {
            (Some(candidate_bits), Some(base_bits)) => candidate_bits == base_bits,
            _ => false,
        }
    }
}

/// Checks `candidate` against `range` with the given semantics.
pub fn check(range: &NetworkRange, candidate: &CandidateAddress, strategy: MatchStrategy) -> bool {
    debug!(
        "Checking {candidate} against {range} ({} to {}) using the {strategy} strategy",
        range.first_address(),
        range.last_address()
    );

    let test: &dyn MembershipTest = match strategy {
        MatchStrategy::Walk => &RangeWalker,
        MatchStrategy::Mask => &MaskMatcher,
    };

    test.contains(range, candidate)
}

/// Walks `range` from its first address looking for `candidate`.
///
/// A single-host range matches its own base address directly. Otherwise the
/// walk stops on reaching the last address without comparing it.
pub fn is_in_range(range: &NetworkRange, candidate: &CandidateAddress) -> bool {
    let Some(target) = comparable_address(range, candidate) else {
        return false;
    };

    if range.is_single_host() && range.base_address() == target {
        trace!("Single-host range {range} matches {target}");
        return true;
    }

    let last: IpAddr = range.last_address();
    let mut current: IpAddr = range.first_address();

    while current != last {
        if current == target {
            return true;
        }
        current = address::next_address(current);
    }

    false
}

/// Brings the candidate into the range's address width, if it has a form there.
fn comparable_address(range: &NetworkRange, candidate: &CandidateAddress) -> Option<IpAddr> {
    let target = address::to_family_of(candidate.address(), &range.base_address());
    if target.is_none() {
        trace!("{candidate} has no form in the address family of {range}");
    }
    target
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
