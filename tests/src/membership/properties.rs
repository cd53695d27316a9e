#![cfg(test)]
use cidrcheck_common::config::MatchStrategy;
use cidrcheck_common::network::address;
use cidrcheck_common::network::range::{CandidateAddress, NetworkRange};
use cidrcheck_core::membership::{self, MaskMatcher, MembershipTest};
use std::net::IpAddr;

/// Small ranges across both families so every address can be visited.
const RANGES: &[&str] = &[
    "10.0.0.0/24",
    "10.0.0.77/26",
    "192.168.255.0/23",
    "172.16.0.0/30",
    "10.0.0.0/31",
    "2001:db8::/120",
    "2001:db8:0:ffff::ff00/119",
];

fn range(s: &str) -> NetworkRange {
    s.parse().unwrap()
}

/// Every address of `range`, first to last inclusive.
fn addresses(range: &NetworkRange) -> Vec<IpAddr> {
    let mut out: Vec<IpAddr> = vec![range.first_address()];
    let mut current: IpAddr = range.first_address();
    while current != range.last_address() {
        current = address::next_address(current);
        out.push(current);
    }
    out
}

/// This test verifies that the walk accepts every address up to, but not
/// including, the last one.
#[test]
fn walk_accepts_all_but_last_address() {
    for text in RANGES {
        let net = range(text);
        let all = addresses(&net);
        let (last, rest) = all.split_last().unwrap();

        for addr in rest {
            assert!(
                membership::is_in_range(&net, &CandidateAddress::new(*addr)),
                "{addr} should be in {text}"
            );
        }
        assert!(
            !membership::is_in_range(&net, &CandidateAddress::new(*last)),
            "last address {last} of {text} should not match"
        );
    }
}

/// This test verifies that the mask strategy accepts the whole range, and
/// only disagrees with the walk on the last address.
#[test]
fn mask_differs_from_walk_only_at_last_address() {
    for text in RANGES {
        let net = range(text);
        let all = addresses(&net);
        let last = *all.last().unwrap();

        for addr in all {
            let candidate = CandidateAddress::new(addr);
            let walk = membership::check(&net, &candidate, MatchStrategy::Walk);
            let mask = membership::check(&net, &candidate, MatchStrategy::Mask);

            assert!(mask, "{addr} should be in {text} under mask");
            assert_eq!(walk, addr != last, "walk disagreed on {addr} in {text}");
        }
    }
}

#[test]
fn first_address_is_always_member() {
    let mut texts: Vec<&str> = RANGES.to_vec();
    texts.extend(["10.0.0.5/32", "2001:db8::1/128", "0.0.0.0/0", "::/0"]);

    for text in texts {
        let net = range(text);
        let first = CandidateAddress::new(net.first_address());
        assert!(membership::is_in_range(&net, &first), "first address of {text}");
    }
}

#[test]
fn neighbours_outside_range_are_rejected() {
    for text in RANGES {
        let net = range(text);
        let before = CandidateAddress::new(previous(net.first_address()));
        let after = CandidateAddress::new(address::next_address(net.last_address()));

        for strategy in [MatchStrategy::Walk, MatchStrategy::Mask] {
            assert!(!membership::check(&net, &before, strategy), "{before} vs {text}");
            assert!(!membership::check(&net, &after, strategy), "{after} vs {text}");
        }
    }
}

#[test]
fn repeated_checks_agree() {
    let net = range("10.0.0.0/24");
    let candidate: CandidateAddress = "10.0.0.42".parse().unwrap();

    let first = membership::is_in_range(&net, &candidate);
    for _ in 0..10 {
        assert_eq!(membership::is_in_range(&net, &candidate), first);
        assert!(MaskMatcher.contains(&net, &candidate));
    }
}

#[test]
fn decoded_end_to_end_scenarios() {
    let cases: &[(&str, &str, bool)] = &[
        ("10.0.0.0/24", "10.0.0.5", true),
        ("10.0.0.0/24", "10.0.0.255", false),
        ("10.0.0.5/32", "10.0.0.5", true),
        ("10.0.0.0/24", "192.168.1.1", false),
    ];

    for (cidr, ip, expected) in cases {
        let net = range(cidr);
        let candidate: CandidateAddress = ip.parse().unwrap();
        assert_eq!(
            membership::is_in_range(&net, &candidate),
            *expected,
            "{ip} in {cidr}"
        );
    }
}

fn previous(addr: IpAddr) -> IpAddr {
    match addr {
        IpAddr::V4(v4) => IpAddr::V4(u32::from(v4).wrapping_sub(1).into()),
        IpAddr::V6(v6) => IpAddr::V6(u128::from(v6).wrapping_sub(1).into()),
    }
}
