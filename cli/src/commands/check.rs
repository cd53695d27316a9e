use std::fmt;

use cidrcheck_common::config::Config;
use cidrcheck_common::network::range::{CandidateAddress, NetworkRange};
use cidrcheck_core::membership;
use thiserror::Error;
use tracing::debug;

/// Failures reported to the user before the process exits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Must provide CIDR with -cidr")]
    MissingCidr,
    #[error("Must provide IP with -ip")]
    MissingIp,
    #[error("Invalid CIDR")]
    InvalidCidr,
    #[error("Invalid IP given")]
    InvalidIp,
}

/// The answer for one invocation, echoing the arguments as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub ip: String,
    pub cidr: String,
    pub member: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}: {}", self.ip, self.cidr, self.member)
    }
}

/// Validates both inputs and runs the membership check.
///
/// An empty value counts as missing. Inputs are checked in order: CIDR
/// presence, IP presence, CIDR syntax, IP syntax.
pub fn run(cidr: Option<&str>, ip: Option<&str>, cfg: &Config) -> anyhow::Result<Verdict> {
    let cidr = cidr.filter(|s| !s.is_empty()).ok_or(InputError::MissingCidr)?;
    let ip = ip.filter(|s| !s.is_empty()).ok_or(InputError::MissingIp)?;

    let range = cidr.parse::<NetworkRange>().map_err(|e| {
        debug!("Rejected CIDR '{cidr}': {e}");
        InputError::InvalidCidr
    })?;

    let candidate = ip.parse::<CandidateAddress>().map_err(|e| {
        debug!("Rejected IP '{ip}': {e}");
        InputError::InvalidIp
    })?;

    let member = membership::check(&range, &candidate, cfg.strategy);

    Ok(Verdict {
        ip: ip.to_string(),
        cidr: cidr.to_string(),
        member,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
