use std::fmt;

use clap::ValueEnum;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Which membership semantics the checker applies.
    pub strategy: MatchStrategy,
    /// Diagnostic verbosity on stderr.
    ///
    /// `0` only shows warnings, `1` adds debug events, `2` and above adds traces.
    pub verbosity: u8,
}

/// How an address is tested against a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum MatchStrategy {
    /// Walk the range one address at a time from the first address.
    ///
    /// The walk stops on the last address without testing it, so the last
    /// address of a multi-address range is never a member.
    #[default]
    Walk,
    /// Compare network bits only: `candidate & mask == base & mask`.
    Mask,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Walk => write!(f, "walk"),
            MatchStrategy::Mask => write!(f, "mask"),
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
