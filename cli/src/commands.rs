pub mod check;

use std::ffi::OsString;

use cidrcheck_common::config::MatchStrategy;
use clap::{ArgAction, Parser};

/// Long flags that may also be written with a single dash (`-cidr 10.0.0.0/8`).
const SINGLE_DASH_LONGS: &[&str] = &["cidr", "ip", "strategy", "verbose", "help"];

#[derive(Parser, Debug)]
#[command(name = "cidrcheck")]
#[command(about = "Checks whether an IP address belongs to a CIDR range.")]
#[command(args_override_self = true)]
pub struct CommandLine {
    /// CIDR of network
    #[arg(long, value_name = "CIDR")]
    pub cidr: Option<String>,

    /// IP to verify
    #[arg(long, value_name = "IP")]
    pub ip: Option<String>,

    /// Membership semantics; `walk` never matches the last address of a range
    #[arg(long, value_enum, default_value_t = MatchStrategy::Walk)]
    pub strategy: MatchStrategy,

    /// Print diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites single-dash long flags (`-ip`, `-cidr=...`) to their `--` form.
///
/// Arguments after a bare `--` and anything that is not a known long flag are
/// passed through untouched, so short flags like `-vv` keep working.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }

            let Some(text) = arg.to_str() else {
                return arg;
            };

            if text == "--" {
                passthrough = true;
                return arg;
            }

            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_single_dash_long(rest) => {
                    OsString::from(format!("--{rest}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    SINGLE_DASH_LONGS.contains(&name)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
