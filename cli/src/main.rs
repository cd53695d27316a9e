mod commands;
mod terminal;

use std::process::ExitCode;

use cidrcheck_common::config::Config;
use commands::{CommandLine, check};
use terminal::{logging, print};

/// Exit status for every input failure.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        strategy: commands.strategy,
        verbosity: commands.verbose,
    };

    if let Err(err) = logging::init_logging(cfg.verbosity) {
        eprintln!("{err}");
    }

    match check::run(commands.cidr.as_deref(), commands.ip.as_deref(), &cfg) {
        Ok(verdict) => {
            print::verdict(&verdict);
            ExitCode::SUCCESS
        }
        Err(err) => {
            print::failure(&err);
            ExitCode::from(USAGE_ERROR)
        }
    }
}
