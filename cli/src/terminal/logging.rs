use std::io::IsTerminal;

use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes each event with a level symbol, colored only when the writer
/// accepts ANSI escapes.
pub struct CidrcheckFormatter;

impl CidrcheckFormatter {
    fn symbol(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
        match *level {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        }
    }
}

impl<S, N> FormatEvent<S, N> for CidrcheckFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, color_func) = Self::symbol(event.metadata().level());

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Maps the `-v` count to a log level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for the result line.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .event_format(CidrcheckFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(1), LevelFilter::DEBUG);
        assert_eq!(level_for(2), LevelFilter::TRACE);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }

    #[test]
    fn test_plain_symbols_without_ansi() {
        let capture = Capture::default();
        let writer = capture.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level_for(1))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .event_format(CidrcheckFormatter)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("walking 10.0.0.0/24");
            tracing::warn!("large range");
            tracing::trace!("filtered out");
        });

        assert_eq!(capture.contents(), "[?] walking 10.0.0.0/24\n[*] large range\n");
    }

    #[test]
    fn test_second_install_reports_error() {
        // Only one global subscriber can exist per process
        let first = init_logging(0);
        let second = init_logging(0);
        assert!(first.is_err() || second.is_err());
    }
}
