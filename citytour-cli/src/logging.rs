//! Logger initialisation for the CLI.
//!
//! Library crates only emit through the `log` facade; the binary installs an
//! `env_logger` backend writing compact `LEVEL message` lines to stderr.

use std::io::Write;

use env_logger::{Builder, Target, WriteStyle, fmt::Formatter};
use log::{Level, LevelFilter};

/// Install the global logger at `level`.
///
/// A logger that is already installed (for example by a test harness) is left
/// in place.
pub(crate) fn init(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    if builder.try_init().is_err() {
        log::debug!("logger already initialised; keeping existing backend");
    }
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
