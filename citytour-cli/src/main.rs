//! Entry point for the `citytour` binary.
#![forbid(unsafe_code)]

use citytour_cli::CliError;

fn main() -> eyre::Result<()> {
    match citytour_cli::run() {
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        outcome => outcome.map_err(eyre::Report::from),
    }
}
