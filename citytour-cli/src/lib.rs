//! Command-line front end for the city tour engine.
//!
//! `citytour show` prints a loaded graph as text matrices and `citytour
//! solve` builds a tour. Options come from flags, environment variables or a
//! configuration file, layered by `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod error;
mod logging;
mod show;
mod solve;
mod sources;

pub use error::CliError;

use show::ShowArgs;
use solve::SolveArgs;

pub(crate) const ARG_CITIES: &str = "cities";
pub(crate) const ARG_ROUTES: &str = "routes";
pub(crate) const ARG_SORT_BY_NAME: &str = "sort-by-name";
pub(crate) const ARG_METRIC: &str = "metric";
pub(crate) const ARG_START: &str = "start";
pub(crate) const ARG_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_MAX_EXHAUSTIVE_CITIES: &str = "max-exhaustive-cities";
pub(crate) const ARG_FORCE: &str = "force";
pub(crate) const ARG_STRICT: &str = "strict";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ENV_SHOW_CITIES: &str = "CITYTOUR_CMDS_SHOW_CITIES";
pub(crate) const ENV_SHOW_ROUTES: &str = "CITYTOUR_CMDS_SHOW_ROUTES";
pub(crate) const ENV_SOLVE_CITIES: &str = "CITYTOUR_CMDS_SOLVE_CITIES";
pub(crate) const ENV_SOLVE_ROUTES: &str = "CITYTOUR_CMDS_SOLVE_ROUTES";
pub(crate) const ENV_SOLVE_METRIC: &str = "CITYTOUR_CMDS_SOLVE_METRIC";
pub(crate) const ENV_SOLVE_START: &str = "CITYTOUR_CMDS_SOLVE_START";

/// Run the `citytour` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files or the
/// solve itself fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.log_level);
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Show(args) => show::run_show(args, writer),
        Command::Solve(args) => solve::run_solve(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "citytour",
    about = "Build and inspect closed tours over a weighted city graph",
    version
)]
struct Cli {
    /// Minimum level of log records written to stderr.
    #[arg(long, value_name = "level", default_value_t = LevelFilter::Warn, global = true)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cities and the distance, cost and time matrices.
    Show(ShowArgs),
    /// Build a tour from a start city under one metric.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
