//! Error types emitted by the `citytour` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use citytour_core::{ParseAlgorithmError, ParseMetricError, SolveError};
use citytour_data::LoadError;
use thiserror::Error;

/// Errors emitted by the `citytour` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The metric option did not name a metric.
    #[error(transparent)]
    UnknownMetric(#[from] ParseMetricError),
    /// The algorithm option did not name an algorithm.
    #[error(transparent)]
    UnknownAlgorithm(#[from] ParseAlgorithmError),
    /// The start city is not in the loaded graph.
    #[error("start city '{name}' not found")]
    UnknownStartCity {
        /// Requested city name.
        name: String,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Long flag name.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Long flag name.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Loading a city or route file failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Exhaustive search was requested on too many cities without `--force`.
    #[error(
        "exhaustive search over {cities} cities exceeds the limit of {limit}; \
         pass --force to run it anyway"
    )]
    ExhaustiveLimitExceeded {
        /// Cities in the loaded graph.
        cities: usize,
        /// Configured threshold.
        limit: usize,
    },
    /// The solver rejected the request or, in strict mode, the tour.
    #[error("solver failed: {source}")]
    Solve {
        /// Solver error.
        source: SolveError,
    },
    /// Serializing the solve response failed.
    #[error("failed to serialise solve response: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
