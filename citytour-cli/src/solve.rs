//! `solve` command: build a tour and print it as text or JSON.

use std::io::Write;

use camino::Utf8PathBuf;
use citytour_core::{
    Algorithm, CityGraph, Metric, SolveRequest, SolveResponse, Solver, TourSolver,
};
use clap::{Parser, ValueEnum};
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::GraphSources;
use crate::{
    ARG_ALGORITHM, ARG_CITIES, ARG_FORCE, ARG_FORMAT, ARG_MAX_EXHAUSTIVE_CITIES, ARG_METRIC,
    ARG_ROUTES, ARG_START, ARG_STRICT, CliError, ENV_SOLVE_CITIES, ENV_SOLVE_METRIC,
    ENV_SOLVE_ROUTES, ENV_SOLVE_START,
};

/// City count above which exhaustive search needs `--force`.
pub(crate) const DEFAULT_MAX_EXHAUSTIVE_CITIES: usize = 10;

/// How the solve result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Load a city file and a route file, then build a closed tour \
                 from the start city that minimises the chosen metric. \
                 Exhaustive search is exact but factorial, so graphs above \
                 the configured size need --force.",
    about = "Build a tour over the loaded cities"
)]
#[ortho_config(prefix = "CITYTOUR")]
pub(crate) struct SolveArgs {
    /// Path to the city file (`name x y` per line).
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Path to the route file (`from to distance cost time` per line).
    #[arg(long = ARG_ROUTES, value_name = "path")]
    #[serde(default)]
    pub(crate) routes: Option<Utf8PathBuf>,
    /// Weight to minimise: distance, cost or time.
    #[arg(long = ARG_METRIC, value_name = "metric")]
    #[serde(default)]
    pub(crate) metric: Option<String>,
    /// Name of the city the tour starts and ends at.
    #[arg(long = ARG_START, value_name = "city")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Strategy: exhaustive or nearest-neighbour (default).
    #[arg(long = ARG_ALGORITHM, value_name = "algorithm")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
    /// Largest graph exhaustive search accepts without --force (default 10).
    #[arg(long = ARG_MAX_EXHAUSTIVE_CITIES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_exhaustive_cities: Option<usize>,
    /// Run exhaustive search even above the size limit.
    #[arg(
        long = ARG_FORCE,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) force: Option<bool>,
    /// Fail instead of printing a tour that has anomalies.
    #[arg(
        long = ARG_STRICT,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) strict: Option<bool>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    pub(crate) sources: GraphSources,
    pub(crate) metric: Metric,
    pub(crate) start: String,
    pub(crate) algorithm: Algorithm,
    pub(crate) max_exhaustive_cities: usize,
    pub(crate) force: bool,
    pub(crate) strict: bool,
    pub(crate) format: OutputFormat,
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let sources =
            GraphSources::require(args.cities, args.routes, ENV_SOLVE_CITIES, ENV_SOLVE_ROUTES)?;
        let metric = args
            .metric
            .ok_or(CliError::MissingArgument {
                field: ARG_METRIC,
                env: ENV_SOLVE_METRIC,
            })?
            .parse::<Metric>()?;
        let start = args.start.ok_or(CliError::MissingArgument {
            field: ARG_START,
            env: ENV_SOLVE_START,
        })?;
        let algorithm = args
            .algorithm
            .map(|text| text.parse::<Algorithm>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            sources,
            metric,
            start,
            algorithm,
            max_exhaustive_cities: args
                .max_exhaustive_cities
                .unwrap_or(DEFAULT_MAX_EXHAUSTIVE_CITIES),
            force: args.force.unwrap_or(false),
            strict: args.strict.unwrap_or(false),
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_solve(args: SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let graph = config.sources.load()?;
    let response = solve_graph(&graph, &config)?;
    write_response(writer, &graph, &response, config.format)
}

/// Resolve the start city, apply the exhaustive size gate and solve.
pub(crate) fn solve_graph(
    graph: &CityGraph,
    config: &SolveConfig,
) -> Result<SolveResponse, CliError> {
    let start = graph
        .find_index(&config.start)
        .ok_or_else(|| CliError::UnknownStartCity {
            name: config.start.clone(),
        })?;
    check_exhaustive_limit(graph.len(), config)?;

    let request = SolveRequest {
        metric: config.metric,
        start,
        algorithm: config.algorithm,
    };
    let response = TourSolver::new(graph)
        .solve(&request)
        .map_err(|source| CliError::Solve { source })?;
    if config.strict {
        response
            .into_complete()
            .map_err(|source| CliError::Solve { source })
    } else {
        Ok(response)
    }
}

fn check_exhaustive_limit(cities: usize, config: &SolveConfig) -> Result<(), CliError> {
    if config.algorithm != Algorithm::Exhaustive || cities <= config.max_exhaustive_cities {
        return Ok(());
    }
    if config.force {
        warn!(
            "forcing exhaustive search over {cities} cities (limit {}); this may take a long time",
            config.max_exhaustive_cities
        );
        return Ok(());
    }
    Err(CliError::ExhaustiveLimitExceeded {
        cities,
        limit: config.max_exhaustive_cities,
    })
}

/// JSON payload: the response plus the tour spelled out by name.
#[derive(Serialize)]
struct SolveReport<'a> {
    path: Vec<&'a str>,
    #[serde(flatten)]
    response: &'a SolveResponse,
}

pub(crate) fn write_response(
    writer: &mut dyn Write,
    graph: &CityGraph,
    response: &SolveResponse,
    format: OutputFormat,
) -> Result<(), CliError> {
    let path = response.tour.names(graph);
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&SolveReport { path, response })
                .map_err(CliError::SerialiseOutput)?;
            writeln!(writer, "{payload}").map_err(CliError::WriteOutput)
        }
        OutputFormat::Text => write_text(writer, &path, response).map_err(CliError::WriteOutput),
    }
}

fn write_text(
    writer: &mut dyn Write,
    path: &[&str],
    response: &SolveResponse,
) -> std::io::Result<()> {
    let metric = response.tour.metric();
    writeln!(
        writer,
        "Tour cost ({metric} optimised, {}): {:.2} {}",
        response.algorithm,
        response.tour.total(),
        metric.unit()
    )?;
    writeln!(writer, "Tour path: {}", path.join(" -> "))?;
    writeln!(
        writer,
        "Candidates evaluated: {}",
        response.diagnostics.candidates_evaluated
    )?;
    writeln!(
        writer,
        "Time taken: {} microseconds",
        response.diagnostics.solve_time.as_micros()
    )?;
    for anomaly in &response.diagnostics.anomalies {
        writeln!(writer, "Warning: {anomaly}")?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
