//! `show` command: print the loaded cities and route matrices.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use citytour_core::{CityGraph, CityIndex, Metric};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::GraphSources;
use crate::{ARG_CITIES, ARG_ROUTES, ARG_SORT_BY_NAME, CliError, ENV_SHOW_CITIES, ENV_SHOW_ROUTES};

/// Narrowest matrix column, before padding.
const MIN_COLUMN_WIDTH: usize = 10;
/// Spaces added to the widest city name.
const COLUMN_PADDING: usize = 2;

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "show",
    long_about = "Load a city file and a route file, then print the city list \
                 followed by the distance, cost and time matrices. Missing \
                 routes print as INF.",
    about = "Print the cities and route matrices"
)]
#[ortho_config(prefix = "CITYTOUR")]
pub(crate) struct ShowArgs {
    /// Path to the city file (`name x y` per line).
    #[arg(long = ARG_CITIES, value_name = "path")]
    #[serde(default)]
    pub(crate) cities: Option<Utf8PathBuf>,
    /// Path to the route file (`from to distance cost time` per line).
    #[arg(long = ARG_ROUTES, value_name = "path")]
    #[serde(default)]
    pub(crate) routes: Option<Utf8PathBuf>,
    /// List cities alphabetically instead of in file order.
    #[arg(
        long = ARG_SORT_BY_NAME,
        value_name = "bool",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) sort_by_name: Option<bool>,
}

impl ShowArgs {
    pub(crate) fn into_config(self) -> Result<ShowConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ShowConfig::try_from(merged)
    }
}

/// Resolved `show` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowConfig {
    pub(crate) sources: GraphSources,
    pub(crate) sort_by_name: bool,
}

impl TryFrom<ShowArgs> for ShowConfig {
    type Error = CliError;

    fn try_from(args: ShowArgs) -> Result<Self, Self::Error> {
        let sources =
            GraphSources::require(args.cities, args.routes, ENV_SHOW_CITIES, ENV_SHOW_ROUTES)?;
        Ok(Self {
            sources,
            sort_by_name: args.sort_by_name.unwrap_or(false),
        })
    }
}

pub(crate) fn run_show(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let graph = config.sources.load()?;
    render_graph(writer, &graph, config.sort_by_name).map_err(CliError::WriteOutput)
}

/// Write the city list and one matrix per metric.
///
/// Rows and columns follow insertion order, or name order when
/// `sort_by_name` is set. Cells are right-aligned to a shared width.
pub(crate) fn render_graph(
    writer: &mut dyn Write,
    graph: &CityGraph,
    sort_by_name: bool,
) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(writer, "No cities to display.");
    }

    let order = display_order(graph, sort_by_name);
    writeln!(writer, "Cities:")?;
    for city in order.iter().filter_map(|&index| graph.city(index)) {
        let location = city.location();
        writeln!(
            writer,
            "  {} ({:.2}, {:.2})",
            city.name(),
            location.x,
            location.y
        )?;
    }

    let width = column_width(graph);
    for metric in Metric::ALL {
        writeln!(writer)?;
        writeln!(writer, "{} Matrix ({}):", title(metric), metric.unit())?;
        write!(writer, "{:>width$}", "")?;
        for &column in &order {
            write!(writer, "{:>width$}", graph.name_of(column).unwrap_or("?"))?;
        }
        writeln!(writer)?;

        for &row in &order {
            write!(writer, "{:>width$}", graph.name_of(row).unwrap_or("?"))?;
            for &column in &order {
                match graph.weight_between(row, column, metric) {
                    Some(value) => write!(writer, "{value:>width$.2}")?,
                    None => write!(writer, "{:>width$}", "INF")?,
                }
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn display_order(graph: &CityGraph, sort_by_name: bool) -> Vec<CityIndex> {
    if sort_by_name {
        graph
            .cities_sorted_by_name()
            .into_iter()
            .filter_map(|city| graph.find_index(city.name()))
            .collect()
    } else {
        (0..graph.len()).collect()
    }
}

fn column_width(graph: &CityGraph) -> usize {
    let longest = graph
        .cities()
        .iter()
        .map(|city| city.name().chars().count())
        .max()
        .unwrap_or(0);
    longest.max(MIN_COLUMN_WIDTH) + COLUMN_PADDING
}

const fn title(metric: Metric) -> &'static str {
    match metric {
        Metric::Distance => "Distance",
        Metric::Cost => "Cost",
        Metric::Time => "Time",
    }
}
