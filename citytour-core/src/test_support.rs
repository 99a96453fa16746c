//! Graph builders shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{CityGraph, EdgeWeight};

/// Build a graph whose routes carry the same value for every metric.
///
/// Cities are placed at the origin. Invalid input panics, which is the
/// desired failure mode inside tests.
///
/// # Panics
/// Panics on duplicate names, unknown route endpoints, self loops or
/// negative weights.
#[expect(
    clippy::expect_used,
    reason = "test fixtures fail loudly on malformed input"
)]
#[must_use]
pub fn graph_from_edges(names: &[&str], edges: &[(&str, &str, f64)]) -> CityGraph {
    let mut graph = CityGraph::new();
    for name in names {
        graph
            .add_city(*name, Coord { x: 0.0, y: 0.0 })
            .expect("fixture city names must be unique");
    }
    for &(from, to, value) in edges {
        let weight = EdgeWeight::new(value, value, value).expect("fixture weights must be valid");
        graph
            .add_route(from, to, weight)
            .expect("fixture routes must reference known cities");
    }
    graph
}

/// Build a complete graph from a row-major matrix of per-metric weights.
///
/// Only the upper triangle of `weights` is read; `weights[i][j]` holds the
/// `(distance, cost, time)` triple for cities `i` and `j`. City `i` is named
/// `C{i}`.
///
/// # Panics
/// Panics when a weight is negative or not finite.
#[expect(
    clippy::expect_used,
    reason = "test fixtures fail loudly on malformed input"
)]
#[must_use]
pub fn complete_graph(weights: &[Vec<(f64, f64, f64)>]) -> CityGraph {
    let mut graph = CityGraph::new();
    let names: Vec<String> = (0..weights.len()).map(|i| format!("C{i}")).collect();
    for name in &names {
        graph
            .add_city(name.as_str(), Coord { x: 0.0, y: 0.0 })
            .expect("generated names are unique");
    }
    for (i, row) in weights.iter().enumerate() {
        for (j, &(distance, cost, time)) in row.iter().enumerate().skip(i + 1) {
            let (Some(from), Some(to)) = (names.get(i), names.get(j)) else {
                continue;
            };
            let weight =
                EdgeWeight::new(distance, cost, time).expect("fixture weights must be valid");
            graph
                .add_route(from, to, weight)
                .expect("generated routes reference known cities");
        }
    }
    graph
}
