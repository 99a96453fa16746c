//! Strategies and reference calculations for the property tests.

#![expect(
    clippy::float_arithmetic,
    clippy::indexing_slicing,
    reason = "reference search sums legs over a visited bitmap"
)]

use citytour_core::{CityGraph, CityIndex, EdgeWeight, Metric};
use geo::Coord;
use proptest::prelude::*;

/// Optional `(distance, cost, time)` for each unordered city pair.
pub type PairWeights = Vec<Option<(f64, f64, f64)>>;

/// Number of unordered pairs among `n` cities.
#[expect(clippy::integer_division, reason = "n(n-1) is always even")]
pub const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn weight_triple() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0_f64..100.0, 0.0_f64..100.0, 0.0_f64..100.0)
}

/// City count plus weights for every pair; roughly one pair in five absent.
pub fn sparse_graph_strategy(
    max_cities: usize,
) -> impl Strategy<Value = (usize, PairWeights)> {
    (1..=max_cities).prop_flat_map(|n| {
        let pairs = prop::collection::vec(
            prop::option::weighted(0.8, weight_triple()),
            pair_count(n),
        );
        (Just(n), pairs)
    })
}

/// City count plus weights for every pair, all present.
pub fn complete_graph_strategy(
    max_cities: usize,
) -> impl Strategy<Value = (usize, PairWeights)> {
    (2..=max_cities).prop_flat_map(|n| {
        let pairs = prop::collection::vec(weight_triple().prop_map(Some), pair_count(n));
        (Just(n), pairs)
    })
}

/// Build a graph with cities `C0..Cn` and the supplied pair weights.
pub fn build_graph(n: usize, pairs: &[Option<(f64, f64, f64)>]) -> CityGraph {
    let mut graph = CityGraph::new();
    for i in 0..n {
        let added = graph.add_city(format!("C{i}"), Coord { x: 0.0, y: 0.0 });
        assert!(added.is_ok(), "generated names are unique");
    }
    let mut cells = pairs.iter();
    for i in 0..n {
        for j in (i + 1)..n {
            let Some(Some((distance, cost, time))) = cells.next().copied() else {
                continue;
            };
            let Ok(weight) = EdgeWeight::new(distance, cost, time) else {
                continue;
            };
            let added = graph.add_route(&format!("C{i}"), &format!("C{j}"), weight);
            assert!(added.is_ok(), "generated routes are valid");
        }
    }
    graph
}

/// Cheapest closed tour from `start`, found by plain recursion.
///
/// Independent of the solver's permutation stepping so the two can be
/// compared.
pub fn reference_minimum(graph: &CityGraph, start: CityIndex, metric: Metric) -> Option<f64> {
    fn extend(
        graph: &CityGraph,
        start: CityIndex,
        current: CityIndex,
        visited: &mut Vec<bool>,
        spent: f64,
        metric: Metric,
    ) -> Option<f64> {
        if visited.iter().all(|&seen| seen) {
            if current == start {
                return Some(spent);
            }
            return graph
                .weight_between(current, start, metric)
                .map(|closing| spent + closing);
        }
        let mut best: Option<f64> = None;
        for next in 0..visited.len() {
            if visited[next] {
                continue;
            }
            let Some(leg) = graph.weight_between(current, next, metric) else {
                continue;
            };
            visited[next] = true;
            if let Some(total) = extend(graph, start, next, visited, spent + leg, metric) {
                best = Some(best.map_or(total, |incumbent: f64| incumbent.min(total)));
            }
            visited[next] = false;
        }
        best
    }

    let mut visited = vec![false; graph.len()];
    *visited.get_mut(start)? = true;
    extend(graph, start, start, &mut visited, 0.0, metric)
}

/// Strategy picking any metric.
pub fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop_oneof![
        Just(Metric::Distance),
        Just(Metric::Cost),
        Just(Metric::Time)
    ]
}
