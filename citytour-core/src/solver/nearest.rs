//! Greedy nearest-neighbour tour construction.

use std::time::Instant;

use log::{debug, warn};

use super::cost::leg_cost;
use super::{Algorithm, Diagnostics, SolveResponse};
use crate::{CityGraph, CityIndex, Metric, Tour, TourAnomaly};

/// Closest unvisited city reachable from `current`, lowest index on ties.
fn nearest_unvisited(
    graph: &CityGraph,
    current: CityIndex,
    visited: &[bool],
    metric: Metric,
) -> Option<(CityIndex, f64)> {
    visited
        .iter()
        .enumerate()
        .filter(|&(_, &seen)| !seen)
        .filter_map(|(candidate, _)| {
            leg_cost(graph, current, candidate, metric).map(|cost| (candidate, cost))
        })
        .fold(None, |best, (candidate, cost)| match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((candidate, cost)),
        })
}

/// Walk from `start`, then close back to it.
///
/// Never fails: an early halt or a missing closing leg is recorded as a
/// [`TourAnomaly`] and logged.
#[expect(
    clippy::float_arithmetic,
    reason = "tour totals are sums of floating-point route weights"
)]
pub(super) fn solve(graph: &CityGraph, metric: Metric, start: CityIndex) -> SolveResponse {
    let started_at = Instant::now();
    let city_count = graph.len();

    let mut visited = vec![false; city_count];
    if let Some(seen) = visited.get_mut(start) {
        *seen = true;
    }
    let mut stops = Vec::with_capacity(city_count + 1);
    stops.push(start);
    let mut current = start;
    let mut total = 0.0;
    let mut steps: u64 = 0;
    let mut anomalies = Vec::new();

    while stops.len() < city_count {
        let Some((next, cost)) = nearest_unvisited(graph, current, &visited, metric) else {
            break;
        };
        if let Some(seen) = visited.get_mut(next) {
            *seen = true;
        }
        stops.push(next);
        total += cost;
        current = next;
        steps += 1;
    }

    if stops.len() < city_count {
        let anomaly = TourAnomaly::DisconnectedWalk {
            visited: stops.len(),
            total: city_count,
        };
        warn!("nearest-neighbour from city #{start}: {anomaly}");
        anomalies.push(anomaly);
    }

    if current != start {
        let closing = leg_cost(graph, current, start, metric);
        total += closing.unwrap_or(0.0);
        if closing.is_none() {
            let anomaly = TourAnomaly::MissingReturnEdge {
                from: current,
                to: start,
            };
            warn!("nearest-neighbour from city #{start}: {anomaly}");
            anomalies.push(anomaly);
        }
    }
    stops.push(start);

    let solve_time = started_at.elapsed();
    debug!(
        "nearest-neighbour by {metric} from city #{start}: {steps} steps, total {total:.2}, {} µs",
        solve_time.as_micros()
    );

    SolveResponse {
        algorithm: Algorithm::NearestNeighbour,
        tour: Tour::new(metric, stops, total),
        diagnostics: Diagnostics {
            solve_time,
            candidates_evaluated: steps,
            anomalies,
        },
    }
}
