//! Exact search over every tour with a fixed start.

use std::time::Instant;

use log::debug;

use super::cost::cycle_cost;
use super::permutation::next_permutation;
use super::{Algorithm, Diagnostics, SolveError, SolveResponse};
use crate::{CityGraph, CityIndex, Metric, Tour};

/// Try each ordering of the non-start cities in lexicographic order.
///
/// Candidates with a missing leg are skipped. Only a strictly smaller cost
/// replaces the incumbent, so the first optimal ordering wins ties.
pub(super) fn solve(
    graph: &CityGraph,
    metric: Metric,
    start: CityIndex,
) -> Result<SolveResponse, SolveError> {
    let started_at = Instant::now();

    let mut order: Vec<CityIndex> = (0..graph.len()).filter(|&i| i != start).collect();
    let mut best: Option<(f64, Vec<CityIndex>)> = None;
    let mut evaluated: u64 = 0;

    loop {
        evaluated += 1;
        if let Some(cost) = cycle_cost(graph, start, &order, metric)
            && best.as_ref().is_none_or(|(incumbent, _)| cost < *incumbent)
        {
            best = Some((cost, order.clone()));
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    let solve_time = started_at.elapsed();
    let (total, best_order) = best.ok_or(SolveError::NoValidTour)?;

    let mut stops = Vec::with_capacity(best_order.len() + 2);
    stops.push(start);
    stops.extend(best_order);
    stops.push(start);

    debug!(
        "exhaustive search by {metric} from city #{start}: {evaluated} candidates, best total {total:.2}, {} µs",
        solve_time.as_micros()
    );

    Ok(SolveResponse {
        algorithm: Algorithm::Exhaustive,
        tour: Tour::new(metric, stops, total),
        diagnostics: Diagnostics {
            solve_time,
            candidates_evaluated: evaluated,
            anomalies: Vec::new(),
        },
    })
}
