//! Weight accounting shared by both strategies.

use crate::{CityGraph, CityIndex, Metric};

/// Weight of a single leg, or `None` when no route exists.
pub(super) fn leg_cost(
    graph: &CityGraph,
    from: CityIndex,
    to: CityIndex,
    metric: Metric,
) -> Option<f64> {
    graph.weight_between(from, to, metric)
}

/// Cost of the closed cycle `start -> order... -> start`.
///
/// Returns `None` as soon as any leg is missing, so the candidate can never
/// win a comparison. A lone start city costs nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "tour totals are sums of floating-point route weights"
)]
pub(super) fn cycle_cost(
    graph: &CityGraph,
    start: CityIndex,
    order: &[CityIndex],
    metric: Metric,
) -> Option<f64> {
    let mut total = 0.0;
    let mut current = start;
    for &next in order {
        total += leg_cost(graph, current, next, metric)?;
        current = next;
    }
    if current != start {
        total += leg_cost(graph, current, start, metric)?;
    }
    Some(total)
}
