//! Property-based tests for the city graph and both tour solvers.
//!
//! # Invariants tested
//!
//! - **Symmetry:** every metric reads the same in both directions.
//! - **Growth:** adding a city leaves existing weights untouched.
//! - **Idempotence:** re-applying a route changes nothing.
//! - **Exactness:** exhaustive search matches an independent recursive minimum.
//! - **Dominance:** exhaustive never costs more than nearest neighbour.
//! - **Tour shape:** tours are closed and visit each city exactly once.

#![expect(
    clippy::float_arithmetic,
    reason = "totals are compared within a tolerance"
)]

mod proptest_support;

use std::collections::HashSet;

use citytour_core::{EdgeWeight, SolveError, TourSolver};
use geo::Coord;
use proptest::prelude::*;

use proptest_support::{
    build_graph, complete_graph_strategy, metric_strategy, reference_minimum,
    sparse_graph_strategy,
};

const TOLERANCE: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: `weight_between(i, j, m) == weight_between(j, i, m)`.
    #[test]
    fn weights_are_symmetric(
        (n, pairs) in sparse_graph_strategy(7),
        metric in metric_strategy(),
    ) {
        let graph = build_graph(n, &pairs);
        for i in 0..n {
            prop_assert_eq!(graph.weight_between(i, i, metric), None);
            for j in 0..n {
                prop_assert_eq!(
                    graph.weight_between(i, j, metric),
                    graph.weight_between(j, i, metric)
                );
            }
        }
    }

    /// Property: growing the graph preserves every existing cell.
    #[test]
    fn adding_a_city_preserves_weights((n, pairs) in sparse_graph_strategy(7)) {
        let before = build_graph(n, &pairs);
        let mut after = before.clone();
        let added = after.add_city("Newcomer", Coord { x: 1.0, y: 1.0 });
        prop_assert_eq!(added, Ok(n));
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(before.edge(i, j), after.edge(i, j));
            }
            prop_assert_eq!(after.edge(i, n), None);
        }
    }

    /// Property: repeating an identical `add_route` yields the same graph.
    #[test]
    fn add_route_is_idempotent(
        (n, pairs) in complete_graph_strategy(6),
        distance in 0.0_f64..50.0,
        cost in 0.0_f64..50.0,
        time in 0.0_f64..50.0,
    ) {
        let mut graph = build_graph(n, &pairs);
        let weight = EdgeWeight::new(distance, cost, time);
        prop_assert!(weight.is_ok());
        let Ok(weight) = weight else { return Ok(()); };

        prop_assert!(graph.add_route("C0", "C1", weight).is_ok());
        let once = graph.clone();
        prop_assert!(graph.add_route("C0", "C1", weight).is_ok());
        prop_assert_eq!(once, graph);
    }

    /// Property: exhaustive search finds the true minimum, or reports that
    /// none exists exactly when the reference finds none.
    #[test]
    fn exhaustive_matches_reference(
        (n, pairs) in sparse_graph_strategy(6),
        metric in metric_strategy(),
        start_seed in any::<prop::sample::Index>(),
    ) {
        let graph = build_graph(n, &pairs);
        let start = start_seed.index(n);
        let expected = reference_minimum(&graph, start, metric);
        let outcome = TourSolver::new(&graph).solve_exhaustive(metric, start);

        match (expected, outcome) {
            (Some(minimum), Ok(response)) => {
                prop_assert!((response.tour.total() - minimum).abs() <= TOLERANCE);
            }
            (None, Err(err)) => prop_assert_eq!(err, SolveError::NoValidTour),
            (expected, outcome) => {
                prop_assert!(false, "reference {expected:?} disagrees with {outcome:?}");
            }
        }
    }

    /// Property: exact search is never worse than the greedy walk when both
    /// produce complete tours.
    #[test]
    fn exhaustive_dominates_nearest_neighbour(
        (n, pairs) in sparse_graph_strategy(6),
        metric in metric_strategy(),
        start_seed in any::<prop::sample::Index>(),
    ) {
        let graph = build_graph(n, &pairs);
        let start = start_seed.index(n);
        let solver = TourSolver::new(&graph);
        let greedy = solver.solve_nearest_neighbour(metric, start);
        prop_assert!(greedy.is_ok());
        let Ok(greedy) = greedy else { return Ok(()); };

        if greedy.is_complete() {
            let exact = solver.solve_exhaustive(metric, start);
            prop_assert!(exact.is_ok(), "a complete greedy tour proves one exists");
            if let Ok(exact) = exact {
                prop_assert!(exact.tour.total() <= greedy.tour.total() + TOLERANCE);
            }
        }
    }

    /// Property: complete tours start and end at `start` and visit each city
    /// once in between.
    #[test]
    fn tours_visit_every_city_once(
        (n, pairs) in complete_graph_strategy(6),
        metric in metric_strategy(),
        start_seed in any::<prop::sample::Index>(),
    ) {
        let graph = build_graph(n, &pairs);
        let start = start_seed.index(n);
        let solver = TourSolver::new(&graph);
        for response in [
            solver.solve_exhaustive(metric, start),
            solver.solve_nearest_neighbour(metric, start),
        ] {
            prop_assert!(response.is_ok());
            let Ok(response) = response else { continue; };
            prop_assert!(response.is_complete());

            let stops = response.tour.stops();
            prop_assert_eq!(stops.len(), n + 1);
            prop_assert_eq!(stops.first(), Some(&start));
            prop_assert_eq!(stops.last(), Some(&start));
            let inner: HashSet<_> = stops.iter().take(n).collect();
            prop_assert_eq!(inner.len(), n);
        }
    }
}
