//! Closed tours produced by the solvers.

use crate::{CityGraph, CityIndex, Metric};

/// A closed cycle through cities with its total under one metric.
///
/// `stops` always starts and ends at the same city.
///
/// # Examples
/// ```
/// use citytour_core::{Metric, Tour};
///
/// let tour = Tour::new(Metric::Distance, vec![0, 2, 1, 0], 9.5);
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.legs().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    metric: Metric,
    stops: Vec<CityIndex>,
    total: f64,
}

impl Tour {
    /// Construct a tour from a closed stop sequence.
    #[must_use]
    pub const fn new(metric: Metric, stops: Vec<CityIndex>, total: f64) -> Self {
        Self {
            metric,
            stops,
            total,
        }
    }

    /// Metric the tour was optimised for.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Visited city indices, including the return to the start.
    #[must_use]
    pub fn stops(&self) -> &[CityIndex] {
        &self.stops
    }

    /// Accumulated weight of every present leg.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// The city the tour starts and ends at.
    #[must_use]
    pub fn start(&self) -> Option<CityIndex> {
        self.stops.first().copied()
    }

    /// Consecutive `(from, to)` pairs, including the closing leg.
    pub fn legs(&self) -> impl Iterator<Item = (CityIndex, CityIndex)> + '_ {
        self.stops.windows(2).filter_map(|pair| match pair {
            [from, to] => Some((*from, *to)),
            _ => None,
        })
    }

    /// Resolve stop indices to city names using `graph`.
    ///
    /// Indices unknown to `graph` are skipped.
    #[must_use]
    pub fn names<'g>(&self, graph: &'g CityGraph) -> Vec<&'g str> {
        self.stops
            .iter()
            .filter_map(|&index| graph.name_of(index))
            .collect()
    }
}

/// A non-fatal irregularity found while building a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum TourAnomaly {
    /// The walk ran out of reachable cities before visiting them all.
    DisconnectedWalk {
        /// Cities visited, start included.
        visited: usize,
        /// Cities in the graph.
        total: usize,
    },
    /// No route leads from the last stop back to the start.
    ///
    /// The tour total excludes this leg.
    MissingReturnEdge {
        /// Last visited city.
        from: CityIndex,
        /// Start city.
        to: CityIndex,
    },
}

impl std::fmt::Display for TourAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DisconnectedWalk { visited, total } => write!(
                f,
                "walk stopped after visiting {visited} of {total} cities; no unvisited city is reachable"
            ),
            Self::MissingReturnEdge { from, to } => write!(
                f,
                "no route from city #{from} back to start city #{to}; total excludes the closing leg"
            ),
        }
    }
}
