//! Tour construction over a [`CityGraph`].
//!
//! [`TourSolver`] borrows a graph and offers two strategies: an exact search
//! over every permutation and a greedy nearest-neighbour walk. Both return a
//! [`SolveResponse`] carrying the [`Tour`] and [`Diagnostics`].

mod cost;
mod exhaustive;
mod nearest;
mod permutation;

use std::time::Duration;

use thiserror::Error;

use crate::{CityGraph, CityIndex, Metric, Tour, TourAnomaly};

/// Tour construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Algorithm {
    /// Try every permutation; exact but factorial in city count.
    Exhaustive,
    /// Greedy walk to the closest unvisited city.
    #[default]
    NearestNeighbour,
}

/// Error returned when text does not name an [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{input}' (expected exhaustive or nearest-neighbour)")]
pub struct ParseAlgorithmError {
    /// The rejected input.
    pub input: String,
}

impl Algorithm {
    /// Return the algorithm as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::NearestNeighbour => "nearest-neighbour",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exhaustive" | "brute-force" => Ok(Self::Exhaustive),
            "nearest-neighbour" | "nearest-neighbor" | "nn" => Ok(Self::NearestNeighbour),
            _ => Err(ParseAlgorithmError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Parameters for a solve.
///
/// # Examples
/// ```rust
/// use citytour_core::{Algorithm, Metric, SolveRequest};
///
/// let request = SolveRequest {
///     metric: Metric::Time,
///     start: 0,
///     algorithm: Algorithm::Exhaustive,
/// };
/// assert_eq!(request.start, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Weight to minimise.
    pub metric: Metric,
    /// Index of the city the tour starts and ends at.
    pub start: CityIndex,
    /// Strategy to run.
    pub algorithm: Algorithm,
}

/// Instrumentation collected during a solve.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent searching.
    pub solve_time: Duration,
    /// Candidate tours (exhaustive) or walk steps (nearest neighbour) examined.
    pub candidates_evaluated: u64,
    /// Irregularities that did not stop the solve.
    pub anomalies: Vec<TourAnomaly>,
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// Strategy that produced the tour.
    pub algorithm: Algorithm,
    /// The closed tour.
    pub tour: Tour,
    /// Timing and anomaly details.
    pub diagnostics: Diagnostics,
}

impl SolveResponse {
    /// Whether the tour visits every city and closes through a real route.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.diagnostics.anomalies.is_empty()
    }

    /// Reject responses that carry anomalies.
    ///
    /// # Errors
    /// Returns [`SolveError::DisconnectedWalk`] or
    /// [`SolveError::MissingReturnEdge`] for the first recorded anomaly.
    pub fn into_complete(self) -> Result<Self, SolveError> {
        match self.diagnostics.anomalies.first() {
            None => Ok(self),
            Some(&TourAnomaly::DisconnectedWalk { visited, total }) => {
                Err(SolveError::DisconnectedWalk { visited, total })
            }
            Some(&TourAnomaly::MissingReturnEdge { from, to }) => {
                Err(SolveError::MissingReturnEdge { from, to })
            }
        }
    }
}

/// Errors returned by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The graph has no cities.
    #[error("no cities available for a tour")]
    EmptyGraph,
    /// The start index does not name a city.
    #[error("start index {index} is out of range for {len} cities")]
    InvalidStartIndex {
        /// Requested start.
        index: CityIndex,
        /// Cities in the graph.
        len: usize,
    },
    /// Every permutation needs at least one missing route.
    #[error("no valid tour found; some cities are unreachable")]
    NoValidTour,
    /// The greedy walk could not reach every city.
    #[error("walk visited only {visited} of {total} cities")]
    DisconnectedWalk {
        /// Cities visited, start included.
        visited: usize,
        /// Cities in the graph.
        total: usize,
    },
    /// No route closes the tour back to its start.
    #[error("no route from city #{from} back to start city #{to}")]
    MissingReturnEdge {
        /// Last visited city.
        from: CityIndex,
        /// Start city.
        to: CityIndex,
    },
}

/// Build a tour satisfying a [`SolveRequest`].
///
/// Implementations return errors instead of panicking.
pub trait Solver {
    /// Solve a request, producing a tour or an error.
    ///
    /// # Errors
    /// Returns [`SolveError`] when the request cannot be satisfied.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}

/// Solver bound to one read-only [`CityGraph`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use citytour_core::{CityGraph, EdgeWeight, Metric, TourSolver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = CityGraph::new();
/// for name in ["A", "B", "C"] {
///     graph.add_city(name, Coord { x: 0.0, y: 0.0 })?;
/// }
/// graph.add_route("A", "B", EdgeWeight::new(1.0, 1.0, 1.0)?)?;
/// graph.add_route("B", "C", EdgeWeight::new(1.0, 1.0, 1.0)?)?;
/// graph.add_route("A", "C", EdgeWeight::new(5.0, 5.0, 5.0)?)?;
///
/// let solver = TourSolver::new(&graph);
/// let response = solver.solve_exhaustive(Metric::Distance, 0)?;
/// assert_eq!(response.tour.stops(), &[0, 1, 2, 0]);
/// assert_eq!(response.tour.total(), 7.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourSolver<'g> {
    graph: &'g CityGraph,
}

impl<'g> TourSolver<'g> {
    /// Bind a solver to `graph`.
    #[must_use]
    pub const fn new(graph: &'g CityGraph) -> Self {
        Self { graph }
    }

    /// The graph this solver reads.
    #[must_use]
    pub const fn graph(&self) -> &'g CityGraph {
        self.graph
    }

    /// Find the cheapest tour by trying every ordering of the other cities.
    ///
    /// Runs in factorial time; callers should gate large graphs.
    ///
    /// # Errors
    /// Returns [`SolveError::EmptyGraph`], [`SolveError::InvalidStartIndex`],
    /// or [`SolveError::NoValidTour`] when every ordering needs a missing route.
    pub fn solve_exhaustive(
        &self,
        metric: Metric,
        start: CityIndex,
    ) -> Result<SolveResponse, SolveError> {
        self.check_start(start)?;
        exhaustive::solve(self.graph, metric, start)
    }

    /// Build a tour greedily by always moving to the closest unvisited city.
    ///
    /// Early halts and a missing return leg are reported as anomalies in the
    /// response diagnostics rather than errors.
    ///
    /// # Errors
    /// Returns [`SolveError::EmptyGraph`] or [`SolveError::InvalidStartIndex`].
    pub fn solve_nearest_neighbour(
        &self,
        metric: Metric,
        start: CityIndex,
    ) -> Result<SolveResponse, SolveError> {
        self.check_start(start)?;
        Ok(nearest::solve(self.graph, metric, start))
    }

    fn check_start(&self, start: CityIndex) -> Result<(), SolveError> {
        let len = self.graph.len();
        if len == 0 {
            return Err(SolveError::EmptyGraph);
        }
        if start >= len {
            return Err(SolveError::InvalidStartIndex { index: start, len });
        }
        Ok(())
    }
}

impl Solver for TourSolver<'_> {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        match request.algorithm {
            Algorithm::Exhaustive => self.solve_exhaustive(request.metric, request.start),
            Algorithm::NearestNeighbour => {
                self.solve_nearest_neighbour(request.metric, request.start)
            }
        }
    }
}
