//! Facade crate for the city tour engine.
//!
//! Re-exports the graph and solver types from `citytour-core` and the file
//! loaders from `citytour-data`, so callers can depend on one crate:
//!
//! ```no_run
//! use camino::Utf8Path;
//! use citytour_engine::{CityGraph, Metric, TourSolver, load_cities, load_routes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = CityGraph::new();
//! load_cities(&mut graph, Utf8Path::new("cities.txt"))?;
//! load_routes(&mut graph, Utf8Path::new("routes.txt"))?;
//! let start = graph.find_index("Delhi").ok_or("Delhi is not loaded")?;
//! let response = TourSolver::new(&graph).solve_nearest_neighbour(Metric::Distance, start)?;
//! println!("{:?}", response.tour.names(&graph));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use citytour_core::{
    Algorithm, City, CityGraph, CityIndex, Diagnostics, EdgeWeight, EdgeWeightError, GraphError,
    Metric, ParseAlgorithmError, ParseMetricError, SolveError, SolveRequest, SolveResponse,
    Solver, Tour, TourAnomaly, TourSolver,
};

pub use citytour_data::{
    CityRecord, LoadError, LoadReport, ParseError, ParseErrorKind, RouteRecord, SkippedRecord,
    apply_cities, apply_routes, load_cities, load_routes, parse_cities, parse_routes,
};
