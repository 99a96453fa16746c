//! Core domain types for the city tour engine.
//!
//! A [`CityGraph`] holds named cities and a symmetric matrix of routes, each
//! weighted by distance, cost and time. A [`TourSolver`] borrows the graph and
//! builds closed tours under a chosen [`Metric`], either exactly by exhaustive
//! search or greedily by nearest neighbour.
//!
//! Constructors and mutators return `Result` so invalid input surfaces early
//! and never leaves the graph half-updated.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod city;
mod edge;
mod graph;
mod metric;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
mod tour;

pub use city::City;
pub use edge::{EdgeWeight, EdgeWeightError};
pub use graph::{CityGraph, CityIndex, GraphError};
pub use metric::{Metric, ParseMetricError};
pub use solver::{
    Algorithm, Diagnostics, ParseAlgorithmError, SolveError, SolveRequest, SolveResponse, Solver,
    TourSolver,
};
pub use tour::{Tour, TourAnomaly};
