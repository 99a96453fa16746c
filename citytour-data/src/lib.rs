//! Text-file loaders for the city tour engine.
//!
//! Responsibilities:
//! - Parse whitespace-delimited city (`name x y`) and route
//!   (`from to distance cost time`) files with line-numbered errors.
//! - Apply parsed records to a [`citytour_core::CityGraph`], reporting the
//!   records the graph rejected instead of failing the whole load.
//!
//! Boundaries:
//! - Graph rules (uniqueness, symmetry, no self loops) live in
//!   `citytour-core`; this crate only reports their outcome.
//! - File access goes through `cap-std` with UTF-8 `camino` paths.

#![forbid(unsafe_code)]

mod load;
mod parse;

pub use load::{
    LoadError, LoadReport, SkippedRecord, apply_cities, apply_routes, load_cities, load_routes,
};
pub use parse::{
    CityRecord, ParseError, ParseErrorKind, RouteRecord, parse_cities, parse_city_line,
    parse_route_line, parse_routes,
};
