//! Populate a [`CityGraph`] from parsed records or files on disk.
//!
//! Files are opened through `cap-std` ambient authority. A file is read and
//! parsed in full before the graph is touched, so read and parse failures
//! leave it unchanged. Records the graph rejects (duplicate cities, unknown
//! endpoints, self loops) are skipped with a warning and listed in the
//! returned [`LoadReport`].

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use citytour_core::{CityGraph, GraphError};
use log::{info, warn};
use thiserror::Error;

use crate::parse::{CityRecord, ParseError, RouteRecord, parse_cities, parse_routes};

/// A record the graph refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based source line.
    pub line: usize,
    /// Why the graph rejected it.
    pub reason: GraphError,
}

/// Outcome of applying records to a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the graph.
    pub applied: usize,
    /// Records rejected by the graph, in file order.
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    /// Whether every record was applied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn record(&mut self, line: usize, outcome: Result<(), GraphError>) {
        match outcome {
            Ok(()) => self.applied += 1,
            Err(reason) => {
                warn!("skipping line {line}: {reason}");
                self.skipped.push(SkippedRecord { line, reason });
            }
        }
    }
}

/// Errors raised while loading a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file opened but could not be read as UTF-8 text.
    #[error("failed to read {path}")]
    Read {
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line was malformed.
    #[error("invalid record in {path}")]
    Parse {
        /// Requested path.
        path: Utf8PathBuf,
        /// The first malformed line.
        #[source]
        source: ParseError,
    },
}

/// Add parsed cities to `graph`, skipping duplicates.
pub fn apply_cities(graph: &mut CityGraph, records: Vec<CityRecord>) -> LoadReport {
    let mut report = LoadReport::default();
    for record in records {
        let outcome = graph.add_city(record.name, record.location).map(|_| ());
        report.record(record.line, outcome);
    }
    report
}

/// Add parsed routes to `graph`, skipping unknown cities and self loops.
///
/// A later route for the same pair overwrites the earlier one.
pub fn apply_routes(graph: &mut CityGraph, records: &[RouteRecord]) -> LoadReport {
    let mut report = LoadReport::default();
    for record in records {
        let outcome = graph.add_route(&record.from, &record.to, record.weight);
        report.record(record.line, outcome);
    }
    report
}

/// Read a city file and add its cities to `graph`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened, read or parsed; the
/// graph is unchanged in that case.
pub fn load_cities(graph: &mut CityGraph, path: &Utf8Path) -> Result<LoadReport, LoadError> {
    let text = read_text(path)?;
    let records = parse_cities(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let report = apply_cities(graph, records);
    info!(
        "loaded {} cities from {path} ({} skipped)",
        report.applied,
        report.skipped.len()
    );
    Ok(report)
}

/// Read a route file and add its routes to `graph`.
///
/// Cities must already be present; routes naming unknown cities are skipped.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be opened, read or parsed; the
/// graph is unchanged in that case.
pub fn load_routes(graph: &mut CityGraph, path: &Utf8Path) -> Result<LoadReport, LoadError> {
    let text = read_text(path)?;
    let records = parse_routes(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let report = apply_routes(graph, &records);
    info!(
        "loaded {} routes from {path} ({} skipped)",
        report.applied,
        report.skipped.len()
    );
    Ok(report)
}

fn read_text(path: &Utf8Path) -> Result<String, LoadError> {
    let mut file =
        fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}
