//! Line-oriented parsing for city and route files.
//!
//! Both formats hold one whitespace-separated record per line. Blank lines
//! and lines whose first non-space character is `#` are skipped. Parsing is
//! all-or-nothing: the first malformed line aborts with its 1-based number.

use citytour_core::{EdgeWeight, EdgeWeightError};
use geo::Coord;
use thiserror::Error;

/// A parsed `name x y` line.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// 1-based source line.
    pub line: usize,
    /// City name; a single whitespace-free token.
    pub name: String,
    /// Planar coordinates.
    pub location: Coord<f64>,
}

/// A parsed `from to distance cost time` line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// 1-based source line.
    pub line: usize,
    /// Name of one endpoint.
    pub from: String,
    /// Name of the other endpoint.
    pub to: String,
    /// Validated weights.
    pub weight: EdgeWeight,
}

/// A malformed line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based source line.
    pub line: usize,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

/// Reasons a line fails to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The line had too few or too many fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields the format requires.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// A numeric field did not hold a finite number.
    #[error("{field} is not a finite number: '{value}'")]
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// The weights parsed but were rejected.
    #[error(transparent)]
    InvalidWeight(#[from] EdgeWeightError),
}

/// Parse a whole city file.
///
/// # Examples
/// ```
/// use citytour_data::parse_cities;
///
/// let records = parse_cities("# name x y\nDelhi 77.2 28.6\n\nAgra 78.0 27.2\n")?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].line, 4);
/// # Ok::<(), citytour_data::ParseError>(())
/// ```
///
/// # Errors
/// Returns [`ParseError`] for the first malformed line.
pub fn parse_cities(text: &str) -> Result<Vec<CityRecord>, ParseError> {
    parse_lines(text, parse_city_line)
}

/// Parse a whole route file.
///
/// # Errors
/// Returns [`ParseError`] for the first malformed line, including weights
/// that are negative or not finite.
pub fn parse_routes(text: &str) -> Result<Vec<RouteRecord>, ParseError> {
    parse_lines(text, parse_route_line)
}

/// Parse one city line; `Ok(None)` for blank and comment lines.
///
/// # Errors
/// Returns [`ParseError`] when the field count or coordinates are wrong.
pub fn parse_city_line(line: usize, text: &str) -> Result<Option<CityRecord>, ParseError> {
    let Some([name, x, y]) = split_fields(line, text)? else {
        return Ok(None);
    };
    let location = Coord {
        x: parse_number(line, "x", x)?,
        y: parse_number(line, "y", y)?,
    };
    Ok(Some(CityRecord {
        line,
        name: name.to_owned(),
        location,
    }))
}

/// Parse one route line; `Ok(None)` for blank and comment lines.
///
/// # Errors
/// Returns [`ParseError`] when the field count or any weight is wrong.
pub fn parse_route_line(line: usize, text: &str) -> Result<Option<RouteRecord>, ParseError> {
    let Some([from, to, distance, cost, time]) = split_fields(line, text)? else {
        return Ok(None);
    };
    let weight = EdgeWeight::new(
        parse_number(line, "distance", distance)?,
        parse_number(line, "cost", cost)?,
        parse_number(line, "time", time)?,
    )
    .map_err(|err| ParseError {
        line,
        kind: err.into(),
    })?;
    Ok(Some(RouteRecord {
        line,
        from: from.to_owned(),
        to: to.to_owned(),
        weight,
    }))
}

fn parse_lines<T>(
    text: &str,
    parse_line: fn(usize, &str) -> Result<Option<T>, ParseError>,
) -> Result<Vec<T>, ParseError> {
    text.lines()
        .zip(1..)
        .filter_map(|(content, line)| parse_line(line, content).transpose())
        .collect()
}

fn split_fields<const N: usize>(line: usize, text: &str) -> Result<Option<[&str; N]>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    <[&str; N]>::try_from(fields).map(Some).map_err(|found| ParseError {
        line,
        kind: ParseErrorKind::FieldCount {
            expected: N,
            found: found.len(),
        },
    })
}

fn parse_number(line: usize, field: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ParseError {
            line,
            kind: ParseErrorKind::InvalidNumber {
                field,
                value: value.to_owned(),
            },
        })
}
