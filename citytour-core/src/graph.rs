//! Cities and the symmetric route matrix connecting them.
//!
//! [`CityGraph`] stores cities in insertion order and keeps a square matrix of
//! optional [`EdgeWeight`]s indexed by city position. Indices are stable: a
//! city keeps the index it was given for the lifetime of the graph.

use std::collections::HashMap;

use geo::Coord;
use thiserror::Error;

use crate::{City, EdgeWeight, Metric};

/// Position of a city within a [`CityGraph`].
pub type CityIndex = usize;

/// Errors returned when mutating a [`CityGraph`].
///
/// A failed mutation never changes the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A city with this name already exists.
    #[error("city '{name}' already exists")]
    DuplicateCity {
        /// The rejected name.
        name: String,
    },
    /// A route referenced a city that has not been added.
    #[error("city '{name}' not found")]
    CityNotFound {
        /// The unknown name.
        name: String,
    },
    /// A route tried to connect a city to itself.
    #[error("cannot add a route from '{name}' to itself")]
    SelfLoopRoute {
        /// The city named at both ends.
        name: String,
    },
}

/// Cities plus a symmetric matrix of route weights.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use citytour_core::{CityGraph, EdgeWeight, Metric};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut graph = CityGraph::new();
/// let a = graph.add_city("A", Coord { x: 0.0, y: 0.0 })?;
/// let b = graph.add_city("B", Coord { x: 1.0, y: 0.0 })?;
/// graph.add_route("A", "B", EdgeWeight::new(4.0, 10.0, 0.5)?)?;
///
/// assert_eq!(graph.weight_between(a, b, Metric::Distance), Some(4.0));
/// assert_eq!(graph.weight_between(b, a, Metric::Distance), Some(4.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityGraph {
    cities: Vec<City>,
    by_name: HashMap<String, CityIndex>,
    matrix: Vec<Vec<Option<EdgeWeight>>>,
}

impl CityGraph {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a city and grow the matrix by one absent row and column.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateCity`] when `name` is already present.
    pub fn add_city(
        &mut self,
        name: impl Into<String>,
        location: Coord<f64>,
    ) -> Result<CityIndex, GraphError> {
        let owned = name.into();
        if self.by_name.contains_key(&owned) {
            return Err(GraphError::DuplicateCity { name: owned });
        }

        let index = self.cities.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; index + 1]);
        self.by_name.insert(owned.clone(), index);
        self.cities.push(City::new(owned, location));
        Ok(index)
    }

    /// Set the weight between two named cities in both directions.
    ///
    /// Any previous weight for the pair is overwritten.
    ///
    /// # Errors
    /// Returns [`GraphError::CityNotFound`] when either name is unknown
    /// (`from` is reported first) and [`GraphError::SelfLoopRoute`] when both
    /// names match.
    pub fn add_route(
        &mut self,
        from: &str,
        to: &str,
        weight: EdgeWeight,
    ) -> Result<(), GraphError> {
        let from_index = self.require_index(from)?;
        let to_index = self.require_index(to)?;
        if from_index == to_index {
            return Err(GraphError::SelfLoopRoute {
                name: from.to_owned(),
            });
        }

        self.set_cell(from_index, to_index, weight);
        self.set_cell(to_index, from_index, weight);
        Ok(())
    }

    /// Look up a city index by exact name.
    #[must_use]
    pub fn find_index(&self, name: &str) -> Option<CityIndex> {
        self.by_name.get(name).copied()
    }

    /// Return the city at `index`.
    #[must_use]
    pub fn city(&self, index: CityIndex) -> Option<&City> {
        self.cities.get(index)
    }

    /// Return the name of the city at `index`.
    #[must_use]
    pub fn name_of(&self, index: CityIndex) -> Option<&str> {
        self.city(index).map(City::name)
    }

    /// Return the route weights between two cities, if a route exists.
    #[must_use]
    pub fn edge(&self, from: CityIndex, to: CityIndex) -> Option<EdgeWeight> {
        self.matrix.get(from)?.get(to).copied().flatten()
    }

    /// Return one metric of the route between two cities, if a route exists.
    #[must_use]
    pub fn weight_between(&self, from: CityIndex, to: CityIndex, metric: Metric) -> Option<f64> {
        self.edge(from, to).map(|weight| weight.get(metric))
    }

    /// Cities in insertion order; position equals index.
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Cities ordered by name for presentation.
    ///
    /// The sort is stable and leaves indices untouched.
    #[must_use]
    pub fn cities_sorted_by_name(&self) -> Vec<&City> {
        let mut sorted: Vec<&City> = self.cities.iter().collect();
        sorted.sort_by(|lhs, rhs| lhs.name().cmp(rhs.name()));
        sorted
    }

    /// Every route once, as `(i, j, weight)` with `i < j`.
    pub fn routes(&self) -> impl Iterator<Item = (CityIndex, CityIndex, EdgeWeight)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter_map(move |(j, cell)| cell.map(|weight| (i, j, weight)))
        })
    }

    /// Number of distinct routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes().count()
    }

    /// Number of cities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the graph has no cities.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    fn require_index(&self, name: &str) -> Result<CityIndex, GraphError> {
        self.find_index(name).ok_or_else(|| GraphError::CityNotFound {
            name: name.to_owned(),
        })
    }

    fn set_cell(&mut self, from: CityIndex, to: CityIndex, weight: EdgeWeight) {
        if let Some(cell) = self.matrix.get_mut(from).and_then(|row| row.get_mut(to)) {
            *cell = Some(weight);
        }
    }
}
