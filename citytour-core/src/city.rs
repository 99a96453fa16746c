use geo::Coord;

/// A named point on the map.
///
/// The coordinate is metadata for display; tour costs come from explicit
/// route weights, never from geometry.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use citytour_core::City;
///
/// let city = City::new("Pune", Coord { x: 73.8, y: 18.5 });
/// assert_eq!(city.name(), "Pune");
/// assert_eq!(city.location().x, 73.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    name: String,
    location: Coord<f64>,
}

impl City {
    /// Construct a city from its name and coordinate.
    pub fn new(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Unique, case-sensitive name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display coordinate.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }
}
