//! Optimisation criteria for tour construction.
//!
//! Every route carries three independent weights; a [`Metric`] picks which one
//! a solver minimises.
//!
//! # Examples
//! ```
//! use citytour_core::Metric;
//!
//! assert_eq!(Metric::Cost.as_str(), "cost");
//! assert_eq!("TIME".parse::<Metric>(), Ok(Metric::Time));
//! ```

use thiserror::Error;

/// Which edge weight a solver minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Metric {
    /// Physical distance, in kilometres.
    Distance,
    /// Monetary cost, in rupees.
    Cost,
    /// Travel time, in hours.
    Time,
}

/// Error returned when text does not name a [`Metric`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric '{input}' (expected distance, cost or time)")]
pub struct ParseMetricError {
    /// The rejected input.
    pub input: String,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Self; 3] = [Self::Distance, Self::Cost, Self::Time];

    /// Return the metric as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use citytour_core::Metric;
    ///
    /// assert_eq!(Metric::Distance.as_str(), "distance");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Cost => "cost",
            Self::Time => "time",
        }
    }

    /// Unit label used when printing totals for this metric.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Distance => "km",
            Self::Cost => "rupees",
            Self::Time => "hours",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "cost" => Ok(Self::Cost),
            "time" => Ok(Self::Time),
            _ => Err(ParseMetricError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("distance", Metric::Distance)]
    #[case("Distance", Metric::Distance)]
    #[case("COST", Metric::Cost)]
    #[case(" time ", Metric::Time)]
    fn parsing_ignores_case(#[case] input: &str, #[case] expected: Metric) {
        assert_eq!(Metric::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Metric::from_str("speed").unwrap_err();
        assert_eq!(err.input, "speed");
        assert!(err.to_string().contains("unknown metric"));
    }

    #[rstest]
    fn display_matches_as_str() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string(), metric.as_str());
        }
    }
}
