//! Weights attached to a route between two cities.

use thiserror::Error;

use crate::Metric;

/// The three independent weights of a route.
///
/// Values are finite and non-negative. A missing route is modelled as the
/// absence of an `EdgeWeight`, so a zero weight is a real, free edge.
///
/// # Examples
/// ```
/// use citytour_core::{EdgeWeight, Metric};
///
/// # fn main() -> Result<(), citytour_core::EdgeWeightError> {
/// let weight = EdgeWeight::new(12.0, 300.0, 0.5)?;
/// assert_eq!(weight.get(Metric::Cost), 300.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeWeight {
    distance: f64,
    cost: f64,
    time: f64,
}

/// Errors returned by [`EdgeWeight::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EdgeWeightError {
    /// A weight was below zero.
    #[error("{metric} weight must be non-negative, got {value}")]
    Negative {
        /// Metric holding the bad value.
        metric: Metric,
        /// The rejected value.
        value: f64,
    },
    /// A weight was NaN or infinite.
    #[error("{metric} weight must be finite")]
    NonFinite {
        /// Metric holding the bad value.
        metric: Metric,
    },
}

impl EdgeWeight {
    /// Validate and construct an [`EdgeWeight`].
    ///
    /// # Errors
    /// Returns [`EdgeWeightError`] naming the first metric that is negative or
    /// not finite, checked in distance, cost, time order.
    pub fn new(distance: f64, cost: f64, time: f64) -> Result<Self, EdgeWeightError> {
        for (metric, value) in [
            (Metric::Distance, distance),
            (Metric::Cost, cost),
            (Metric::Time, time),
        ] {
            if !value.is_finite() {
                return Err(EdgeWeightError::NonFinite { metric });
            }
            if value < 0.0 {
                return Err(EdgeWeightError::Negative { metric, value });
            }
        }
        Ok(Self {
            distance,
            cost,
            time,
        })
    }

    /// Return the weight for `metric`.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Distance => self.distance,
            Metric::Cost => self.cost,
            Metric::Time => self.time,
        }
    }

    /// Physical distance.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Monetary cost.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Travel time.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_zero_weights() {
        let weight = EdgeWeight::new(0.0, 0.0, 0.0).expect("zero is valid");
        assert_eq!(weight.get(Metric::Time).to_bits(), 0.0_f64.to_bits());
    }

    #[rstest]
    #[case(-1.0, 0.0, 0.0, Metric::Distance)]
    #[case(0.0, -0.5, 0.0, Metric::Cost)]
    #[case(0.0, 0.0, -2.0, Metric::Time)]
    fn rejects_negative_weights(
        #[case] distance: f64,
        #[case] cost: f64,
        #[case] time: f64,
        #[case] expected: Metric,
    ) {
        let err = EdgeWeight::new(distance, cost, time).expect_err("negative weight");
        assert!(matches!(err, EdgeWeightError::Negative { metric, .. } if metric == expected));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_non_finite_weights(#[case] value: f64) {
        let err = EdgeWeight::new(1.0, value, 1.0).expect_err("non-finite weight");
        assert_eq!(
            err,
            EdgeWeightError::NonFinite {
                metric: Metric::Cost
            }
        );
    }

    #[rstest]
    fn accessors_match_metric_lookup() {
        let weight = EdgeWeight::new(1.5, 2.5, 3.5).expect("valid weight");
        assert_eq!(weight.get(Metric::Distance), weight.distance());
        assert_eq!(weight.get(Metric::Cost), weight.cost());
        assert_eq!(weight.get(Metric::Time), weight.time());
    }
}
