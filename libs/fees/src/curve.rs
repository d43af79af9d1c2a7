//! Piecewise-linear rate curves
//!
//! A [`Curve`] is an immutable ordered sequence of (cutoff, rate) points.
//! Between two cutoffs the rate varies linearly through the two endpoints;
//! below the first and above the last cutoff the curve extends flat. Curves
//! are validated once at construction (strictly increasing cutoffs), so the
//! integration path never has to re-check them per call, and a duplicate
//! cutoff can never reach the slope division.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use hubflow_types::{FixedPoint, MathError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error(
        "curve cutoffs must be strictly increasing: point {index} is not above its predecessor"
    )]
    NonMonotonicCutoffs { index: usize },

    #[error(transparent)]
    Math(#[from] MathError),
}

/// One point of a rate curve: the balance threshold at which the slope
/// changes, and the fee rate that applies exactly at that threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffPoint {
    pub cutoff: FixedPoint,
    pub rate: FixedPoint,
}

impl CutoffPoint {
    pub fn new(cutoff: FixedPoint, rate: FixedPoint) -> Self {
        Self { cutoff, rate }
    }
}

/// An immutable, validated piecewise-linear rate curve.
///
/// The empty curve is legal and behaves as a single flat zero-rate segment
/// over the whole balance range; callers that disallow it by policy must
/// enforce that themselves. Reconfiguration means constructing a new curve;
/// nothing mutates an existing one, so a `Curve` may be shared freely across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CutoffPoint>", into = "Vec<CutoffPoint>")]
pub struct Curve {
    points: Vec<CutoffPoint>,
}

impl Curve {
    /// Validate and freeze a sequence of cutoff points.
    pub fn new(points: Vec<CutoffPoint>) -> Result<Self, CurveError> {
        for index in 1..points.len() {
            if points[index].cutoff <= points[index - 1].cutoff {
                return Err(CurveError::NonMonotonicCutoffs { index });
            }
        }
        debug!(segments = points.len() + 1, "constructed balancing curve");
        Ok(Self { points })
    }

    /// Build a curve from decimal-string pairs, the shape configuration
    /// sources supply, e.g. `[("100", "0.01"), ("200", "0.02")]`.
    pub fn from_decimal_strs(pairs: &[(&str, &str)]) -> Result<Self, CurveError> {
        let points = pairs
            .iter()
            .map(|(cutoff, rate)| {
                Ok(CutoffPoint::new(
                    FixedPoint::from_decimal_str(cutoff)?,
                    FixedPoint::from_decimal_str(rate)?,
                ))
            })
            .collect::<Result<Vec<_>, MathError>>()?;
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> CutoffPoint {
        self.points[index]
    }

    pub fn points(&self) -> &[CutoffPoint] {
        &self.points
    }
}

impl TryFrom<Vec<CutoffPoint>> for Curve {
    type Error = CurveError;

    fn try_from(points: Vec<CutoffPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Curve> for Vec<CutoffPoint> {
    fn from(curve: Curve) -> Self {
        curve.points
    }
}
