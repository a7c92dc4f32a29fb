pub mod interval;
pub mod polynomial;

pub use interval::IntervalInterpolator;
pub use polynomial::PolynomialInterpolator;

use itertools::Itertools;
use std::cmp::Ordering;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{cfg::Config, point::ReferencePoint};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("at least 2 reference points are required, got {0}")]
    NotEnoughPoints(usize),
    #[error("expecting exactly {expected} values, got {found}")]
    InvalidArity { expected: usize, found: usize },
    #[error("several reference points share abscissa x={0}")]
    DuplicateAbscissa(f64),
    #[error("unknown interpolation method \"{0}\"")]
    UnknownMethod(String),
    #[error("unknown degenerate geometry policy \"{0}\"")]
    UnknownPolicy(String),
    #[error("moving average window must be > 0")]
    InvalidWindow,
}

/// Maps x to y, given the reference points the implementor
/// was built from. Evaluation never mutates the implementor.
pub trait Interpolator {
    /// Interpolated (or extrapolated) y for given x
    fn evaluate(&self, x: f64) -> f64;
}

/// Interpolation strategy
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Lagrange polynomial through every reference point
    #[default]
    Polynomial,
    /// Straight line through exactly two reference points
    Interval,
}

impl std::str::FromStr for Method {
    type Err = Error;
    fn from_str(s: &str) -> Result<Method, Error> {
        let c = s.trim().to_lowercase();
        match c.as_str() {
            "polynomial" | "lagrange" => Ok(Method::Polynomial),
            "interval" | "linear" => Ok(Method::Interval),
            _ => Err(Error::UnknownMethod(c.to_string())),
        }
    }
}

/// Either strategy, selected at runtime by [Method]
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolation {
    Polynomial(PolynomialInterpolator),
    Interval(IntervalInterpolator),
}

impl Interpolation {
    /// Builds the interpolator described by [Method].
    /// [Method::Interval] requires exactly two reference points.
    pub fn new(method: Method, points: &[ReferencePoint], cfg: &Config) -> Result<Self, Error> {
        match method {
            Method::Polynomial => Ok(Self::Polynomial(PolynomialInterpolator::with_config(
                points, cfg,
            )?)),
            Method::Interval => match points {
                [p1, p2] => Ok(Self::Interval(IntervalInterpolator::with_config(
                    *p1, *p2, cfg,
                )?)),
                _ => Err(Error::InvalidArity {
                    expected: 2,
                    found: points.len(),
                }),
            },
        }
    }
    pub fn method(&self) -> Method {
        match self {
            Self::Polynomial(_) => Method::Polynomial,
            Self::Interval(_) => Method::Interval,
        }
    }
}

impl Interpolator for Interpolation {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Polynomial(interp) => interp.evaluate(x),
            Self::Interval(interp) => interp.evaluate(x),
        }
    }
}

/// Index of the rightmost point whose abscissa is <= x,
/// or None if x lies before every point.
/// `points` must be sorted by ascending abscissa; this is not verified.
pub fn lower_bound_index(x: f64, points: &[ReferencePoint]) -> Option<usize> {
    match points.iter().position(|p| p.x > x) {
        Some(i) => i.checked_sub(1),
        None => points.len().checked_sub(1),
    }
}

fn abscissa_order(lhs: &ReferencePoint, rhs: &ReferencePoint) -> Ordering {
    lhs.x.total_cmp(&rhs.x)
}

/// Sorts reference points in place, by ascending abscissa.
/// Points sharing an abscissa keep their relative order.
pub fn sort_points(points: &mut [ReferencePoint]) {
    points.sort_by(abscissa_order);
}

/// Returns a copy of the reference points, sorted by ascending abscissa.
pub fn sorted_copy(points: &[ReferencePoint]) -> Vec<ReferencePoint> {
    points.iter().copied().sorted_by(abscissa_order).collect()
}

/// Returns the first abscissa shared by two reference points, if any
pub(crate) fn duplicate_abscissa(points: &[ReferencePoint]) -> Option<f64> {
    points
        .iter()
        .tuple_combinations()
        .find_map(|(a, b)| if a.x == b.x { Some(a.x) } else { None })
}
