//! Lagrange polynomial interpolation.
//!
//! The interpolating polynomial is expressed as the sum of one partial
//! polynomial per reference point p_i:
//!
//! L_i(x) = a_i * (x - x_0) * .. * (x - x_n), every x_j != x_i
//!
//! a_i = y_i / ((x_i - x_0) * .. * (x_i - x_n)), every x_j != x_i
//!
//! so L_i(x_i) = y_i and L_i(x_j) = 0 for every other reference point.
use log::{debug, warn};

use super::{duplicate_abscissa, Error, Interpolator};
use crate::{
    cfg::{Config, Policy},
    point::ReferencePoint,
};

/// One Lagrange basis term, in factored form
#[derive(Debug, Clone, PartialEq)]
struct PartialPolynomial {
    /// Leading coefficient
    a: f64,
    /// Abscissa of every other reference point
    zeros: Vec<f64>,
}

impl PartialPolynomial {
    /// Builds the partial polynomial attached to `points[target]`
    fn new(target: usize, points: &[ReferencePoint]) -> Self {
        let p_i = points[target];
        let mut a = p_i.y;
        let mut zeros = Vec::with_capacity(points.len() - 1);
        for (j, p_j) in points.iter().enumerate() {
            if j != target {
                a /= p_i.x - p_j.x;
                zeros.push(p_j.x);
            }
        }
        Self { a, zeros }
    }
    fn evaluate(&self, x: f64) -> f64 {
        self.zeros.iter().fold(self.a, |acc, zero| acc * (x - zero))
    }
}

/// Polynomial of degree n-1 that passes through n reference points.
/// Reference points do not need to be sorted, their abscissas should be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialInterpolator {
    partials: Vec<PartialPolynomial>,
}

impl PolynomialInterpolator {
    /// Builds new [PolynomialInterpolator] with default [Config].
    /// Coincident abscissas are not rejected: see [Policy::Permissive].
    pub fn new(points: &[ReferencePoint]) -> Result<Self, Error> {
        Self::with_config(points, &Config::default())
    }
    /// Builds new [PolynomialInterpolator], applying the [Config] policy.
    pub fn with_config(points: &[ReferencePoint], cfg: &Config) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(Error::NotEnoughPoints(points.len()));
        }
        if cfg.policy == Policy::Strict {
            if let Some(x) = duplicate_abscissa(points) {
                return Err(Error::DuplicateAbscissa(x));
            }
        }

        let partials = (0..points.len())
            .map(|i| PartialPolynomial::new(i, points))
            .collect::<Vec<_>>();

        if partials.iter().any(|p| !p.a.is_finite()) {
            warn!("lagrange: non finite coefficient, reference points share an abscissa");
        }
        debug!(
            "lagrange: {} reference points, degree {}",
            points.len(),
            points.len() - 1
        );
        Ok(Self { partials })
    }
    /// Number of partial polynomials (one per reference point)
    pub fn len(&self) -> usize {
        self.partials.len()
    }
    /// Always false: construction requires at least 2 reference points
    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }
    /// Degree of the interpolating polynomial
    pub fn degree(&self) -> usize {
        self.partials.len() - 1
    }
}

impl Interpolator for PolynomialInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        self.partials.iter().map(|p| p.evaluate(x)).sum()
    }
}
