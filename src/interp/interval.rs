use log::{debug, warn};

use super::{Error, Interpolator};
use crate::{
    cfg::{Config, Policy},
    point::ReferencePoint,
};

/// Straight line through two reference points, y = slope * x + intercept
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalInterpolator {
    point1: ReferencePoint,
    point2: ReferencePoint,
    slope: f64,
    intercept: f64,
}

impl IntervalInterpolator {
    /// Builds new [IntervalInterpolator]. Identical abscissas
    /// are not rejected and lead to non finite evaluations.
    pub fn new(point1: ReferencePoint, point2: ReferencePoint) -> Self {
        if point1.x == point2.x {
            warn!("interval: both reference points share abscissa x={}", point1.x);
        }
        let slope = (point2.y - point1.y) / (point2.x - point1.x);
        let intercept = point1.y - slope * point1.x;
        debug!(
            "interval: {:?} -> {:?}, slope={} intercept={}",
            point1, point2, slope, intercept
        );
        Self {
            point1,
            point2,
            slope,
            intercept,
        }
    }
    /// Builds new [IntervalInterpolator], applying the [Config] policy.
    pub fn with_config(
        point1: ReferencePoint,
        point2: ReferencePoint,
        cfg: &Config,
    ) -> Result<Self, Error> {
        if cfg.policy == Policy::Strict && point1.x == point2.x {
            return Err(Error::DuplicateAbscissa(point1.x));
        }
        Ok(Self::new(point1, point2))
    }
    /// Reference points, in construction order
    pub fn points(&self) -> (ReferencePoint, ReferencePoint) {
        (self.point1, self.point2)
    }
    pub fn slope(&self) -> f64 {
        self.slope
    }
    /// y value at x = 0
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Interpolator for IntervalInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
