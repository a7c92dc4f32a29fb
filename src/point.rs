use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::interp::Error;

/// Known (x, y) pair used to fit an interpolation function.
/// Units are whatever the application uses, for example
/// raw sensor readings (x) against calibrated values (y).
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferencePoint {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

impl ReferencePoint {
    /// Builds new [ReferencePoint]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Builds Self from a raw `[x, y]` slice.
    /// Any other length is rejected.
    pub fn from_slice(xy: &[f64]) -> Result<Self, Error> {
        match xy {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(Error::InvalidArity {
                expected: 2,
                found: xy.len(),
            }),
        }
    }
    /// Returns Self as a 2D vector
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for ReferencePoint {
    fn from(xy: (f64, f64)) -> Self {
        Self::new(xy.0, xy.1)
    }
}

impl From<Vector2<f64>> for ReferencePoint {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<ReferencePoint> for Vector2<f64> {
    fn from(p: ReferencePoint) -> Self {
        p.to_vector()
    }
}

#[cfg(test)]
mod test {
    use super::ReferencePoint;
    use crate::interp::Error;
    use nalgebra::Vector2;

    #[test]
    fn conversions() {
        let p = ReferencePoint::new(1.5, -2.0);
        assert_eq!(ReferencePoint::from((1.5, -2.0)), p);
        assert_eq!(ReferencePoint::from(Vector2::new(1.5, -2.0)), p);
        let v: Vector2<f64> = p.into();
        assert_eq!(v, Vector2::new(1.5, -2.0));
    }
    #[test]
    fn from_slice() {
        assert_eq!(
            ReferencePoint::from_slice(&[3.0, 4.0]),
            Ok(ReferencePoint::new(3.0, 4.0))
        );
        for raw in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            assert_eq!(
                ReferencePoint::from_slice(raw),
                Err(Error::InvalidArity {
                    expected: 2,
                    found: raw.len()
                }),
                "{:?} should have been rejected",
                raw
            );
        }
    }
}
