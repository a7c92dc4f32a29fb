use std::collections::VecDeque;

use log::debug;

use crate::interp::{Error, Interpolator};

/// Stateful x -> y mapping, fed one sample at a time.
pub trait Filter {
    fn get(&mut self, x: f64) -> f64;
}

/// Every [Interpolator] is a stateless [Filter]
impl<I: Interpolator> Filter for I {
    fn get(&mut self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

/// Simple moving average over the last `size` samples, O(1) per sample.
/// The window starts filled with zeros, so the first outputs ramp up.
/// This is not time aware: output depends on the sampling rate.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    size: usize,
    total: f64,
    values: VecDeque<f64>,
}

impl MovingAverage {
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidWindow);
        }
        debug!("moving average: window of {} samples", size);
        Ok(Self {
            size,
            total: 0.0,
            values: std::iter::repeat(0.0).take(size).collect(),
        })
    }
    /// Window size
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Filter for MovingAverage {
    fn get(&mut self, x: f64) -> f64 {
        self.values.push_back(x);
        self.total += x;
        while self.values.len() > self.size {
            if let Some(oldest) = self.values.pop_front() {
                self.total -= oldest;
            }
        }
        self.total / self.values.len() as f64
    }
}

#[cfg(test)]
mod test {
    use super::{Filter, MovingAverage};
    use crate::{
        interp::{Error, IntervalInterpolator},
        point::ReferencePoint,
    };

    #[test]
    fn invalid_window() {
        assert_eq!(MovingAverage::new(0).unwrap_err(), Error::InvalidWindow);
    }
    #[test]
    fn moving_average() {
        let mut avg = MovingAverage::new(4).unwrap();
        assert_eq!(avg.size(), 4);
        for (x, expected) in [
            (4.0, 1.0),
            (4.0, 2.0),
            (4.0, 3.0),
            (4.0, 4.0),
            (8.0, 5.0),
            (0.0, 4.0),
            (0.0, 3.0),
        ] {
            assert_eq!(avg.get(x), expected, "x={}", x);
        }
    }
    #[test]
    fn single_sample_window() {
        let mut avg = MovingAverage::new(1).unwrap();
        for x in [1.0, -3.0, 7.5] {
            assert_eq!(avg.get(x), x);
        }
    }
    #[test]
    fn interpolator_as_filter() {
        let mut interp =
            IntervalInterpolator::new(ReferencePoint::new(0.0, 0.0), ReferencePoint::new(2.0, 4.0));
        assert_eq!(interp.get(1.0), 2.0);
        assert_eq!(interp.get(3.0), 6.0);
    }
}
