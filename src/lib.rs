#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod filter;
mod interp;
mod point;

// pub export
pub use interp::Error;


// prelude
pub mod prelude {
    pub use crate::cfg::{Config, Policy};
    pub use crate::filter::{Filter, MovingAverage};
    pub use crate::interp::{
        lower_bound_index, sort_points, sorted_copy, Interpolation, Interpolator,
        IntervalInterpolator, Method, PolynomialInterpolator,
    };
    pub use crate::point::ReferencePoint;
    // re-export
    pub use nalgebra::Vector2;
}
