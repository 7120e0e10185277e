//! Numeric and geometric primitives
//!
//! Scalar helpers, distance and triangle measures, and the non-linear
//! slider-to-radius mapping used to drive the alpha radius.

mod predicates;
mod scalar;
mod scale;

pub use predicates::{circumradius, distance, distance_squared, is_point_in_polygon, triangle_area};
pub use scalar::{approx_equal, approx_zero, clamp, seed_hash, EPSILON};
pub use scale::{radius_to_slider, slider_to_radius, RadiusScale, ScaleSegment};
