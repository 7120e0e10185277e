//! Piecewise-linear mapping between a `[0, 1]` slider and a radius
//!
//! Small radii need fine control while large radii only need to be
//! reachable, so the slider range is split into three linear segments of
//! increasing slope.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::scalar::clamp;
use crate::error::{ProximityError, Result};

/// One linear piece of a [`RadiusScale`]
///
/// The segment covers slider values from the previous segment's
/// `slider_max` (or 0 for the first segment) up to its own `slider_max`,
/// mapping them linearly onto `[radius_min, radius_max]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSegment {
    /// Slider value where this segment ends
    pub slider_max: f64,
    /// Radius at the start of the segment
    pub radius_min: f64,
    /// Radius at the end of the segment
    pub radius_max: f64,
}

impl ScaleSegment {
    /// Create a segment
    pub const fn new(slider_max: f64, radius_min: f64, radius_max: f64) -> Self {
        Self {
            slider_max,
            radius_min,
            radius_max,
        }
    }
}

/// Default segments: half the slider covers radii up to 500 pixels
const DEFAULT_SEGMENTS: [ScaleSegment; 3] = [
    ScaleSegment::new(0.5, 0.0, 500.0),
    ScaleSegment::new(0.75, 500.0, 1000.0),
    ScaleSegment::new(1.0, 1000.0, 4000.0),
];

/// A continuous, strictly increasing three-segment slider/radius mapping
///
/// # Example
///
/// ```rust
/// use rust_voronoi_proximity::RadiusScale;
///
/// let scale = RadiusScale::default();
/// assert_eq!(scale.slider_to_radius(0.5), 500.0);
/// assert_eq!(scale.radius_to_slider(1000.0), 0.75);
/// ```
///
/// Deserialization goes through [`RadiusScale::new`], so a scale read from
/// a file is validated like one built in code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[ScaleSegment; 3]", into = "[ScaleSegment; 3]")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    segments: [ScaleSegment; 3],
}

impl RadiusScale {
    /// Create a scale from three segments
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless every value is finite, slider maxima
    /// strictly increase and end at 1.0, each segment's radius range is
    /// increasing, and each segment starts at the radius where the
    /// previous one ends.
    pub fn new(segments: [ScaleSegment; 3]) -> Result<Self> {
        let mut prev_slider = 0.0;
        let mut prev_radius: Option<f64> = None;

        for (i, seg) in segments.iter().enumerate() {
            if !(seg.slider_max.is_finite() && seg.radius_min.is_finite() && seg.radius_max.is_finite()) {
                return Err(ProximityError::InvalidConfig(format!(
                    "radius scale segment {} has non-finite values",
                    i
                )));
            }
            if seg.slider_max <= prev_slider {
                return Err(ProximityError::InvalidConfig(format!(
                    "radius scale segment {} ends at slider {} which does not exceed {}",
                    i, seg.slider_max, prev_slider
                )));
            }
            if seg.radius_max <= seg.radius_min {
                return Err(ProximityError::InvalidConfig(format!(
                    "radius scale segment {} is not increasing ({} -> {})",
                    i, seg.radius_min, seg.radius_max
                )));
            }
            if let Some(prev) = prev_radius {
                if seg.radius_min != prev {
                    return Err(ProximityError::InvalidConfig(format!(
                        "radius scale segment {} starts at {} but previous segment ends at {}",
                        i, seg.radius_min, prev
                    )));
                }
            }
            prev_slider = seg.slider_max;
            prev_radius = Some(seg.radius_max);
        }

        if prev_slider != 1.0 {
            return Err(ProximityError::InvalidConfig(format!(
                "radius scale must end at slider 1.0 (got {})",
                prev_slider
            )));
        }

        Ok(Self { segments })
    }

    /// The three segments, in slider order
    #[inline]
    pub fn segments(&self) -> &[ScaleSegment; 3] {
        &self.segments
    }

    /// Radius at slider 0
    #[inline]
    pub fn min_radius(&self) -> f64 {
        self.segments[0].radius_min
    }

    /// Radius at slider 1
    #[inline]
    pub fn max_radius(&self) -> f64 {
        self.segments[2].radius_max
    }

    /// Map a slider value to a radius; `t` is clamped to `[0, 1]`
    pub fn slider_to_radius(&self, t: f64) -> f64 {
        let t = clamp(t, 0.0, 1.0);
        let mut slider_min = 0.0;
        for seg in &self.segments {
            if t <= seg.slider_max {
                let f = (t - slider_min) / (seg.slider_max - slider_min);
                return seg.radius_min + f * (seg.radius_max - seg.radius_min);
            }
            slider_min = seg.slider_max;
        }
        self.max_radius()
    }

    /// Map a radius back to its slider value; `radius` is clamped to the
    /// scale's range
    pub fn radius_to_slider(&self, radius: f64) -> f64 {
        let r = clamp(radius, self.min_radius(), self.max_radius());
        let mut slider_min = 0.0;
        for seg in &self.segments {
            if r <= seg.radius_max {
                let f = (r - seg.radius_min) / (seg.radius_max - seg.radius_min);
                return slider_min + f * (seg.slider_max - slider_min);
            }
            slider_min = seg.slider_max;
        }
        1.0
    }
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl TryFrom<[ScaleSegment; 3]> for RadiusScale {
    type Error = ProximityError;

    fn try_from(segments: [ScaleSegment; 3]) -> Result<Self> {
        RadiusScale::new(segments)
    }
}

impl From<RadiusScale> for [ScaleSegment; 3] {
    fn from(scale: RadiusScale) -> Self {
        scale.segments
    }
}

/// [`RadiusScale::slider_to_radius`] on the default scale
pub fn slider_to_radius(t: f64) -> f64 {
    RadiusScale::default().slider_to_radius(t)
}

/// [`RadiusScale::radius_to_slider`] on the default scale
pub fn radius_to_slider(radius: f64) -> f64 {
    RadiusScale::default().radius_to_slider(radius)
}
