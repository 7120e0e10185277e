//! Computation Configuration and Builder
//!
//! This module provides the inputs that select and parameterize one
//! derived-structure computation: the clipping rectangle, the alpha radius
//! and the graph mode.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ProximityError, Result};

/// The derived structure to compute
///
/// Exactly one mode is active per computation and it fully determines which
/// builders run. Names follow the kebab-case form used by callers
/// (`"alpha-shape"`, `"voronoi-bruteforce"`, ...).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphMode {
    /// Voronoi cell polygons only
    Voronoi,
    /// Per-pixel nearest-seed raster
    VoronoiBruteforce,
    /// Boundary edges of the alpha complex
    AlphaShape,
    /// All edges and triangles of the alpha complex
    AlphaComplex,
    /// Each point joined to its nearest neighbour
    NnCrust,
    /// Gabriel graph
    Gabriel,
    /// Relative neighbourhood graph
    Rng,
    /// Euclidean minimum spanning tree
    #[default]
    Mst,
}

impl GraphMode {
    /// Every mode, in declaration order
    pub const ALL: [GraphMode; 8] = [
        GraphMode::Voronoi,
        GraphMode::VoronoiBruteforce,
        GraphMode::AlphaShape,
        GraphMode::AlphaComplex,
        GraphMode::NnCrust,
        GraphMode::Gabriel,
        GraphMode::Rng,
        GraphMode::Mst,
    ];

    /// Canonical name of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            GraphMode::Voronoi => "voronoi",
            GraphMode::VoronoiBruteforce => "voronoi-bruteforce",
            GraphMode::AlphaShape => "alpha-shape",
            GraphMode::AlphaComplex => "alpha-complex",
            GraphMode::NnCrust => "nn-crust",
            GraphMode::Gabriel => "gabriel",
            GraphMode::Rng => "rng",
            GraphMode::Mst => "mst",
        }
    }

    /// True for the modes that read the alpha radius
    #[inline]
    pub fn uses_alpha(self) -> bool {
        matches!(self, GraphMode::AlphaShape | GraphMode::AlphaComplex)
    }
}

impl fmt::Display for GraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphMode {
    type Err = ProximityError;

    /// Parse a mode name
    ///
    /// Unknown names are an error; there is no fallback mode.
    fn from_str(s: &str) -> Result<Self> {
        GraphMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ProximityError::UnknownMode(s.to_string()))
    }
}

/// Clipping rectangle `[0, width] × [0, height]`
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width of the rectangle
    pub width: f64,
    /// Height of the rectangle
    pub height: f64,
}

impl Bounds {
    /// Create bounds without validation
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when `p` lies in the closed rectangle `[0, width] × [0, height]`
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Validate that both sides are finite and positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for zero, negative or non-finite sides
    pub fn validated(self) -> Result<Self> {
        if !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ProximityError::InvalidConfig(format!(
                "bounds must be finite and positive (got {} x {})",
                self.width, self.height
            )));
        }
        Ok(self)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(800.0, 600.0)
    }
}

/// Configuration for one derived-structure computation
///
/// Identical configurations over identical points always produce identical
/// output, so a config (plus the points) is a complete cache key.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_proximity::*;
///
/// let config = DeriveConfigBuilder::new()
///     .bounds(Bounds::new(640.0, 480.0))
///     .unwrap()
///     .alpha(75.0)
///     .unwrap()
///     .mode(GraphMode::AlphaShape)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode, GraphMode::AlphaShape);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeriveConfig {
    /// Rectangle the Voronoi cells (and the raster) are clipped to
    pub bounds: Bounds,

    /// Alpha radius, in the same units as point coordinates
    ///
    /// Only alpha-shape and alpha-complex modes read it. A triangle belongs
    /// to the alpha complex iff its circumradius is at most `alpha`.
    pub alpha: f64,

    /// Which structure to compute
    pub mode: GraphMode,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            alpha: DEFAULT_ALPHA,
            mode: GraphMode::default(),
        }
    }
}

const DEFAULT_ALPHA: f64 = 50.0;

/// Builder for creating DeriveConfig with validation
///
/// Defaults:
/// - bounds: 800 × 600
/// - alpha: 50.0
/// - mode: `Mst`
#[derive(Debug, Clone)]
pub struct DeriveConfigBuilder {
    bounds: Bounds,
    alpha: f64,
    mode: GraphMode,
}

impl DeriveConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            alpha: DEFAULT_ALPHA,
            mode: GraphMode::default(),
        }
    }

    /// Set the clipping rectangle
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either side is not finite and positive
    pub fn bounds(mut self, bounds: Bounds) -> Result<Self> {
        self.bounds = bounds.validated()?;
        Ok(self)
    }

    /// Set the alpha radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if alpha is negative or NaN. Infinity is
    /// allowed and admits every non-degenerate triangle.
    pub fn alpha(mut self, alpha: f64) -> Result<Self> {
        if alpha.is_nan() || alpha < 0.0 {
            return Err(ProximityError::InvalidConfig(format!(
                "alpha must be >= 0 (got {})",
                alpha
            )));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Set the graph mode
    pub fn mode(mut self, mode: GraphMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DeriveConfig> {
        Ok(DeriveConfig {
            bounds: self.bounds.validated()?,
            alpha: self.alpha,
            mode: self.mode,
        })
    }
}

impl Default for DeriveConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
