//! Discrete Voronoi diagram by brute-force pixel ownership
//!
//! Every pixel of the clipping rectangle is assigned to the nearest seed by
//! scanning all seeds, O(width · height · n). It serves as a reference
//! rendering of the Voronoi partition that needs no triangulation.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Bounds;
use crate::geometry::distance_squared;

/// All pixels owned by one seed point
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCell {
    /// Sequence index of the owning point
    pub point: usize,
    /// Owned pixels as `[x, y]`, in row-major order
    pub pixels: Vec<[u32; 2]>,
}

impl PixelCell {
    /// Number of owned pixels
    #[inline]
    pub fn area(&self) -> usize {
        self.pixels.len()
    }
}

/// Assign every pixel to its nearest seed
///
/// The grid is `floor(width) × floor(height)` pixels, each sampled at its
/// centre. Ties go to the lowest seed index. Only seeds that own at least
/// one pixel are returned, ordered by seed index.
pub fn rasterize_cells(positions: &[DVec2], bounds: Bounds) -> Vec<PixelCell> {
    if positions.is_empty() {
        return Vec::new();
    }

    let width = pixel_extent(bounds.width);
    let height = pixel_extent(bounds.height);

    let mut groups: Vec<Vec<[u32; 2]>> = vec![Vec::new(); positions.len()];
    for y in 0..height {
        for x in 0..width {
            let center = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
            if let Some(owner) = nearest_seed(positions, center) {
                groups[owner].push([x, y]);
            }
        }
    }

    groups
        .into_iter()
        .enumerate()
        .filter(|(_, pixels)| !pixels.is_empty())
        .map(|(point, pixels)| PixelCell { point, pixels })
        .collect()
}

/// Index of the seed nearest to `p`, lowest index on ties
fn nearest_seed(positions: &[DVec2], p: DVec2) -> Option<usize> {
    let mut best = f64::INFINITY;
    let mut owner = None;
    for (i, &seed) in positions.iter().enumerate() {
        let d = distance_squared(seed, p);
        if d < best {
            best = d;
            owner = Some(i);
        }
    }
    owner
}

fn pixel_extent(side: f64) -> u32 {
    if side.is_finite() && side > 0.0 {
        side.floor().min(u32::MAX as f64) as u32
    } else {
        0
    }
}
