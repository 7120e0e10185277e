//! Alpha complex and alpha shape extraction
//!
//! A Delaunay triangle belongs to the alpha complex when its circumradius
//! is at most alpha. The alpha shape is the part of the complex's edge set
//! that bounds it: edges used by exactly one qualifying triangle.

use std::collections::HashMap;

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::circumradius;
use crate::point::{triangle_edges, Edge, Triangle};
use crate::triangulation::{is_valid_triangle, Triangulation};

/// Triangles and edges of an alpha complex
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlphaData {
    /// Qualifying triangles, vertex order as in the triangulation
    pub triangles: Vec<Triangle>,
    /// Every edge of a qualifying triangle, each listed once
    pub all_edges: Vec<Edge>,
    /// Edges of exactly one qualifying triangle (the alpha shape)
    pub boundary_edges: Vec<Edge>,
}

impl AlphaData {
    /// True when no triangle qualified
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Filter a triangulation by circumradius
///
/// Triangles referencing missing points or repeating an index are skipped.
/// Edges are listed in the order they are first met while walking the
/// qualifying triangles.
pub fn compute_alpha_data(positions: &[DVec2], triangulation: &Triangulation, alpha: f64) -> AlphaData {
    let mut triangles = Vec::new();

    // Edge -> slot in `counted`, to keep first-seen order
    let mut slots: HashMap<Edge, usize> = HashMap::new();
    let mut counted: Vec<(Edge, usize)> = Vec::new();

    for t in triangulation.triangles() {
        if !is_valid_triangle(&t, positions.len()) {
            tracing::trace!(triangle = ?t, "skipping malformed triangle");
            continue;
        }

        let r = circumradius(positions[t[0]], positions[t[1]], positions[t[2]]);
        if !(r.is_finite() && r <= alpha) {
            continue;
        }

        triangles.push(t);
        for edge in triangle_edges(&t) {
            match slots.get(&edge) {
                Some(&slot) => counted[slot].1 += 1,
                None => {
                    slots.insert(edge, counted.len());
                    counted.push((edge, 1));
                }
            }
        }
    }

    let all_edges = counted.iter().map(|&(edge, _)| edge).collect();
    let boundary_edges = counted
        .iter()
        .filter(|&&(_, count)| count == 1)
        .map(|&(edge, _)| edge)
        .collect();

    AlphaData {
        triangles,
        all_edges,
        boundary_edges,
    }
}
