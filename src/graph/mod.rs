//! Graph and complex builders over a point sequence
//!
//! Every builder is a pure function of the positions (and, where needed, a
//! Delaunay triangulation or candidate edge list). Results reference points
//! by sequence index.

mod alpha;
mod mst;
mod proximity;

pub use alpha::{compute_alpha_data, AlphaData};
pub use mst::minimum_spanning_tree_edges;
pub use proximity::{gabriel_edges, nearest_neighbor_edges, relative_neighborhood_edges};

use glam::DVec2;

use crate::point::Edge;

/// Sum of edge lengths
pub fn total_length(edges: &[Edge], positions: &[DVec2]) -> f64 {
    edges.iter().map(|e| e.length(positions)).sum()
}
