//! Proximity graph filters
//!
//! Gabriel and relative-neighbourhood graphs are subgraphs of the Delaunay
//! triangulation, so both filters take Delaunay edges as candidates and
//! test each against every other point. Boundary ties are resolved toward
//! keeping the edge.

use std::collections::HashSet;

use glam::DVec2;

use crate::geometry::{approx_equal, distance, distance_squared};
use crate::point::Edge;

/// Join every point to its nearest neighbour
///
/// Ties go to the lowest index. A mutual nearest pair yields one edge.
/// Fewer than two points give no edges.
pub fn nearest_neighbor_edges(positions: &[DVec2]) -> Vec<Edge> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for (i, &p) in positions.iter().enumerate() {
        let mut best_dist = f64::INFINITY;
        let mut best: Option<usize> = None;
        for (j, &q) in positions.iter().enumerate() {
            if j == i {
                continue;
            }
            let d = distance_squared(p, q);
            if d < best_dist {
                best_dist = d;
                best = Some(j);
            }
        }

        if let Some(j) = best {
            let edge = Edge::new(i, j);
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }

    edges
}

/// Keep candidate edges whose diametral circle holds no other point
///
/// A point within [`EPSILON`](crate::geometry::EPSILON) of the circle counts as outside.
pub fn gabriel_edges(positions: &[DVec2], candidates: &[Edge]) -> Vec<Edge> {
    candidates
        .iter()
        .copied()
        .filter(|edge| is_gabriel_edge(positions, *edge))
        .collect()
}

/// Keep candidate edges with no point strictly closer to both endpoints
/// than the endpoints are to each other
///
/// A point counts only if it beats the edge length by more than
/// [`EPSILON`](crate::geometry::EPSILON).
pub fn relative_neighborhood_edges(positions: &[DVec2], candidates: &[Edge]) -> Vec<Edge> {
    candidates
        .iter()
        .copied()
        .filter(|edge| is_relative_neighbor_edge(positions, *edge))
        .collect()
}

/// `value >= bound`, with values within [`EPSILON`](crate::geometry::EPSILON) of the bound accepted
#[inline]
fn at_least(value: f64, bound: f64) -> bool {
    value >= bound || approx_equal(value, bound)
}

fn is_gabriel_edge(positions: &[DVec2], edge: Edge) -> bool {
    let (ia, ib) = edge.endpoints();
    let (Some(&a), Some(&b)) = (positions.get(ia), positions.get(ib)) else {
        return false;
    };

    let center = (a + b) * 0.5;
    let radius_sq = distance_squared(a, b) / 4.0;

    positions
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != ia && k != ib)
        .all(|(_, &p)| at_least(distance_squared(p, center), radius_sq))
}

fn is_relative_neighbor_edge(positions: &[DVec2], edge: Edge) -> bool {
    let (ia, ib) = edge.endpoints();
    let (Some(&a), Some(&b)) = (positions.get(ia), positions.get(ib)) else {
        return false;
    };

    let length = distance(a, b);

    positions
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != ia && k != ib)
        .all(|(_, &p)| at_least(distance(a, p).max(distance(b, p)), length))
}
