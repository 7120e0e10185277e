//! Euclidean minimum spanning tree (Prim's algorithm)
//!
//! Dense O(n²) variant with a linear minimum scan instead of a priority
//! queue, which is the better fit for a complete graph of a few hundred
//! points.

use glam::DVec2;

use crate::geometry::distance_squared;
use crate::point::Edge;

/// Minimum spanning tree over the complete Euclidean graph
///
/// Grows the tree from point 0; ties pick the lowest index. Returns `n − 1`
/// edges for `n ≥ 2` points, or fewer only if some points are unreachable
/// (non-finite coordinates).
pub fn minimum_spanning_tree_edges(positions: &[DVec2]) -> Vec<Edge> {
    let n = positions.len();
    if n < 2 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut distances = vec![f64::INFINITY; n];
    let mut parent = vec![0usize; n];

    visited[0] = true;
    for j in 1..n {
        distances[j] = distance_squared(positions[0], positions[j]);
    }

    let mut edges = Vec::with_capacity(n - 1);
    for _ in 1..n {
        let mut best = f64::INFINITY;
        let mut next: Option<usize> = None;
        for j in 0..n {
            if !visited[j] && distances[j] < best {
                best = distances[j];
                next = Some(j);
            }
        }

        let Some(u) = next else {
            break;
        };

        visited[u] = true;
        edges.push(Edge::new(parent[u], u));

        let pu = positions[u];
        for j in 0..n {
            if visited[j] {
                continue;
            }
            let d = distance_squared(pu, positions[j]);
            if d < distances[j] {
                distances[j] = d;
                parent[j] = u;
            }
        }
    }

    edges
}
