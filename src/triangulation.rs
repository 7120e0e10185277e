//! Delaunay triangulation adapter
//!
//! The triangulation itself comes from the `delaunator` crate. Everything
//! downstream only sees the connectivity: a flat triangle index array and
//! the opposite half-edge of every triangle side.

use std::collections::HashSet;

use glam::DVec2;

use crate::point::{is_degenerate_triangle, Edge, Triangle};

/// Connectivity of a Delaunay triangulation
///
/// Half-edge `e` runs from `triangles[e]` to `triangles[next(e)]` and
/// belongs to triangle `e / 3`. `halfedges[e]` is its twin on the adjacent
/// triangle, or `None` when the edge lies on the convex hull.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    triangles: Vec<usize>,
    halfedges: Vec<Option<usize>>,
    hull: Vec<usize>,
}

impl Triangulation {
    /// Wrap connectivity produced by an external triangulator
    ///
    /// `triangles` holds three point indices per triangle and `halfedges`
    /// one entry per triangle index. Malformed records are tolerated here
    /// and skipped by the consumers.
    pub fn new(triangles: Vec<usize>, halfedges: Vec<Option<usize>>, hull: Vec<usize>) -> Self {
        Self {
            triangles,
            halfedges,
            hull,
        }
    }

    /// Triangulate a set of positions
    ///
    /// Near-duplicate positions are left out of the triangulation; when
    /// all positions are collinear there are no triangles and `hull` lists
    /// the points in order along the line.
    pub fn from_positions(positions: &[DVec2]) -> Self {
        if positions.is_empty() {
            return Self::default();
        }

        let points: Vec<delaunator::Point> = positions
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();

        let raw = delaunator::triangulate(&points);
        let halfedges = raw
            .halfedges
            .iter()
            .map(|&h| if h == delaunator::EMPTY { None } else { Some(h) })
            .collect();

        Self {
            triangles: raw.triangles,
            halfedges,
            hull: raw.hull,
        }
    }

    /// Flat triangle index array, three entries per triangle
    #[inline]
    pub fn triangle_indices(&self) -> &[usize] {
        &self.triangles
    }

    /// Opposite half-edge of every half-edge slot
    #[inline]
    pub fn halfedges(&self) -> &[Option<usize>] {
        &self.halfedges
    }

    /// Convex hull point indices
    #[inline]
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    /// Number of complete triangle records
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// True when there are no triangles but the hull still orders at least
    /// two points, which happens for collinear input
    pub fn is_collinear(&self) -> bool {
        self.triangle_count() == 0 && self.hull.len() >= 2
    }

    /// Iterate over complete triangle records
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Delaunay edges usable as proximity graph candidates
    ///
    /// Collinear input has no triangles; its Delaunay graph is the chain of
    /// consecutive points along the line, which the hull lists in order.
    pub fn candidate_edges(&self) -> Vec<Edge> {
        if self.is_collinear() {
            return hull_chain_edges(&self.hull);
        }
        collect_delaunay_edges(self)
    }

    /// Which of `point_count` points the triangulation kept
    ///
    /// A point is present when some triangle or the hull references it.
    /// Near-duplicates dropped by the triangulator are absent.
    pub fn point_presence(&self, point_count: usize) -> Vec<bool> {
        let mut present = vec![false; point_count];
        for &i in self.triangles.iter().chain(&self.hull) {
            if let Some(slot) = present.get_mut(i) {
                *slot = true;
            }
        }
        present
    }

    /// Neighbouring point indices for every point, sorted
    ///
    /// Built from triangle sides, or from the hull chain for collinear
    /// input. Indices `>= point_count` are ignored.
    pub fn neighbors(&self, point_count: usize) -> Vec<Vec<usize>> {
        let mut sets = vec![Vec::new(); point_count];
        let mut push = |i: usize, j: usize| {
            if i < point_count && j < point_count && i != j {
                sets[i].push(j);
                sets[j].push(i);
            }
        };

        if self.is_collinear() {
            for edge in hull_chain_edges(&self.hull) {
                push(edge.a(), edge.b());
            }
        } else {
            for t in self.triangles() {
                push(t[0], t[1]);
                push(t[1], t[2]);
                push(t[2], t[0]);
            }
        }

        for set in &mut sets {
            set.sort_unstable();
            set.dedup();
        }
        sets
    }
}

/// Next half-edge around the same triangle
#[inline]
fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

/// Unique undirected edges of a triangulation, in half-edge order
///
/// Each half-edge slot is visited once. A slot whose twin has a smaller
/// index was already emitted from the twin's side and is skipped; a set
/// of canonical edges catches any duplicate the twin check misses
/// (inconsistent adjacency from an external triangulator). Zero-length
/// edges are dropped.
pub fn collect_delaunay_edges(triangulation: &Triangulation) -> Vec<Edge> {
    let triangles = &triangulation.triangles;
    let complete = triangles.len() - triangles.len() % 3;

    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for e in 0..complete {
        if let Some(Some(opposite)) = triangulation.halfedges.get(e) {
            if *opposite < e {
                continue;
            }
        }

        let edge = Edge::new(triangles[e], triangles[next_halfedge(e)]);
        if edge.is_degenerate() {
            continue;
        }
        if seen.insert(edge) {
            edges.push(edge);
        }
    }

    edges
}

fn hull_chain_edges(hull: &[usize]) -> Vec<Edge> {
    hull.windows(2)
        .map(|w| Edge::new(w[0], w[1]))
        .filter(|e| !e.is_degenerate())
        .collect()
}

/// Check that a triangle record only references existing, distinct points
#[inline]
pub(crate) fn is_valid_triangle(t: &Triangle, point_count: usize) -> bool {
    t.iter().all(|&i| i < point_count) && !is_degenerate_triangle(t)
}
