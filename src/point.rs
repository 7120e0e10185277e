//! Point and index types shared by every builder
//!
//! Builders never look at point ids: all edges, triangles and cells refer to
//! points by their position in the input sequence.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A seed point in the plane
///
/// `id` is assigned once by the owner of the point sequence (see
/// [`PointSet`](crate::PointSet)) and never reused while the point is alive.
/// Only the position may change.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Stable identity of the point
    pub id: u64,
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Position as a vector
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Extract the positions of a point sequence, preserving order
pub fn positions(points: &[Point]) -> Vec<DVec2> {
    points.iter().map(Point::position).collect()
}

/// An undirected edge between two points, stored smaller index first
///
/// Two edges compare equal iff they connect the same pair of points,
/// regardless of the order the endpoints were given in. This makes `Edge`
/// usable directly as a deduplication key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Create the canonical edge between `i` and `j`
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Smaller endpoint index
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Larger endpoint index
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Both endpoints, smaller first
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// True when both endpoints are the same point
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Euclidean length of the edge for the given positions
    pub fn length(&self, positions: &[DVec2]) -> f64 {
        positions[self.a].distance(positions[self.b])
    }
}

impl From<(usize, usize)> for Edge {
    fn from((i, j): (usize, usize)) -> Self {
        Edge::new(i, j)
    }
}

/// Three point indices as produced by a triangulation
pub type Triangle = [usize; 3];

/// True when the triangle repeats an index
#[inline]
pub fn is_degenerate_triangle(t: &Triangle) -> bool {
    t[0] == t[1] || t[1] == t[2] || t[0] == t[2]
}

/// The three canonical edges of a triangle
#[inline]
pub fn triangle_edges(t: &Triangle) -> [Edge; 3] {
    [Edge::new(t[0], t[1]), Edge::new(t[1], t[2]), Edge::new(t[2], t[0])]
}
