//! Voronoi cell construction from Delaunay neighbours
//!
//! Each cell starts as the clipping rectangle and is cut down by the
//! perpendicular bisector between its seed and every Delaunay neighbour.
//! Only Delaunay neighbours can contribute a cell side, so this yields the
//! exact clipped cell.

use glam::DVec2;

use crate::config::Bounds;
use crate::geometry::approx_zero;
use crate::triangulation::Triangulation;

/// Compute the clipped Voronoi cell of every point
///
/// Cells are returned in point order as open vertex rings (no repeated
/// closing vertex). A cell is empty when the seed lies outside the
/// rectangle, when the triangulator dropped the seed as a duplicate, or
/// when clipping leaves fewer than three distinct vertices. A seed on the
/// rectangle's edge counts as inside.
pub fn voronoi_cells(positions: &[DVec2], triangulation: &Triangulation, bounds: Bounds) -> Vec<Vec<DVec2>> {
    let n = positions.len();
    if n == 0 {
        return Vec::new();
    }

    let neighbors = triangulation.neighbors(n);
    let rect = [
        DVec2::new(0.0, 0.0),
        DVec2::new(bounds.width, 0.0),
        DVec2::new(bounds.width, bounds.height),
        DVec2::new(0.0, bounds.height),
    ];

    let present = triangulation.point_presence(n);

    (0..n)
        .map(|i| {
            let site = positions[i];
            if !bounds.contains(site) {
                tracing::debug!(point = i, "seed outside bounds, empty cell");
                return Vec::new();
            }
            if n > 1 && !present[i] {
                tracing::debug!(point = i, "seed skipped by the triangulation, empty cell");
                return Vec::new();
            }

            let mut polygon = rect.to_vec();
            for &j in &neighbors[i] {
                polygon = clip_by_bisector(&polygon, site, positions[j]);
                if polygon.is_empty() {
                    break;
                }
            }

            let cell = remove_duplicate_vertices(polygon);
            if cell.len() < 3 {
                return Vec::new();
            }
            cell
        })
        .collect()
}

/// Signed offset of `p` from the bisector of `site` and `other`, positive on
/// the side of `other`
#[inline]
fn bisector_side(p: DVec2, site: DVec2, other: DVec2) -> f64 {
    let mid = (site + other) * 0.5;
    (p - mid).dot(other - site)
}

/// Keep the part of `polygon` closer to `site` than to `other`
/// (Sutherland–Hodgman against one half-plane)
fn clip_by_bisector(polygon: &[DVec2], site: DVec2, other: DVec2) -> Vec<DVec2> {
    let Some(&last) = polygon.last() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(polygon.len() + 1);
    let mut prev = last;
    let mut prev_side = bisector_side(prev, site, other);

    for &current in polygon {
        let side = bisector_side(current, site, other);
        let inside = side <= 0.0;
        let prev_inside = prev_side <= 0.0;

        if inside != prev_inside {
            let t = prev_side / (prev_side - side);
            result.push(prev + (current - prev) * t);
        }
        if inside {
            result.push(current);
        }

        prev = current;
        prev_side = side;
    }

    result
}

/// Drop consecutive repeated vertices, including a closing vertex equal to
/// the first
fn remove_duplicate_vertices(polygon: Vec<DVec2>) -> Vec<DVec2> {
    let same = |a: DVec2, b: DVec2| approx_zero(a.distance(b));

    let mut out: Vec<DVec2> = Vec::with_capacity(polygon.len());
    for p in polygon {
        if out.last().map_or(true, |&q| !same(p, q)) {
            out.push(p);
        }
    }
    while out.len() > 1 && same(out[0], out[out.len() - 1]) {
        out.pop();
    }
    out
}
