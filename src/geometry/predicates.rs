//! Distance, area and containment measures on 2-D positions

use glam::DVec2;

/// Squared Euclidean distance
///
/// Preferred over [`distance`] wherever only the ordering of distances
/// matters.
#[inline]
pub fn distance_squared(a: DVec2, b: DVec2) -> f64 {
    a.distance_squared(b)
}

/// Euclidean distance
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Absolute area of the triangle `abc` (shoelace formula)
///
/// Zero for collinear or coincident vertices.
#[inline]
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    ((b - a).perp_dot(c - a) * 0.5).abs()
}

/// Radius of the circle through `a`, `b` and `c`
///
/// Returns `f64::INFINITY` for degenerate triangles, so they never pass a
/// finite radius threshold.
pub fn circumradius(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    let area = triangle_area(a, b, c);
    if area == 0.0 {
        return f64::INFINITY;
    }
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    (ab * bc * ca) / (4.0 * area)
}

/// Ray-casting parity test
///
/// `polygon` is an ordered vertex list; the closing edge back to the first
/// vertex is implied. Polygons with fewer than three vertices contain
/// nothing.
pub fn is_point_in_polygon(p: DVec2, polygon: &[DVec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let vi = polygon[i];
        let vj = polygon[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
