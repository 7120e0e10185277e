#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_voronoi_proximity::{DVec2, Edge, Point};

/// Uniform random points in `[0, width) × [0, height)`
pub fn random_points(n: usize, width: f64, height: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| Point::new(i as u64, rng.gen_range(0.0..width), rng.gen_range(0.0..height)))
        .collect()
}

/// Points from plain coordinate pairs, ids in order
pub fn points_from(coords: &[(f64, f64)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Point::new(i as u64, x, y))
        .collect()
}

pub fn positions_of(points: &[Point]) -> Vec<DVec2> {
    points.iter().map(Point::position).collect()
}

/// True when `edges` form a spanning tree over `n` vertices
pub fn is_spanning_tree(edges: &[Edge], n: usize) -> bool {
    if n == 0 {
        return edges.is_empty();
    }
    if edges.len() != n - 1 {
        return false;
    }

    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for e in edges {
        let ra = find(&mut parent, e.a());
        let rb = find(&mut parent, e.b());
        if ra == rb {
            return false; // cycle
        }
        parent[ra] = rb;
    }
    true
}

/// Every pair `(i, j)` with `i < j`
pub fn all_pairs(n: usize) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge::new(i, j));
        }
    }
    edges
}
