//! Property tests over random point sets.

mod support;

use std::collections::HashSet;

use proptest::prelude::*;
use rust_voronoi_proximity::*;
use support::points::{all_pairs, is_spanning_tree};

fn positions_strategy(max: usize) -> impl Strategy<Value = Vec<DVec2>> {
    prop::collection::vec((0.0..500.0f64, 0.0..500.0f64), 2..max)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| DVec2::new(x, y)).collect())
}

fn as_set(edges: &[Edge]) -> HashSet<Edge> {
    edges.iter().copied().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn edge_is_order_independent(a in 0usize..1000, b in 0usize..1000) {
        prop_assert_eq!(Edge::new(a, b), Edge::new(b, a));
        let e = Edge::new(a, b);
        prop_assert!(e.a() <= e.b());
    }

    #[test]
    fn alpha_complex_grows_with_alpha(
        positions in positions_strategy(40),
        alpha1 in 0.0..200.0f64,
        delta in 0.0..200.0f64,
    ) {
        let alpha2 = alpha1 + delta;
        let tri = Triangulation::from_positions(&positions);
        let small = compute_alpha_data(&positions, &tri, alpha1);
        let large = compute_alpha_data(&positions, &tri, alpha2);

        let large_triangles: HashSet<Triangle> = large.triangles.iter().copied().collect();
        for t in &small.triangles {
            prop_assert!(large_triangles.contains(t));
        }
    }

    #[test]
    fn alpha_boundary_is_subset_of_complex(
        positions in positions_strategy(40),
        alpha in 0.0..300.0f64,
    ) {
        let tri = Triangulation::from_positions(&positions);
        let data = compute_alpha_data(&positions, &tri, alpha);
        let all = as_set(&data.all_edges);
        for e in &data.boundary_edges {
            prop_assert!(all.contains(e));
        }
        prop_assert_eq!(all.len(), data.all_edges.len());
    }

    #[test]
    fn mst_spans_all_points(positions in positions_strategy(60)) {
        let edges = minimum_spanning_tree_edges(&positions);
        prop_assert_eq!(edges.len(), positions.len() - 1);
        prop_assert!(is_spanning_tree(&edges, positions.len()));
    }

    #[test]
    fn proximity_hierarchy(positions in positions_strategy(40)) {
        let candidates = Triangulation::from_positions(&positions).candidate_edges();
        let gabriel = gabriel_edges(&positions, &candidates);
        let rng = relative_neighborhood_edges(&positions, &candidates);

        let candidate_set = as_set(&candidates);
        let gabriel_set = as_set(&gabriel);
        for e in &gabriel {
            prop_assert!(candidate_set.contains(e));
        }
        for e in &rng {
            prop_assert!(gabriel_set.contains(e));
        }
    }

    #[test]
    fn delaunay_candidates_lose_nothing(positions in positions_strategy(25)) {
        let pairs = all_pairs(positions.len());
        let candidates = Triangulation::from_positions(&positions).candidate_edges();

        prop_assert_eq!(
            as_set(&gabriel_edges(&positions, &pairs)),
            as_set(&gabriel_edges(&positions, &candidates))
        );
        prop_assert_eq!(
            as_set(&relative_neighborhood_edges(&positions, &pairs)),
            as_set(&relative_neighborhood_edges(&positions, &candidates))
        );
    }

    #[test]
    fn slider_round_trip(t in 0.0..=1.0f64) {
        let back = radius_to_slider(slider_to_radius(t));
        prop_assert!((back - t).abs() < 1e-9);
    }

    #[test]
    fn derived_structures_are_deterministic(
        positions in positions_strategy(30),
        mode_index in 0usize..8,
    ) {
        let points: Vec<Point> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(i as u64, p.x, p.y))
            .collect();
        let config = DeriveConfigBuilder::new()
            .bounds(Bounds::new(500.0, 500.0))
            .unwrap()
            .alpha(80.0)
            .unwrap()
            .mode(GraphMode::ALL[mode_index])
            .build()
            .unwrap();

        let first = compute_derived_structures(&points, &config);
        let second = compute_derived_structures(&points, &config);
        prop_assert_eq!(first, second);
    }
}
