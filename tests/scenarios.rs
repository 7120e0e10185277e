//! End-to-end scenarios through the public API.

mod support;

use rust_voronoi_proximity::geometry::{circumradius, triangle_area};
use rust_voronoi_proximity::graph::total_length;
use rust_voronoi_proximity::*;
use support::points::{is_spanning_tree, points_from, positions_of, random_points};

fn config(mode: GraphMode, alpha: f64) -> DeriveConfig {
    DeriveConfigBuilder::new()
        .bounds(Bounds::new(400.0, 400.0))
        .unwrap()
        .alpha(alpha)
        .unwrap()
        .mode(mode)
        .build()
        .unwrap()
}

#[test]
fn test_right_triangle_circumradius() {
    let p = positions_of(&points_from(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]));
    assert!((circumradius(p[0], p[1], p[2]) - 2.5).abs() < 1e-12);

    // Alpha exactly at the circumradius keeps the triangle
    let derived = compute_derived_structures(
        &points_from(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]),
        &config(GraphMode::AlphaComplex, 2.5),
    );
    assert_eq!(derived.alpha_triangles.len(), 1);
    assert_eq!(derived.graph_edges.len(), 3);
}

#[test]
fn test_single_point_yields_empty_graphs() {
    let points = points_from(&[(200.0, 200.0)]);
    let positions = positions_of(&points);
    let tri = Triangulation::from_positions(&positions);

    assert!(collect_delaunay_edges(&tri).is_empty());
    assert!(compute_alpha_data(&positions, &tri, 100.0).is_empty());
    assert!(nearest_neighbor_edges(&positions).is_empty());
    assert!(gabriel_edges(&positions, &tri.candidate_edges()).is_empty());
    assert!(relative_neighborhood_edges(&positions, &tri.candidate_edges()).is_empty());
    assert!(minimum_spanning_tree_edges(&positions).is_empty());

    for mode in GraphMode::ALL {
        let derived = compute_derived_structures(&points, &config(mode, 100.0));
        assert!(derived.graph_edges.is_empty());
        assert!(derived.alpha_triangles.is_empty());
    }
}

#[test]
fn test_collinear_points_never_form_triangles() {
    let points = points_from(&[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0)]);
    let positions = positions_of(&points);

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                if i == j || j == k || i == k {
                    continue;
                }
                assert_eq!(triangle_area(positions[i], positions[j], positions[k]), 0.0);
                assert_eq!(circumradius(positions[i], positions[j], positions[k]), f64::INFINITY);
            }
        }
    }

    let derived = compute_derived_structures(&points, &config(GraphMode::AlphaComplex, f64::MAX));
    assert!(derived.alpha_triangles.is_empty());
    assert!(derived.graph_edges.is_empty());

    // The proximity graphs still see the chain along the line
    let gabriel = compute_derived_structures(&points, &config(GraphMode::Gabriel, 0.0));
    assert_eq!(gabriel.graph_edges.len(), 3);
    let mst = compute_derived_structures(&points, &config(GraphMode::Mst, 0.0));
    assert_eq!(mst.graph_edges.len(), 3);
}

#[test]
fn test_slider_boundaries() {
    assert_eq!(slider_to_radius(0.5), 500.0);
    assert_eq!(slider_to_radius(0.75), 1000.0);
}

#[test]
fn test_unit_square_with_center_mst() {
    let points = points_from(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]);
    let positions = positions_of(&points);

    let edges = minimum_spanning_tree_edges(&positions);
    assert_eq!(edges.len(), 4);
    assert!(is_spanning_tree(&edges, 5));

    // Centre to corner is sqrt(2)/2 < 1, so the tree is the star around the centre
    assert!(edges.iter().all(|e| e.b() == 4));
    let expected = 4.0 * (2f64.sqrt() / 2.0);
    assert!((total_length(&edges, &positions) - expected).abs() < 1e-12);
    assert!(expected < 3.0); // three square sides would be longer
}

#[test]
fn test_random_scene_all_modes() {
    let points = random_points(120, 400.0, 400.0, 99);

    let voronoi = compute_derived_structures(&points, &config(GraphMode::Voronoi, 0.0));
    assert_eq!(voronoi.cells.len(), 120);
    assert!(voronoi.cells.iter().all(|c| c.len() >= 3));

    let mst = compute_derived_structures(&points, &config(GraphMode::Mst, 0.0));
    assert!(is_spanning_tree(&mst.graph_edges, 120));

    let nn = compute_derived_structures(&points, &config(GraphMode::NnCrust, 0.0));
    // Every nearest-neighbour edge is in the MST
    for e in &nn.graph_edges {
        assert!(mst.graph_edges.contains(e));
    }

    let gabriel = compute_derived_structures(&points, &config(GraphMode::Gabriel, 0.0));
    let rng = compute_derived_structures(&points, &config(GraphMode::Rng, 0.0));
    for e in &mst.graph_edges {
        assert!(rng.graph_edges.contains(e));
    }
    for e in &rng.graph_edges {
        assert!(gabriel.graph_edges.contains(e));
    }

    let small = compute_derived_structures(&points, &config(GraphMode::AlphaComplex, 15.0));
    let large = compute_derived_structures(&points, &config(GraphMode::AlphaComplex, 60.0));
    assert!(small.alpha_triangles.len() <= large.alpha_triangles.len());
}

#[test]
fn test_point_set_round_trip() {
    let mut set = PointSet::new();
    set.scatter(30, Bounds::new(400.0, 400.0), 5).unwrap();
    let id = set.add(200.0, 200.0);

    let derived = compute_derived_structures(set.points(), &config(GraphMode::Voronoi, 0.0));
    let index = set.index_of(id).unwrap();
    assert_eq!(derived.cell_containing(DVec2::new(200.0, 200.0)), Some(index));
}

#[test]
fn test_mode_parsing_at_the_boundary() {
    let mode: GraphMode = "alpha-complex".parse().unwrap();
    assert_eq!(mode, GraphMode::AlphaComplex);
    assert!(matches!(
        "triangulation".parse::<GraphMode>(),
        Err(ProximityError::UnknownMode(_))
    ));
}
