//! Derived-structure orchestration
//!
//! Selects the builders for the requested mode and assembles their output.
//! Nothing is cached between calls; identical inputs give identical output.

use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DeriveConfig, GraphMode};
use crate::discrete::{rasterize_cells, PixelCell};
use crate::geometry::is_point_in_polygon;
use crate::graph::{
    compute_alpha_data, gabriel_edges, minimum_spanning_tree_edges, nearest_neighbor_edges,
    relative_neighborhood_edges,
};
use crate::point::{positions, Edge, Point, Triangle};
use crate::triangulation::Triangulation;
use crate::voronoi::voronoi_cells;

/// Everything a renderer needs for one frame
///
/// Indices in `graph_edges` and `alpha_triangles`, and positions in
/// `cells`, follow the order of the input point sequence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedStructures {
    /// Clipped Voronoi cell per point; empty if the cell could not be built.
    /// Empty in `voronoi-bruteforce` mode.
    pub cells: Vec<Vec<DVec2>>,
    /// Pixel groups of the brute-force raster, only in `voronoi-bruteforce` mode
    pub pixel_cells: Vec<PixelCell>,
    /// Mode-dependent edge set
    pub graph_edges: Vec<Edge>,
    /// Alpha complex triangles, only in `alpha-complex` mode
    pub alpha_triangles: Vec<Triangle>,
}

impl DerivedStructures {
    /// True when nothing was produced
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
            && self.pixel_cells.is_empty()
            && self.graph_edges.is_empty()
            && self.alpha_triangles.is_empty()
    }

    /// Index of the point whose cell contains `p`
    ///
    /// Only meaningful when polygon cells were computed.
    pub fn cell_containing(&self, p: DVec2) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| is_point_in_polygon(p, cell))
    }
}

/// Compute the structures selected by `config.mode`
///
/// Builds the Delaunay triangulation once and runs only the builders the
/// mode needs. Every call starts from scratch.
///
/// # Arguments
///
/// * `points` - Seed points; outputs refer to them by slice index
/// * `config` - Clipping bounds, alpha radius and graph mode
///
/// # Returns
///
/// Polygon cells for every mode except `voronoi-bruteforce`, which fills
/// `pixel_cells` instead, plus the mode's edges (and triangles for
/// `alpha-complex`). Empty input gives an empty bundle.
///
/// # Performance
///
/// - Gabriel and RNG: O(E·n) over the Delaunay edges
/// - NN-crust and MST: O(n²)
/// - `voronoi-bruteforce`: O(width · height · n), meant for small canvases
///
/// # Example
///
/// ```rust
/// use rust_voronoi_proximity::*;
///
/// let points = vec![
///     Point::new(0, 100.0, 100.0),
///     Point::new(1, 300.0, 120.0),
///     Point::new(2, 200.0, 300.0),
/// ];
/// let config = DeriveConfigBuilder::new().mode(GraphMode::Mst).build().unwrap();
///
/// let derived = compute_derived_structures(&points, &config);
/// assert_eq!(derived.cells.len(), 3);
/// assert_eq!(derived.graph_edges.len(), 2);
/// ```
pub fn compute_derived_structures(points: &[Point], config: &DeriveConfig) -> DerivedStructures {
    if points.is_empty() {
        return DerivedStructures::default();
    }

    let positions = positions(points);
    let derived = match config.mode {
        GraphMode::VoronoiBruteforce => DerivedStructures {
            pixel_cells: rasterize_cells(&positions, config.bounds),
            ..Default::default()
        },
        _ => polygon_structures(&positions, config),
    };

    tracing::debug!(
        mode = %config.mode,
        alpha = ?config.mode.uses_alpha().then_some(config.alpha),
        points = points.len(),
        cells = derived.cells.len(),
        pixel_cells = derived.pixel_cells.len(),
        edges = derived.graph_edges.len(),
        triangles = derived.alpha_triangles.len(),
        "derived structures"
    );

    derived
}

/// Cells plus the mode's graph, for every mode backed by a triangulation
fn polygon_structures(positions: &[DVec2], config: &DeriveConfig) -> DerivedStructures {
    let triangulation = Triangulation::from_positions(positions);
    let cells = voronoi_cells(positions, &triangulation, config.bounds);

    let mut alpha_triangles = Vec::new();
    let graph_edges = match config.mode {
        GraphMode::Voronoi | GraphMode::VoronoiBruteforce => Vec::new(),
        GraphMode::AlphaShape => compute_alpha_data(positions, &triangulation, config.alpha).boundary_edges,
        GraphMode::AlphaComplex => {
            let data = compute_alpha_data(positions, &triangulation, config.alpha);
            alpha_triangles = data.triangles;
            data.all_edges
        }
        GraphMode::NnCrust => nearest_neighbor_edges(positions),
        GraphMode::Gabriel => gabriel_edges(positions, &triangulation.candidate_edges()),
        GraphMode::Rng => relative_neighborhood_edges(positions, &triangulation.candidate_edges()),
        GraphMode::Mst => minimum_spanning_tree_edges(positions),
    };

    DerivedStructures {
        cells,
        pixel_cells: Vec::new(),
        graph_edges,
        alpha_triangles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bounds, DeriveConfigBuilder};

    fn config(mode: GraphMode, alpha: f64) -> DeriveConfig {
        DeriveConfigBuilder::new()
            .bounds(Bounds::new(100.0, 100.0))
            .unwrap()
            .alpha(alpha)
            .unwrap()
            .mode(mode)
            .build()
            .unwrap()
    }

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(10, 20.0, 20.0),
            Point::new(11, 80.0, 25.0),
            Point::new(12, 50.0, 50.0),
            Point::new(13, 25.0, 80.0),
            Point::new(14, 75.0, 75.0),
        ]
    }

    #[test]
    fn test_no_points_short_circuits() {
        for mode in GraphMode::ALL {
            let derived = compute_derived_structures(&[], &config(mode, 10.0));
            assert!(derived.is_empty(), "mode {} not empty", mode);
        }
    }

    #[test]
    fn test_single_point_every_mode() {
        let points = vec![Point::new(0, 50.0, 50.0)];
        for mode in GraphMode::ALL {
            let derived = compute_derived_structures(&points, &config(mode, 1000.0));
            assert!(derived.graph_edges.is_empty(), "mode {}", mode);
            assert!(derived.alpha_triangles.is_empty(), "mode {}", mode);
        }
    }

    #[test]
    fn test_voronoi_mode_has_cells_only() {
        let derived = compute_derived_structures(&sample_points(), &config(GraphMode::Voronoi, 10.0));
        assert_eq!(derived.cells.len(), 5);
        assert!(derived.cells.iter().all(|c| c.len() >= 3));
        assert!(derived.graph_edges.is_empty());
        assert!(derived.alpha_triangles.is_empty());
        assert!(derived.pixel_cells.is_empty());
    }

    #[test]
    fn test_bruteforce_mode_has_pixels_only() {
        let derived = compute_derived_structures(&sample_points(), &config(GraphMode::VoronoiBruteforce, 10.0));
        assert!(derived.cells.is_empty());
        assert_eq!(derived.pixel_cells.len(), 5);
        let total: usize = derived.pixel_cells.iter().map(PixelCell::area).sum();
        assert_eq!(total, 100 * 100);
    }

    #[test]
    fn test_alpha_modes() {
        let points = sample_points();
        let shape = compute_derived_structures(&points, &config(GraphMode::AlphaShape, 1000.0));
        let complex = compute_derived_structures(&points, &config(GraphMode::AlphaComplex, 1000.0));

        assert!(shape.alpha_triangles.is_empty());
        assert_eq!(complex.alpha_triangles.len(), 4);
        // Convex hull is the 4 outer points
        assert_eq!(shape.graph_edges.len(), 4);
        assert_eq!(complex.graph_edges.len(), 8);
        for e in &shape.graph_edges {
            assert!(complex.graph_edges.contains(e));
        }
    }

    #[test]
    fn test_graph_modes_produce_edges() {
        let points = sample_points();
        let mst = compute_derived_structures(&points, &config(GraphMode::Mst, 0.0));
        assert_eq!(mst.graph_edges.len(), 4);

        let rng = compute_derived_structures(&points, &config(GraphMode::Rng, 0.0));
        let gabriel = compute_derived_structures(&points, &config(GraphMode::Gabriel, 0.0));
        for e in &rng.graph_edges {
            assert!(gabriel.graph_edges.contains(e));
        }
        for e in &mst.graph_edges {
            assert!(rng.graph_edges.contains(e));
        }

        let nn = compute_derived_structures(&points, &config(GraphMode::NnCrust, 0.0));
        assert!(!nn.graph_edges.is_empty());
        assert_eq!(nn.cells.len(), 5);
    }

    #[test]
    fn test_is_deterministic() {
        let points = sample_points();
        for mode in GraphMode::ALL {
            let a = compute_derived_structures(&points, &config(mode, 40.0));
            let b = compute_derived_structures(&points, &config(mode, 40.0));
            assert_eq!(a, b, "mode {}", mode);
        }
    }

    #[test]
    fn test_cell_containing() {
        let points = sample_points();
        let derived = compute_derived_structures(&points, &config(GraphMode::Voronoi, 0.0));
        assert_eq!(derived.cell_containing(DVec2::new(21.0, 19.0)), Some(0));
        assert_eq!(derived.cell_containing(DVec2::new(74.0, 76.0)), Some(4));
        assert_eq!(derived.cell_containing(DVec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let points = sample_points();
        let before = points.clone();
        let _ = compute_derived_structures(&points, &config(GraphMode::Gabriel, 0.0));
        assert_eq!(points, before);
    }
}
