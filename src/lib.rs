//! Proximity structures over 2-D point sets
//!
//! Computes, from a finite set of points in a rectangle, the structures used
//! to explore proximity: clipped Voronoi cells, alpha shapes and alpha
//! complexes, the nearest-neighbour crust, the Gabriel graph, the relative
//! neighbourhood graph and the Euclidean minimum spanning tree.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_voronoi_proximity::*;
//!
//! let mut set = PointSet::new();
//! set.scatter(50, Bounds::new(800.0, 600.0), 42).unwrap();
//!
//! let config = DeriveConfigBuilder::new()
//!     .alpha(slider_to_radius(0.2))
//!     .unwrap()
//!     .mode(GraphMode::AlphaShape)
//!     .build()
//!     .unwrap();
//!
//! let derived = compute_derived_structures(set.points(), &config);
//! println!("{} cells, {} boundary edges", derived.cells.len(), derived.graph_edges.len());
//! ```
//!
//! All outputs reference points by their index in the input slice, never by
//! id. Every computation starts from scratch and is a pure function of its
//! inputs, so it may run on any thread.
//!
//! # Features
//!
//! - `spatial-index` (default): KD-tree nearest-point lookups for hit testing
//! - `serde`: Serialization support for configuration and outputs

// Modules
pub mod error;
pub mod config;
pub mod point;
pub mod geometry;
pub mod triangulation;
pub mod voronoi;
pub mod graph;
pub mod discrete;
pub mod derive;
pub mod point_set;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{ProximityError, Result};
pub use config::{Bounds, DeriveConfig, DeriveConfigBuilder, GraphMode};
pub use point::{Edge, Point, Triangle};
pub use geometry::{radius_to_slider, slider_to_radius, RadiusScale, ScaleSegment};
pub use triangulation::{collect_delaunay_edges, Triangulation};
pub use voronoi::voronoi_cells;
pub use graph::{
    compute_alpha_data, gabriel_edges, minimum_spanning_tree_edges, nearest_neighbor_edges,
    relative_neighborhood_edges, AlphaData,
};
pub use discrete::{rasterize_cells, PixelCell};
pub use derive::{compute_derived_structures, DerivedStructures};
pub use point_set::PointSet;

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
