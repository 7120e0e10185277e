//! Spatial indexing for fast position-to-point lookups
//!
//! This module is only available with the `spatial-index` feature.

use glam::DVec2;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

/// Wrapper around a 2-D KD-tree over point positions
///
/// Gives O(log n) nearest-point lookups for pointer hit testing, where the
/// same point set is queried many times between edits. Rebuild it after
/// the point set changes.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
/// - Memory: one `[f64; 2]` plus one index per point
#[derive(Clone)]
pub struct SpatialIndex {
    tree: Option<ImmutableKdTree<f64, usize, 2, 32>>,
}

impl SpatialIndex {
    /// Build an index over positions
    ///
    /// # Arguments
    ///
    /// * `positions` - Point positions; query results are indices into this slice
    ///
    /// # Example
    ///
    /// ```
    /// use rust_voronoi_proximity::*;
    ///
    /// let positions = vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)];
    /// let index = SpatialIndex::new(&positions);
    /// assert_eq!(index.find_nearest(DVec2::new(8.0, 1.0)), Some(1));
    /// ```
    pub fn new(positions: &[DVec2]) -> Self {
        if positions.is_empty() {
            return Self { tree: None };
        }

        let coords: Vec<[f64; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();
        Self {
            tree: Some(ImmutableKdTree::new_from_slice(&coords)),
        }
    }

    /// Find the position nearest to `position`
    ///
    /// # Returns
    ///
    /// Index of the nearest position, or `None` for an empty index. Among
    /// exactly equidistant positions the tree may return any of them.
    ///
    /// # Performance
    ///
    /// O(log n) lookup.
    pub fn find_nearest(&self, position: DVec2) -> Option<usize> {
        self.nearest(position).map(|(index, _)| index)
    }

    /// Index of the nearest position within `max_distance`
    ///
    /// # Arguments
    ///
    /// * `position` - Query point, e.g. a pointer location
    /// * `max_distance` - Pick radius; farther positions are ignored
    pub fn pick(&self, position: DVec2, max_distance: f64) -> Option<usize> {
        self.nearest(position)
            .filter(|&(_, dist_sq)| dist_sq <= max_distance * max_distance)
            .map(|(index, _)| index)
    }

    fn nearest(&self, position: DVec2) -> Option<(usize, f64)> {
        let tree = self.tree.as_ref()?;
        let result = tree.nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        Some((result.item, result.distance))
    }
}
