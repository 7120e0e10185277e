//! Owned, editable point sequence
//!
//! The builders only read point slices. `PointSet` is the owner an
//! interactive caller edits between computations: it hands out ids,
//! moves and removes points, rescales them when the canvas is resized, and
//! scatters random seeds.

use glam::DVec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::Bounds;
use crate::error::{ProximityError, Result};
use crate::geometry::{distance_squared, seed_hash};
use crate::point::{positions, Point};

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// An ordered sequence of points with stable ids
///
/// Ids come from a counter that only grows, so an id is never handed out
/// twice, even after its point is removed or the set is cleared.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_proximity::*;
///
/// let mut set = PointSet::new();
/// let a = set.add(10.0, 10.0);
/// let b = set.add(50.0, 20.0);
/// set.move_point(b, 60.0, 25.0).unwrap();
///
/// assert_eq!(set.index_of(a), Some(0));
/// assert_eq!(set.get(b).unwrap().x, 60.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
    next_id: u64,
}

impl PointSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its new id
    pub fn add(&mut self, x: f64, y: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.points.push(Point::new(id, x, y));
        id
    }

    /// Remove a point, keeping the order of the others
    ///
    /// # Errors
    ///
    /// Returns `PointNotFound` if no live point has this id
    pub fn remove(&mut self, id: u64) -> Result<Point> {
        let index = self.index_of(id).ok_or(ProximityError::PointNotFound(id))?;
        Ok(self.points.remove(index))
    }

    /// Move a point to a new position
    ///
    /// # Errors
    ///
    /// Returns `PointNotFound` if no live point has this id
    pub fn move_point(&mut self, id: u64, x: f64, y: f64) -> Result<()> {
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProximityError::PointNotFound(id))?;
        point.x = x;
        point.y = y;
        Ok(())
    }

    /// Look up a point by id
    pub fn get(&self, id: u64) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Current sequence index of a point
    ///
    /// Indices shift when earlier points are removed; ids do not.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// The points in sequence order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of live points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every point; ids keep counting from where they were
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Scale every position from one canvas size to another
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either bounds is not finite and positive
    pub fn rescale(&mut self, from: Bounds, to: Bounds) -> Result<()> {
        let from = from.validated()?;
        let to = to.validated()?;
        let sx = to.width / from.width;
        let sy = to.height / from.height;
        for p in &mut self.points {
            p.x *= sx;
            p.y *= sy;
        }
        Ok(())
    }

    /// Add `count` uniformly distributed points inside `bounds`
    ///
    /// The same seed always produces the same positions. Returns the new
    /// ids in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the bounds are not finite and positive
    pub fn scatter(&mut self, count: usize, bounds: Bounds, seed: u32) -> Result<Vec<u64>> {
        let bounds = bounds.validated()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed_hash(seed) as u64);

        let ids = (0..count)
            .map(|_| {
                let x = rng.gen_range(0.0..bounds.width);
                let y = rng.gen_range(0.0..bounds.height);
                self.add(x, y)
            })
            .collect();
        Ok(ids)
    }

    /// Index of the point nearest to `position` within `max_distance`
    ///
    /// Linear scan; ties go to the lowest index.
    pub fn pick(&self, position: DVec2, max_distance: f64) -> Option<usize> {
        let limit = max_distance * max_distance;
        let mut best = f64::INFINITY;
        let mut found = None;
        for (i, p) in self.points.iter().enumerate() {
            let d = distance_squared(p.position(), position);
            if d <= limit && d < best {
                best = d;
                found = Some(i);
            }
        }
        found
    }

    /// Positions in sequence order
    pub fn positions(&self) -> Vec<DVec2> {
        positions(&self.points)
    }

    /// Build a KD-tree over the current positions for repeated picks
    #[cfg(feature = "spatial-index")]
    pub fn spatial_index(&self) -> SpatialIndex {
        SpatialIndex::new(&self.positions())
    }
}
