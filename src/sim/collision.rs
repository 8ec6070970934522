//! Axis-aligned bounding boxes
//!
//! Every collision in the game is a box test. Comparisons are strict (open
//! intervals) everywhere, so two boxes that merely share an edge never collide
//! and an entity resting exactly on a boundary gets the same answer every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner, corner + size)
    }

    /// Box centered on `center` extending `half` in each direction
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    /// Strict interior containment
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Interiors intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_is_strict() {
        let b = Aabb::from_corner(Vec2::new(10.0, 10.0), Vec2::splat(40.0));
        assert!(b.contains_point(Vec2::new(30.0, 30.0)));
        assert!(!b.contains_point(Vec2::new(10.0, 30.0)));
        assert!(!b.contains_point(Vec2::new(50.0, 30.0)));
        assert!(!b.contains_point(Vec2::new(30.0, 50.0)));
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::from_center(Vec2::new(100.0, 100.0), Vec2::splat(25.0));
        let inside = Aabb::from_corner(Vec2::new(90.0, 60.0), Vec2::splat(40.0));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));

        let far = Aabb::from_corner(Vec2::new(300.0, 60.0), Vec2::splat(40.0));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_corner(Vec2::ZERO, Vec2::splat(40.0));
        let below = Aabb::from_corner(Vec2::new(0.0, 40.0), Vec2::splat(40.0));
        let right = Aabb::from_corner(Vec2::new(40.0, 0.0), Vec2::splat(40.0));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&right));
    }
}
