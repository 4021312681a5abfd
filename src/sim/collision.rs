//! Axis-aligned hitboxes
//!
//! Everything on the road is a rectangle, so overlap is four comparisons.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `min` is the top-left corner (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Index of the first rect in `others` overlapping `target`
pub fn first_overlap<'a, I>(target: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    others.into_iter().position(|r| target.overlaps(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(90.0, 50.0))
    }

    #[test]
    fn test_overlap() {
        assert!(rect(0.0, 0.0).overlaps(&rect(45.0, 25.0)));
        assert!(rect(45.0, 25.0).overlaps(&rect(0.0, 0.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!rect(0.0, 0.0).overlaps(&rect(90.0, 0.0)));
        assert!(!rect(0.0, 0.0).overlaps(&rect(0.0, 50.0)));
    }

    #[test]
    fn test_separate_lanes() {
        // Avatar one grid row below a car lane
        assert!(!rect(202.0, 339.0).overlaps(&rect(202.0, 256.0)));
        assert!(rect(202.0, 256.0).overlaps(&rect(150.0, 256.0)));
    }

    #[test]
    fn test_first_overlap_stops_at_first() {
        let target = rect(100.0, 100.0);
        let others = [rect(400.0, 400.0), rect(120.0, 100.0), rect(100.0, 110.0)];
        assert_eq!(first_overlap(&target, &others), Some(1));
        assert_eq!(first_overlap(&target, &others[..1]), None);
    }
}
