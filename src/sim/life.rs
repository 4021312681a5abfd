//! Heart indicators for remaining lives

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{DrawRequest, Sprite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeIndicator {
    pub pos: Vec2,
    pub size: Vec2,
}

impl LifeIndicator {
    /// Heart for slot `i`, counted from the left
    pub fn slot(i: usize) -> Self {
        Self {
            pos: Vec2::new(HEART_FIRST_X + i as f32 * HEART_SPACING, HEART_Y),
            size: Vec2::new(HEART_WIDTH, HEART_HEIGHT),
        }
    }

    /// Hearts are drawn scaled down, so the size goes along
    pub fn draw_request(&self) -> DrawRequest {
        DrawRequest::sized(Sprite::Heart, self.pos, self.size)
    }
}

/// One heart per life, left to right
pub fn add_lives(n: u32) -> Vec<LifeIndicator> {
    (0..n as usize).map(LifeIndicator::slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots() {
        let lives = add_lives(LIFE_COUNT);
        assert_eq!(lives.len(), 4);
        let xs: Vec<f32> = lives.iter().map(|l| l.pos.x).collect();
        assert_eq!(xs, vec![10.0, 50.0, 90.0, 130.0]);
        assert!(lives.iter().all(|l| l.pos.y == HEART_Y));
    }

    #[test]
    fn test_zero_lives() {
        assert!(add_lives(0).is_empty());
    }

    #[test]
    fn test_draw_request_is_sized() {
        let req = LifeIndicator::slot(0).draw_request();
        assert_eq!(req.sprite, Sprite::Heart);
        assert_eq!(req.size, Some(Vec2::new(HEART_WIDTH, HEART_HEIGHT)));
    }
}
