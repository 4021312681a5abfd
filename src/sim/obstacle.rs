//! Cars driving left to right along the lanes

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::random::{random_lane_y, random_speed, random_variant};
use crate::consts::*;
use crate::renderer::{DrawRequest, Sprite};

/// Car visual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    A,
    B,
    C,
}

/// A car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed in px/s
    pub speed: f32,
    pub variant: Variant,
}

impl Obstacle {
    /// A fresh car at the spawn point with random lane, speed and paint
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut obstacle = Self {
            pos: Vec2::new(ENEMY_SPAWN_X, 0.0),
            size: Vec2::new(ENTITY_WIDTH, ENTITY_HEIGHT),
            speed: 0.0,
            variant: Variant::A,
        };
        obstacle.respawn(rng);
        obstacle
    }

    /// Send the car back to the left edge with new parameters
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos.x = ENEMY_SPAWN_X;
        self.variant = random_variant(rng);
        self.speed = random_speed(rng);
        self.pos.y = random_lane_y(rng);
    }

    /// Advance by `dt` seconds, recycling the car once it leaves on the right
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.pos.x += self.speed * dt;
        if self.pos.x > PLAYFIELD_WIDTH {
            self.respawn(rng);
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn draw_request(&self) -> DrawRequest {
        DrawRequest::at(Sprite::Car(self.variant), self.pos)
    }
}

/// `n` independently randomized cars
pub fn create_batch<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Obstacle> {
    (0..n).map(|_| Obstacle::spawn(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_y;
    use crate::sim::random::seeded;
    use proptest::prelude::*;

    fn is_lane(y: f32) -> bool {
        (0..LANE_COUNT).any(|k| lane_y(k) == y)
    }

    #[test]
    fn test_batch() {
        let mut rng = seeded(1);
        let batch = create_batch(ENEMY_COUNT, &mut rng);
        assert_eq!(batch.len(), ENEMY_COUNT);
        for car in &batch {
            assert_eq!(car.pos.x, ENEMY_SPAWN_X);
            assert!(is_lane(car.pos.y));
            assert_eq!(car.size, Vec2::new(ENTITY_WIDTH, ENTITY_HEIGHT));
        }
    }

    #[test]
    fn test_update_integrates_speed() {
        let mut rng = seeded(2);
        let mut car = Obstacle::spawn(&mut rng);
        car.speed = 100.0;
        car.update(0.5, &mut rng);
        assert_eq!(car.pos.x, ENEMY_SPAWN_X + 50.0);
    }

    #[test]
    fn test_wraps_past_right_edge() {
        let mut rng = seeded(3);
        let mut car = Obstacle::spawn(&mut rng);
        car.pos.x = PLAYFIELD_WIDTH - 50.0;
        car.speed = 100.0;

        // Lands exactly on the edge: not past it yet
        car.update(0.5, &mut rng);
        assert_eq!(car.pos.x, PLAYFIELD_WIDTH);

        car.update(0.5, &mut rng);
        assert_eq!(car.pos.x, ENEMY_SPAWN_X);
        assert!(is_lane(car.pos.y));
        assert!(car.speed >= MIN_SPEED as f32 && car.speed < MAX_SPEED as f32);
    }

    #[test]
    fn test_draw_request_matches_variant() {
        let mut rng = seeded(4);
        let car = Obstacle::spawn(&mut rng);
        let req = car.draw_request();
        assert_eq!(req.sprite, Sprite::Car(car.variant));
        assert_eq!(req.pos, car.pos);
        assert!(req.size.is_none());
    }

    proptest! {
        #[test]
        fn lane_only_changes_on_wrap(seed in any::<u64>(), steps in proptest::collection::vec(0.0f32..0.5, 1..200)) {
            let mut rng = seeded(seed);
            let mut car = Obstacle::spawn(&mut rng);
            for dt in steps {
                let before = car.clone();
                car.update(dt, &mut rng);
                let wrapped = before.pos.x + before.speed * dt > PLAYFIELD_WIDTH;
                if wrapped {
                    prop_assert_eq!(car.pos.x, ENEMY_SPAWN_X);
                } else {
                    prop_assert_eq!(car.pos.y, before.pos.y);
                    prop_assert_eq!(car.speed, before.speed);
                    prop_assert_eq!(car.variant, before.variant);
                }
                prop_assert!(is_lane(car.pos.y));
            }
        }
    }
}
