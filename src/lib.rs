//! Chicken Crossing - a road-crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (traffic, avatar movement, collisions, game state)
//! - `renderer`: Sprite atlas and draw-list rendering through a host canvas
//! - `platform`: Browser/native platform abstraction (key mapping)

pub mod platform;
pub mod renderer;
pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame step used for the first frame and by headless runs
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta fed into the sim (tab switches produce huge gaps)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 505.0;
    pub const PLAYFIELD_HEIGHT: f32 = 584.0;

    /// Number of cars on the road
    pub const ENEMY_COUNT: usize = 5;
    /// Lives at the start of a run
    pub const LIFE_COUNT: u32 = 4;

    /// Cars (re)enter from off-screen left
    pub const ENEMY_SPAWN_X: f32 = -200.0;
    /// Car speed range in px/s (min inclusive, max exclusive)
    pub const MIN_SPEED: u32 = 50;
    pub const MAX_SPEED: u32 = 350;

    /// Lanes start at this y and are MOVE_Y apart
    pub const LANE_OFFSET: f32 = 90.0;
    pub const LANE_COUNT: u32 = 3;

    /// Grid step per key press
    pub const MOVE_X: f32 = 101.0;
    pub const MOVE_Y: f32 = 83.0;

    /// Avatar start position (bottom middle of the grass)
    pub const START_X: f32 = 202.0;
    pub const START_Y: f32 = 422.0;
    /// Crossing above this y scores
    pub const TOP_BOUNDARY: f32 = 90.0;
    pub const SCORE_PER_CROSSING: u32 = 10;

    /// Hitbox shared by cars and the avatar
    pub const ENTITY_WIDTH: f32 = 90.0;
    pub const ENTITY_HEIGHT: f32 = 50.0;

    /// Seconds the dead chicken stays on screen before respawning
    pub const RESPAWN_DELAY: f32 = 0.15;

    /// Heart indicators along the top edge
    pub const HEART_FIRST_X: f32 = 10.0;
    pub const HEART_SPACING: f32 = 40.0;
    pub const HEART_Y: f32 = -8.0;
    pub const HEART_WIDTH: f32 = 101.0 / 3.0;
    pub const HEART_HEIGHT: f32 = 171.0 / 3.0;
}

/// Lane y coordinate for lane index `k` (0 = top lane)
#[inline]
pub fn lane_y(k: u32) -> f32 {
    consts::LANE_OFFSET + k as f32 * consts::MOVE_Y
}

/// Right-most x the avatar can reach while staying on the move grid
#[inline]
pub fn avatar_max_x() -> f32 {
    use consts::*;
    let columns = ((PLAYFIELD_WIDTH - ENTITY_WIDTH) / MOVE_X).floor();
    columns * MOVE_X
}

/// Avatar spawn point
#[inline]
pub fn start_pos() -> Vec2 {
    Vec2::new(consts::START_X, consts::START_Y)
}
