//! The player-controlled chicken

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::renderer::{DrawRequest, Sprite};
use crate::{avatar_max_x, start_pos};

/// Logical keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Space: restart after game over
    Confirm,
}

/// Which chicken sprite to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Look {
    #[default]
    Normal,
    Dead,
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub score: u32,
    pub look: Look,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            pos: start_pos(),
            size: Vec2::new(ENTITY_WIDTH, ENTITY_HEIGHT),
            lives: LIFE_COUNT,
            score: 0,
            look: Look::Normal,
        }
    }
}

impl Avatar {
    /// Move one grid step. Left, right and down are clamped to the playfield;
    /// up is left unclamped so the caller can detect the crossing.
    /// `Confirm` is not a movement and leaves the avatar in place.
    pub fn step(&mut self, key: Key) {
        match key {
            Key::Up => self.pos.y -= MOVE_Y,
            Key::Down => self.pos.y = (self.pos.y + MOVE_Y).min(START_Y),
            Key::Left => self.pos.x = (self.pos.x - MOVE_X).max(0.0),
            Key::Right => {
                self.pos.x += MOVE_X;
                if self.pos.x > PLAYFIELD_WIDTH - self.size.x {
                    self.pos.x = avatar_max_x();
                }
            }
            Key::Confirm => {}
        }
    }

    /// Made it past the last lane
    pub fn crossed(&self) -> bool {
        self.pos.y < TOP_BOUNDARY
    }

    /// Back to the start square with the normal sprite
    pub fn reset(&mut self) {
        self.pos = start_pos();
        self.look = Look::Normal;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn draw_request(&self) -> DrawRequest {
        let sprite = match self.look {
            Look::Normal => Sprite::Chicken,
            Look::Dead => Sprite::ChickenDead,
        };
        DrawRequest::at(sprite, self.pos)
    }
}
