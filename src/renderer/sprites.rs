//! Sprite keys and draw requests
//!
//! The sim never touches pixels. Entities describe themselves as a
//! `DrawRequest` and the host resolves the sprite to an image.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Variant;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Chicken,
    ChickenDead,
    Car(Variant),
    Heart,
}

impl Sprite {
    pub const ALL: [Sprite; 6] = [
        Sprite::Chicken,
        Sprite::ChickenDead,
        Sprite::Car(Variant::A),
        Sprite::Car(Variant::B),
        Sprite::Car(Variant::C),
        Sprite::Heart,
    ];

    /// Image path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Chicken => "images/chicken.png",
            Sprite::ChickenDead => "images/chicken-dead.png",
            Sprite::Car(Variant::A) => "images/enemy-car-1.png",
            Sprite::Car(Variant::B) => "images/enemy-car-2.png",
            Sprite::Car(Variant::C) => "images/enemy-car-3.png",
            Sprite::Heart => "images/heart.png",
        }
    }
}

/// One image to draw at a position; `size` scales it, `None` draws native size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub sprite: Sprite,
    pub pos: Vec2,
    pub size: Option<Vec2>,
}

impl DrawRequest {
    pub fn at(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            size: None,
        }
    }

    pub fn sized(sprite: Sprite, pos: Vec2, size: Vec2) -> Self {
        Self {
            sprite,
            pos,
            size: Some(size),
        }
    }
}
