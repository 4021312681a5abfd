//! Rendering module
//!
//! Host-agnostic: the browser host implements `Canvas` on a 2D context,
//! tests implement it with a recorder.

pub mod atlas;
pub mod sprites;

pub use atlas::{AssetError, Canvas, SpriteAtlas, render_frame};
pub use sprites::{DrawRequest, Sprite};
