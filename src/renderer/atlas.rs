//! Loaded sprite images and frame rendering
//!
//! A sprite that failed to load is remembered as a failure. It is reported
//! once and then simply skipped when drawing, so one broken image never
//! stops the frame.

use std::collections::HashMap;

use glam::Vec2;

use super::sprites::{DrawRequest, Sprite};

/// Sprite resource failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    /// The image element could not be created
    #[error("failed to create image for {path}: {reason}")]
    Create { path: &'static str, reason: String },

    /// The browser reported a load error (missing file, bad format)
    #[error("failed to load image {path}")]
    Load { path: &'static str },

    /// Drawing was requested before the image was registered
    #[error("sprite {0:?} was never registered")]
    Missing(Sprite),
}

/// Host drawing surface
pub trait Canvas {
    type Image;

    /// Draw `image` with its top-left corner at `pos`, scaled to `size` if given
    fn draw_image(&mut self, image: &Self::Image, pos: Vec2, size: Option<Vec2>);
}

/// Sprite to image lookup, generic over the host's image type
#[derive(Debug)]
pub struct SpriteAtlas<I> {
    images: HashMap<Sprite, I>,
    failures: HashMap<Sprite, AssetError>,
}

impl<I> Default for SpriteAtlas<I> {
    fn default() -> Self {
        Self {
            images: HashMap::new(),
            failures: HashMap::new(),
        }
    }
}

impl<I> SpriteAtlas<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of loading `sprite`
    pub fn register(&mut self, sprite: Sprite, image: Result<I, AssetError>) {
        match image {
            Ok(image) => {
                self.failures.remove(&sprite);
                self.images.insert(sprite, image);
            }
            Err(err) => self.mark_failed(sprite, err),
        }
    }

    /// Drop a sprite's image after a late failure (e.g. async load error)
    pub fn mark_failed(&mut self, sprite: Sprite, err: AssetError) {
        if self.failures.contains_key(&sprite) {
            return;
        }
        log::warn!("{err}; {sprite:?} will not be drawn");
        self.images.remove(&sprite);
        self.failures.insert(sprite, err);
    }

    pub fn get(&self, sprite: Sprite) -> Result<&I, AssetError> {
        if let Some(image) = self.images.get(&sprite) {
            return Ok(image);
        }
        Err(self
            .failures
            .get(&sprite)
            .cloned()
            .unwrap_or(AssetError::Missing(sprite)))
    }

    pub fn images(&self) -> impl Iterator<Item = (&Sprite, &I)> {
        self.images.iter()
    }

    /// Failures so far, for a HUD warning
    pub fn failures(&self) -> impl Iterator<Item = &AssetError> {
        self.failures.values()
    }
}

/// Draw a list of requests, skipping any sprite that has no image.
/// Returns how many requests were actually drawn.
pub fn render_frame<C: Canvas>(
    canvas: &mut C,
    atlas: &SpriteAtlas<C::Image>,
    requests: &[DrawRequest],
) -> usize {
    let mut drawn = 0;
    for req in requests {
        if let Ok(image) = atlas.get(req.sprite) {
            canvas.draw_image(image, req.pos, req.size);
            drawn += 1;
        }
    }
    drawn
}
