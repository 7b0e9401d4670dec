//! Texture loading and per-sprite frame state.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::asset::Asset;
use crate::error::{GameResult, TextureError};
use crate::texture::animated::FrameStepper;

/// A drawable sprite: one or more texture frames plus the stepper that picks
/// the current one.
pub struct Sprite {
    frames: Vec<Texture>,
    stepper: FrameStepper,
}

impl Sprite {
    /// A sprite cycling through `frames`, each shown for the matching delay
    /// (seconds).
    pub fn animated(frames: Vec<Texture>, delays: Vec<f32>) -> GameResult<Self> {
        if frames.is_empty() || frames.len() != delays.len() {
            return Err(TextureError::FrameMismatch {
                frames: frames.len(),
                delays: delays.len(),
            }
            .into());
        }
        Ok(Self {
            frames,
            stepper: FrameStepper::new(delays),
        })
    }

    /// Loads a static image as a single-frame sprite.
    pub fn from_asset(texture_creator: &TextureCreator<WindowContext>, asset: Asset) -> GameResult<Self> {
        let bytes = asset.get_bytes()?;
        let texture = texture_creator
            .load_texture_bytes(&bytes)
            .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", asset.path())))?;

        Ok(Self {
            frames: vec![texture],
            stepper: FrameStepper::single(),
        })
    }

    /// Credits frame time to the stepper. Static sprites ignore it.
    pub fn tick(&mut self, dt: f32) {
        self.stepper.tick(dt);
    }

    pub fn current(&self) -> &Texture {
        &self.frames[self.stepper.current_frame()]
    }
}

/// Non-send resource bundling every texture the render system draws.
pub struct SpriteBank {
    pub background: Sprite,
    pub player: Sprite,
    pub ball: Sprite,
}

impl SpriteBank {
    pub fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        Ok(Self {
            background: Sprite::from_asset(texture_creator, Asset::Background)?,
            player: Sprite::from_asset(texture_creator, Asset::Player)?,
            ball: Sprite::from_asset(texture_creator, Asset::Ball)?,
        })
    }
}
