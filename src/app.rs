use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;
use tracing::{info, warn};

use crate::constants::{ARENA_SIZE, LOOP_TIME};
use crate::game::Game;

/// Owns the SDL context objects and drives the frame-paced game loop.
pub struct App {
    game: Game,
    last_tick: Instant,
    // Kept alive for the duration of the process; textures are created from
    // this and SDL_image must stay initialized while they are in use.
    _texture_creator: TextureCreator<WindowContext>,
    _image_context: Sdl2ImageContext,
}

impl App {
    /// Initializes SDL, the window, and the game world. Any failure here is
    /// fatal; there is no degraded mode.
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let image_context = sdl2::image::init(InitFlag::PNG).map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Dodge!", ARENA_SIZE.x as u32, ARENA_SIZE.y as u32)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(ARENA_SIZE.x as u32, ARENA_SIZE.y as u32)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let game = Game::new(canvas, &texture_creator, event_pump)?;

        Ok(Self {
            game,
            last_tick: Instant::now(),
            _texture_creator: texture_creator,
            _image_context: image_context,
        })
    }

    /// Runs frames until an exit is requested.
    pub fn run(&mut self) {
        info!("Starting game loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);
        while self.frame() {}
        info!("Game loop ended");
    }

    fn frame(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        if self.game.tick(dt) {
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
