#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::config::Config;
use crate::input::{map_key, GAME_KEYS};
use error_iter::ErrorIter as _;
use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use simple_crossing::{Assets, Clock, LoadError, World, HEIGHT, WIDTH};
use std::time::Instant;
use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

mod config;
mod input;

/// Fallback PRNG seed when the OS cannot provide one.
const FIXED_SEED: (u64, u64) = (6_364_136_223_846_793_005, 1);

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load sprites")]
    Assets(#[from] LoadError),

    #[error("Unable to create the window")]
    Window(#[from] winit::error::OsError),

    #[error("Unable to create the pixel buffer")]
    Pixels(#[from] pixels::Error),
}

/// Uber-struct representing the entire game.
struct Game {
    /// Software renderer.
    pixels: Pixels,
    /// Crossing world.
    world: World,
    /// Event manager.
    input: WinitInputHelper,
    /// Frame timer for world updates.
    clock: Clock,
    /// Game pause state.
    paused: bool,
}

impl Game {
    fn new(pixels: Pixels, assets: Assets, debug: bool) -> Self {
        Self {
            pixels,
            world: World::new(assets, generate_seed(), debug),
            input: WinitInputHelper::new(),
            clock: Clock::new(Instant::now()),
            paused: false,
        }
    }

    fn update_controls(&mut self) {
        let pause =
            self.input.key_pressed(VirtualKeyCode::Pause) || self.input.key_pressed(VirtualKeyCode::P);
        if pause && self.world.is_playing() {
            self.paused = !self.paused;
            info!("Paused: {}", self.paused);
        }

        if self.paused {
            return;
        }

        for key in GAME_KEYS {
            if !self.input.key_pressed(key) {
                continue;
            }
            if let Some(input) = map_key(key) {
                let _ = self.world.handle_input(input);
            }
        }
    }

    fn update(&mut self) {
        // The clock keeps running while paused, so resuming does not jump ahead
        let dt = self.clock.tick(Instant::now());

        if !self.paused {
            self.world.update(dt);
        }
    }

    fn reset_game(&mut self) {
        self.paused = false;
        self.world.reset_game();
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::from_env();
    let assets = Assets::load(config.assets.as_deref())?;
    let event_loop = EventLoop::new();

    let window = {
        let min_size = LogicalSize::new(
            WIDTH as f64 * config.scale.min(1.0),
            HEIGHT as f64 * config.scale.min(1.0),
        );
        let scaled_size = LogicalSize::new(WIDTH as f64 * config.scale, HEIGHT as f64 * config.scale);
        WindowBuilder::new()
            .with_title("pixel crossing")
            .with_inner_size(scaled_size)
            .with_min_inner_size(min_size)
            .build(&event_loop)?
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH as u32, HEIGHT as u32, surface_texture)?
    };

    let mut game = Game::new(pixels, assets, config.debug);
    info!("Ready at {}x scale, debug: {}", config.scale, config.debug);

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            game.world.draw(game.pixels.frame_mut());
            if let Err(err) = game.pixels.render() {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if game.input.update(&event) {
            // Close events
            if game.input.key_pressed(VirtualKeyCode::Escape) || game.input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Reset game
            if game.input.key_pressed(VirtualKeyCode::R) {
                game.reset_game();
            }

            game.update_controls();

            // Resize the window
            if let Some(size) = game.input.window_resized() {
                if let Err(err) = game.pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            // Update the game logic and request redraw
            game.update();
            window.request_redraw();
        }
    });
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

/// Generate a pseudorandom seed for the game's PRNG.
fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    if let Err(err) = getrandom(&mut seed) {
        warn!("getrandom failed, using a fixed seed: {err}");
        return FIXED_SEED;
    }

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}
