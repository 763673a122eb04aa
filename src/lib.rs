//! Starry Navigator core crate.
//!
//! Side-scrolling platformer prototype: a player rectangle, three parallax
//! background layers and two static platforms on a fixed 800x450 logical screen,
//! scaled to fit the browser window. Keyboard (arrows + space) and touch regions
//! drive the player; gravity and top-landing collision do the rest.
//!
//! Everything except [`web`] is plain Rust and runs under `cargo test` on the host.
//! `start_game()` is the JS entrypoint.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod render;
pub mod viewport;
mod web;

pub use config::{GameConfig, Palette};
pub use error::GameError;
pub use game::Game;
pub use geometry::Rect;
pub use viewport::Viewport;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::launch(GameConfig::default())?;
    Ok(())
}

/// Start with a JSON config; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    log::info!("loaded custom config: {config:?}");
    web::launch(config)?;
    Ok(())
}
