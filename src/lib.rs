//! Decorative layer of the tribute page, compiled to WebAssembly: the
//! particle field behind the page, the time-together counter and the layout
//! of the floating hearts and sparkles.
//!
//! The page calls [`initialize`] once, then creates a [`ParticleBackground`]
//! for its canvas and calls `start()` when the canvas is mounted and `free()`
//! when it goes away.

mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod console;
pub mod decor;
pub mod field;
pub mod particle;
pub mod surface;
pub mod together;
pub mod web;

use wasm_bindgen::prelude::*;

pub use animator::Animator;
pub use color::Color;
pub use config::FieldConfig;
pub use field::{connection_opacity, Connection, ParticleField};
pub use particle::Particle;
pub use together::TimeTogether;
pub use web::ParticleBackground;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
