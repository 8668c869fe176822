// Tunable constants of the particle background. Numeric fields are exposed to
// JS so the page can adjust them before the animation is created.

use crate::color::{Color, CONNECTION_COLOR, PALETTE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Upper bound on the number of particles.
    pub max_particles: u32,
    /// Viewport pixels per particle when sizing the field.
    pub width_per_particle: f64,
    /// Particles closer than this are joined by a line.
    pub connection_distance: f64,
    /// Line opacity for two coincident particles.
    pub max_line_opacity: f64,
    pub line_width: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Per-axis bound of particle speed, in surface units per executed frame.
    pub max_speed: f64,
    /// Minimum time between two executed frames.
    pub frame_interval_ms: f64,
    /// Quiet time after the last resize event before the surface is resized.
    pub resize_settle_ms: f64,
    /// Wrap every executed frame in a console timer.
    pub profile_frames: bool,
    #[wasm_bindgen(skip)]
    pub palette: Vec<Color>,
    #[wasm_bindgen(skip)]
    pub connection_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 50,
            width_per_particle: 20.0,
            connection_distance: 80.0,
            max_line_opacity: 0.3,
            line_width: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
            max_speed: 0.15,
            frame_interval_ms: 33.0,
            resize_settle_ms: 100.0,
            profile_frames: false,
            palette: PALETTE.to_vec(),
            connection_color: CONNECTION_COLOR,
        }
    }
}

#[wasm_bindgen]
impl FieldConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldConfig {
        FieldConfig::default()
    }

    /// `min(max_particles, floor(viewport_width / width_per_particle))`.
    /// Negative, zero and non-finite widths give an empty field.
    pub fn particle_count(&self, viewport_width: f64) -> u32 {
        if !viewport_width.is_finite() || self.width_per_particle <= 0.0 {
            return 0;
        }
        let by_width = (viewport_width / self.width_per_particle).floor().max(0.0);
        if by_width >= self.max_particles as f64 {
            self.max_particles
        } else {
            by_width as u32
        }
    }
}
