// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Random particle somewhere on a width x height surface, drifting slowly
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let radius = config.min_radius + rng.gen::<f64>() * (config.max_radius - config.min_radius);
        let color = config
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(config.connection_color);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    /// Move by one step of velocity, teleporting to the opposite edge on each
    /// axis that left `[0, extent)`.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        self.pos[0] = wrap(self.pos[0], width);
        self.pos[1] = wrap(self.pos[1], height);
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if value >= extent {
        0.0
    } else if value < 0.0 {
        (extent - 1.0).max(0.0)
    } else {
        value
    }
}
