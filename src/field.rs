// The fixed set of particles drifting over the surface and the pairwise scan
// that decides which of them are joined by a line.

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub, Vector2};

/// A line to draw between particles `a` and `b` (indices into the field, `a < b`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub opacity: f64,
}

/// Opacity falls off linearly from `max_opacity` at distance 0 to 0 at `threshold`.
pub fn connection_opacity(distance: f64, threshold: f64, max_opacity: f64) -> f64 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold) * max_opacity
}

#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> ParticleField {
        ParticleField { particles: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Fills an empty field with `count` random particles. A field that
    /// already has particles is left untouched; returns whether it populated.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> bool {
        if !self.particles.is_empty() {
            return false;
        }
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, width, height, config));
        }
        true
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Advances every particle by one step in creation order.
    pub fn update(&mut self, width: f64, height: f64) {
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Every pair closer than the threshold, outer index ascending and inner
    /// index strictly greater.
    pub fn connections(&self, threshold: f64, max_opacity: f64) -> Vec<Connection> {
        let mut lines = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                let distance = vec2_len(vec2_sub(pa.pos, pb.pos));
                if distance < threshold {
                    lines.push(Connection {
                        a,
                        b,
                        from: pa.pos,
                        to: pb.pos,
                        opacity: connection_opacity(distance, threshold, max_opacity),
                    });
                }
            }
        }
        lines
    }
}
