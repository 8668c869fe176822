//! The particle field animator.
//!
//! Owns the particle set, the surface and its size, the last executed frame
//! time and the pending frame handle. The host calls [`Animator::frame`]
//! whenever a frame it was asked for fires, and [`Animator::resize_requested`]
//! for each raw viewport resize event; everything else happens here.

use crate::config::FieldConfig;
use crate::console::{self, Timer};
use crate::field::ParticleField;
use crate::particle::Particle;
use crate::surface::{FrameScheduler, ResizeSource, Surface, SurfaceProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Animator<S, F, R>
where
    S: Surface,
    F: FrameScheduler,
    R: ResizeSource,
{
    config: FieldConfig,
    scheduler: F,
    resize_source: R,
    surface: Option<S>,
    width: f64,
    height: f64,
    field: ParticleField,
    rng: StdRng,
    running: bool,
    last_frame_ms: Option<f64>,
    pending_frame: Option<F::Handle>,
    // timestamp of the latest resize event not yet applied
    resize_pending_since: Option<f64>,
}

impl<S, F, R> Animator<S, F, R>
where
    S: Surface,
    F: FrameScheduler,
    R: ResizeSource,
{
    pub fn new(config: FieldConfig, scheduler: F, resize_source: R) -> Self {
        Self::with_rng(config, scheduler, resize_source, StdRng::from_entropy())
    }

    pub fn with_rng(config: FieldConfig, scheduler: F, resize_source: R, rng: StdRng) -> Self {
        Animator {
            config,
            scheduler,
            resize_source,
            surface: None,
            width: 0.0,
            height: 0.0,
            field: ParticleField::new(),
            rng,
            running: false,
            last_frame_ms: None,
            pending_frame: None,
            resize_pending_since: None,
        }
    }

    /// Sizes the surface to the viewport, creates the particles if there are
    /// none yet, listens for resizes and asks for the first frame.
    ///
    /// Does nothing while already running. When no surface can be acquired
    /// the animator stays inert.
    pub fn start<P>(&mut self, provider: &mut P)
    where
        P: SurfaceProvider<Surface = S>,
    {
        if self.running {
            return;
        }
        if self.surface.is_none() {
            match provider.acquire() {
                Some(surface) => self.surface = Some(surface),
                None => {
                    console::log("particle background disabled: no 2d drawing surface");
                    return;
                }
            }
        }

        self.on_resize();
        if self.field.is_empty() {
            let count = self.config.particle_count(self.width) as usize;
            self.field
                .populate(&mut self.rng, count, self.width, self.height, &self.config);
        }

        self.resize_source.subscribe();
        self.running = true;
        self.last_frame_ms = None;
        self.schedule();
    }

    /// Cancels the pending frame and stops listening for resizes. Safe to
    /// call at any time, any number of times.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.running {
            self.resize_source.unsubscribe();
            self.running = false;
        }
        self.resize_pending_since = None;
    }

    /// Matches the surface to the current viewport. Particles are untouched.
    pub fn on_resize(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            let (width, height) = surface.viewport_size();
            let width = width.max(0.0);
            let height = height.max(0.0);
            surface.set_size(width, height);
            self.width = width;
            self.height = height;
        }
    }

    /// Records a raw resize event. The surface is resized by the first frame
    /// at least `resize_settle_ms` after the latest such event.
    pub fn resize_requested(&mut self, timestamp: f64) {
        if self.running {
            self.resize_pending_since = Some(timestamp);
        }
    }

    /// Host callback for a delivered frame: applies a settled resize, runs
    /// one throttled step and asks for the next frame.
    pub fn frame(&mut self, timestamp: f64) {
        self.pending_frame = None;
        if !self.running {
            return;
        }

        if let Some(since) = self.resize_pending_since {
            if timestamp - since >= self.config.resize_settle_ms {
                self.resize_pending_since = None;
                self.on_resize();
            }
        }

        let _timer = if self.config.profile_frames {
            Some(Timer::new("Animator::frame"))
        } else {
            None
        };
        if let Err(err) = self.step(timestamp) {
            console::warn(&format!("particle frame failed: {:?}", err));
        }

        self.schedule();
    }

    /// One update and redraw, unless less than `frame_interval_ms` passed
    /// since the last executed step. Returns whether the step executed.
    pub fn step(&mut self, timestamp: f64) -> Result<bool, S::Error> {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => return Ok(false),
        };
        if let Some(last) = self.last_frame_ms {
            if timestamp - last < self.config.frame_interval_ms {
                return Ok(false);
            }
        }
        self.last_frame_ms = Some(timestamp);

        let (width, height) = (self.width, self.height);
        surface.clear(width, height)?;

        self.field.update(width, height);
        for particle in self.field.particles() {
            surface.fill_circle(particle.pos, particle.radius, particle.color)?;
        }

        let lines = self
            .field
            .connections(self.config.connection_distance, self.config.max_line_opacity);
        for line in lines {
            surface.stroke_line(
                line.from,
                line.to,
                self.config.line_width,
                self.config.connection_color,
                line.opacity,
            )?;
        }
        Ok(true)
    }

    fn schedule(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => self.pending_frame = Some(handle),
            None => {
                console::warn("particle background stopped: frame request refused");
                self.stop();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn surface_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn resize_source(&self) -> &R {
        &self.resize_source
    }

    pub fn pending_frame(&self) -> Option<F::Handle> {
        self.pending_frame
    }
}
