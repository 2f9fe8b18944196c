use glam::Vec2;
use rand::prelude::*;

use crate::constants::{
    MAX_SPEED, OPACITY_HIGH, OPACITY_LOW, OPACITY_STEP, PALETTE, SPAWN_RADIUS_MAX,
    SPAWN_RADIUS_MIN, SPAWN_SPEED_MAX,
};
use crate::core::surface::Surface;

/// A single simulated point. Created once at field init, never destroyed;
/// leaving the canvas wraps to the opposite edge instead of respawning.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Index into [`PALETTE`], chosen at spawn and never changed.
    pub palette_index: usize,
    pub opacity: f32,
    /// +1.0 growing, -1.0 shrinking; flips at the oscillator bounds.
    pub opacity_dir: f32,
}

impl Particle {
    /// Randomized initial state. This is the only randomness a particle ever
    /// sees; everything after spawn is deterministic.
    pub fn spawn(bounds: Vec2, rng: &mut StdRng) -> Self {
        Self {
            position: Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y)),
            velocity: Vec2::new(
                rng.gen_range(-SPAWN_SPEED_MAX..SPAWN_SPEED_MAX),
                rng.gen_range(-SPAWN_SPEED_MAX..SPAWN_SPEED_MAX),
            ),
            radius: rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX),
            palette_index: rng.gen_range(0..PALETTE.len()),
            opacity: rng.gen_range(OPACITY_LOW..OPACITY_HIGH),
            opacity_dir: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        }
    }

    /// One tick of motion: integrate position, wrap each axis independently
    /// into `[0, bound)`, and advance the opacity oscillator.
    pub fn update(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        self.position.x = wrap_axis(self.position.x, bounds.x);
        self.position.y = wrap_axis(self.position.y, bounds.y);

        self.opacity += OPACITY_STEP * self.opacity_dir;
        if self.opacity > OPACITY_HIGH {
            self.opacity_dir = -1.0;
        } else if self.opacity < OPACITY_LOW {
            self.opacity_dir = 1.0;
        }
        self.opacity = self.opacity.clamp(0.0, 1.0);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(
            self.position,
            self.radius,
            PALETTE[self.palette_index],
            self.opacity,
        );
    }

    /// Adds an impulse of `magnitude` along `direction`, then clamps the
    /// resulting speed to [`MAX_SPEED`]. A zero-length direction (pointer
    /// exactly on the particle) contributes nothing rather than a NaN.
    pub fn apply_force(&mut self, direction: Vec2, magnitude: f32) {
        self.velocity = (self.velocity + direction.normalize_or_zero() * magnitude)
            .clamp_length_max(MAX_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

fn wrap_axis(value: f32, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can return `bound` itself when `value` is a tiny negative
    // number, which would violate the half-open interval.
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}
