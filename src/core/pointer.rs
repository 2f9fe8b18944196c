use glam::Vec2;

use crate::constants::{POINTER_FORCE, POINTER_RADIUS, POINTER_SAMPLE_INTERVAL_MS};
use crate::core::particle::Particle;

/// Last accepted pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
    pub last_sample_ms: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            active: false,
            last_sample_ms: f64::NEG_INFINITY,
        }
    }
}

/// Throttled input sampler: Idle until a sample is accepted, Active until the
/// pointer leaves. At most one sample per [`POINTER_SAMPLE_INTERVAL_MS`] is
/// acted on, so force application cost is bounded regardless of how fast the
/// input device reports movement.
#[derive(Debug, Default)]
pub struct PointerForceController {
    state: PointerState,
}

impl PointerForceController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw pointer position if the sampling interval has elapsed,
    /// then nudges every particle within [`POINTER_RADIUS`] toward the
    /// pointer, scaled by `(radius - dist) / radius` so closer particles
    /// feel a stronger pull. Returns whether the sample was accepted.
    pub fn on_pointer_move(
        &mut self,
        position: Vec2,
        now_ms: f64,
        particles: &mut [Particle],
    ) -> bool {
        if now_ms - self.state.last_sample_ms < POINTER_SAMPLE_INTERVAL_MS {
            return false;
        }
        self.state = PointerState {
            position,
            active: true,
            last_sample_ms: now_ms,
        };

        let radius_sq = POINTER_RADIUS * POINTER_RADIUS;
        for particle in particles {
            let toward_pointer = position - particle.position;
            let dist_sq = toward_pointer.length_squared();
            if dist_sq >= radius_sq {
                continue;
            }
            let falloff = (POINTER_RADIUS - dist_sq.sqrt()) / POINTER_RADIUS;
            // A zero-length direction falls out as zero force inside
            // apply_force, so a coincident pointer never produces a NaN.
            particle.apply_force(toward_pointer, POINTER_FORCE * falloff);
        }
        true
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.active = false;
    }

    pub fn state(&self) -> PointerState {
        self.state
    }
}
