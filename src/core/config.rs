use crate::constants::{
    AREA_PER_PARTICLE, AREA_PER_PARTICLE_LOW_POWER, CELL_SIZE, LOW_POWER_MAX_CONCURRENCY,
    LOW_POWER_MIN_PIXEL_RATIO, MAX_PARTICLES, MAX_PARTICLES_LOW_POWER, MIN_PARTICLES,
    MIN_PARTICLES_LOW_POWER,
};

/// Capability signals sampled from the host environment once at init.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeviceHint {
    /// `navigator.hardwareConcurrency`, when the host exposes it.
    pub hardware_concurrency: Option<u32>,
    pub device_pixel_ratio: f64,
}

impl DeviceHint {
    /// Low-core devices and very high-density mobile screens both get the
    /// sparser particle profile.
    pub fn is_constrained(&self) -> bool {
        self.hardware_concurrency
            .is_some_and(|cores| cores <= LOW_POWER_MAX_CONCURRENCY)
            || self.device_pixel_ratio >= LOW_POWER_MIN_PIXEL_RATIO
    }
}

/// Resolved once from a [`DeviceHint`] and consumed uniformly afterwards,
/// so no capability flag is ever re-checked inside the tick loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub cell_size: f32,
    pub connections_enabled: bool,
}

impl FieldConfig {
    pub fn resolve(width: f32, height: f32, hint: DeviceHint, reduced_motion: bool) -> Self {
        let (area_per_particle, min, max) = if hint.is_constrained() {
            (
                AREA_PER_PARTICLE_LOW_POWER,
                MIN_PARTICLES_LOW_POWER,
                MAX_PARTICLES_LOW_POWER,
            )
        } else {
            (AREA_PER_PARTICLE, MIN_PARTICLES, MAX_PARTICLES)
        };
        let area = (width * height).max(0.0);
        let particle_count = ((area / area_per_particle) as usize).clamp(min, max);
        Self {
            particle_count,
            cell_size: CELL_SIZE,
            connections_enabled: !reduced_motion,
        }
    }
}
