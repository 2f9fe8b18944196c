use glam::Vec2;
use rand::prelude::*;

use crate::constants::{CONNECT_ALPHA, CONNECT_COLOR, CONNECT_DIST, GRID_REBUILD_INTERVAL};
use crate::core::config::{DeviceHint, FieldConfig};
use crate::core::grid::SpatialGrid;
use crate::core::particle::Particle;
use crate::core::pointer::PointerForceController;
use crate::core::surface::Surface;

/// Owns the particle set, the spatial grid and the pointer controller, and
/// advances the whole simulation one frame at a time.
pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    grid: SpatialGrid,
    pointer: PointerForceController,
    tick_count: u64,
}

impl ParticleField {
    /// Resolves the adaptive-quality config from the device hint, then
    /// batch-spawns the whole particle population from one seeded RNG.
    /// Count is fixed for the lifetime of the field.
    pub fn new(
        width: f32,
        height: f32,
        hint: DeviceHint,
        reduced_motion: bool,
        seed: u64,
    ) -> Self {
        let config = FieldConfig::resolve(width, height, hint, reduced_motion);
        // A hidden or pre-layout canvas can report zero size; clamp so the
        // spawn ranges stay non-empty and wrapping keeps a valid interval.
        let bounds = Vec2::new(width, height).max(Vec2::ONE);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(bounds, &mut rng))
            .collect();
        log::info!(
            "[field] {}x{} particles={} connections={}",
            width,
            height,
            config.particle_count,
            config.connections_enabled
        );
        Self {
            grid: SpatialGrid::new(config.cell_size),
            config,
            bounds,
            particles,
            pointer: PointerForceController::new(),
            tick_count: 0,
        }
    }

    /// Advances the simulation by one frame and paints it: update + draw
    /// every particle, rebuild the grid on its cadence, then the connection
    /// pass. Callable indefinitely; each call produces the next
    /// deterministic frame from current state.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        for particle in &mut self.particles {
            particle.update(self.bounds);
            particle.draw(surface);
        }

        // tick 0 lands here too, so the grid is always built before the
        // first connection pass.
        if self.tick_count % GRID_REBUILD_INTERVAL == 0 {
            self.grid
                .rebuild(self.particles.iter().map(|p| p.position));
        }

        if self.config.connections_enabled {
            self.draw_connections(surface);
        }

        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Neighbor-restricted connection rendering. Squared distance rejects
    /// far pairs before the sqrt; line alpha falls off linearly so closer
    /// pairs read as stronger links. Each unordered pair is drawn once.
    fn draw_connections(&self, surface: &mut impl Surface) {
        let connect_dist_sq = CONNECT_DIST * CONNECT_DIST;
        for (i, particle) in self.particles.iter().enumerate() {
            for j in self.grid.neighbors_of(particle.position) {
                // The neighborhood includes `i` itself and yields every pair
                // twice; keeping only j > i draws each segment exactly once.
                if j <= i {
                    continue;
                }
                let other = &self.particles[j];
                let dist_sq = particle.position.distance_squared(other.position);
                if dist_sq >= connect_dist_sq {
                    continue;
                }
                let alpha = CONNECT_ALPHA * (1.0 - dist_sq.sqrt() / CONNECT_DIST);
                surface.stroke_line(particle.position, other.position, CONNECT_COLOR, alpha);
            }
        }
    }

    /// Forwarded from the host's pointer-move listener. Forces land on
    /// velocities immediately and are integrated by the next tick's update.
    pub fn on_pointer_move(&mut self, position: Vec2, now_ms: f64) {
        self.pointer
            .on_pointer_move(position, now_ms, &mut self.particles);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
    }

    /// New surface dimensions from the host. Out-of-bounds particles wrap on
    /// their next update; the grid cell size is independent of canvas size,
    /// so nothing else needs recomputing.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height).max(Vec2::ONE);
    }

    /// Reduced-motion toggle: suppresses connection rendering only. Particle
    /// motion and drawing continue.
    pub fn set_connections_enabled(&mut self, enabled: bool) {
        self.config.connections_enabled = enabled;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer_state(&self) -> crate::core::pointer::PointerState {
        self.pointer.state()
    }
}
