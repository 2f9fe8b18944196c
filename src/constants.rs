/// Simulation and rendering tuning constants.
///
/// These constants express intended behavior (cell sizes, clamp limits,
/// oscillator bounds) and keep magic numbers out of the hot loop.
// Spatial grid cell size in backing-store pixels. Must stay larger than
// CONNECT_DIST or the 3x3 neighborhood search misses valid pairs.
pub const CELL_SIZE: f32 = 150.0;

// The grid is rebuilt every N ticks; between rebuilds it is allowed to be
// stale because per-tick displacement is bounded by MAX_SPEED.
pub const GRID_REBUILD_INTERVAL: u64 = 3;

// Connection lines are drawn between particles closer than this.
pub const CONNECT_DIST: f32 = 120.0;
// Peak alpha of a connection line (at zero distance).
pub const CONNECT_ALPHA: f32 = 0.35;
pub const CONNECT_LINE_WIDTH: f64 = 1.0;

// Hard cap on particle speed (units per tick). Prevents runaway
// acceleration under sustained pointer proximity.
pub const MAX_SPEED: f32 = 1.5;

// Opacity "breathing" oscillator
pub const OPACITY_STEP: f32 = 0.005;
pub const OPACITY_LOW: f32 = 0.15;
pub const OPACITY_HIGH: f32 = 0.6;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 100.0;
pub const POINTER_FORCE: f32 = 0.25;
// Raw pointer events are sampled at most once per interval, so force
// application cost is bounded regardless of input device report rate.
pub const POINTER_SAMPLE_INTERVAL_MS: f64 = 32.0;

// Particle spawn ranges
pub const SPAWN_RADIUS_MIN: f32 = 1.0;
pub const SPAWN_RADIUS_MAX: f32 = 2.5;
pub const SPAWN_SPEED_MAX: f32 = 0.4;

// Adaptive quality: particle count = clamp(area / divisor, min, max),
// with a sparser profile on constrained devices.
pub const AREA_PER_PARTICLE: f32 = 9_000.0;
pub const AREA_PER_PARTICLE_LOW_POWER: f32 = 16_000.0;
pub const MIN_PARTICLES: usize = 30;
pub const MIN_PARTICLES_LOW_POWER: usize = 16;
pub const MAX_PARTICLES: usize = 140;
pub const MAX_PARTICLES_LOW_POWER: usize = 70;
pub const LOW_POWER_MAX_CONCURRENCY: u32 = 4;
pub const LOW_POWER_MIN_PIXEL_RATIO: f64 = 3.0;

// Host page contract: the canvas element the shell attaches to.
pub const CANVAS_ID: &str = "particle-canvas";

// Three-entry palette; each particle picks one channel at spawn.
pub const PALETTE: [[u8; 3]; 3] = [
    [96, 165, 250],  // soft blue
    [167, 139, 250], // violet
    [45, 212, 191],  // teal
];
pub const CONNECT_COLOR: [u8; 3] = [148, 163, 184]; // slate
