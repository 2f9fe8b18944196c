pub mod config;
pub mod field;
pub mod grid;
pub mod particle;
pub mod pointer;
pub mod surface;

pub use config::{DeviceHint, FieldConfig};
pub use field::ParticleField;
pub use grid::SpatialGrid;
pub use particle::Particle;
pub use pointer::{PointerForceController, PointerState};
pub use surface::Surface;
