use glam::Vec2;

/// Painting seam between the simulation and whatever rasterizes it.
///
/// The wasm shell backs this with a `CanvasRenderingContext2d`; tests use a
/// recording double. Colors are plain RGB bytes plus an alpha in `[0, 1]` so
/// the core never builds CSS strings itself.
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: [u8; 3], alpha: f32);
}
