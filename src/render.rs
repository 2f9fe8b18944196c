use glam::Vec2;
use web_sys as web;

use crate::constants::CONNECT_LINE_WIDTH;
use crate::core::Surface;

/// `Surface` backed by the canvas 2d context the host handed us.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&css_rgba(color, alpha));
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.set_line_width(CONNECT_LINE_WIDTH);
        self.ctx.set_stroke_style_str(&css_rgba(color, alpha));
        self.ctx.stroke();
    }
}

fn css_rgba(color: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color[0],
        color[1],
        color[2],
        alpha.clamp(0.0, 1.0)
    )
}
