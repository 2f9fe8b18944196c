use glam::Vec2;
use web_sys as web;

use crate::core::DeviceHint;

/// Keeps the canvas backing store at CSS size * devicePixelRatio so drawing
/// stays crisp on high-density screens.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let dpr = window.device_pixel_ratio();
    let width = (f64::from(canvas.client_width()) * dpr) as u32;
    let height = (f64::from(canvas.client_height()) * dpr) as u32;
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Capability signals read once at init; `hardwareConcurrency` reports 0 on
/// hosts that refuse to expose it.
pub fn device_hint(window: &web::Window) -> DeviceHint {
    let cores = window.navigator().hardware_concurrency();
    DeviceHint {
        hardware_concurrency: (cores > 0.0).then(|| cores as u32),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

/// Pointer position in backing-store pixels (the field's coordinate space),
/// accounting for the canvas CSS rect and DPR scaling.
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        f64::from(canvas.width()) / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        f64::from(canvas.height()) / rect.height()
    } else {
        1.0
    };
    Vec2::new(
        ((f64::from(ev.client_x()) - rect.left()) * scale_x) as f32,
        ((f64::from(ev.client_y()) - rect.top()) * scale_y) as f32,
    )
}
