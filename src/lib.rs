//! Ambient particle background for a canvas element.
//!
//! The simulation core (`core`) is target-independent and tested natively;
//! the wasm shell below wires it to a `CanvasRenderingContext2d`, the
//! browser's frame scheduler and its pointer/resize/accessibility signals.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
use {
    crate::constants::CANVAS_ID,
    crate::core::ParticleField,
    std::cell::RefCell,
    std::rc::Rc,
    wasm_bindgen::prelude::*,
    wasm_bindgen::JsCast,
    web_sys as web,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    // Collaborator failures (missing canvas, no 2d context) are fatal to
    // this component; surface them to the host instead of swallowing.
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&format!("{:?}", e)));
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Backing store tracks CSS size * devicePixelRatio before the field
    // reads its dimensions.
    dom::sync_canvas_backing_size(&canvas);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("2d context unavailable: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let hint = dom::device_hint(&window);
    let reduced_motion = dom::prefers_reduced_motion(&window);
    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        hint,
        reduced_motion,
        seed,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        surface: render::CanvasSurface::new(ctx),
        canvas,
    }));
    events::wire_event_handlers(&frame_ctx);
    frame::start_loop(frame_ctx);
    Ok(())
}
