use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::ParticleField;
use crate::render::CanvasSurface;

/// Everything one animation frame touches. Shared with the event listeners
/// through `Rc<RefCell<..>>`; the RAF callback is the only consumer, so
/// listener mutations are always observed whole at the next tick.
pub struct FrameContext {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.surface.clear(width, height);
        self.field.tick(&mut self.surface);
    }
}

/// Self-rescheduling requestAnimationFrame loop. Runs until the page tears
/// the canvas down; the closure is intentionally leaked for the lifetime of
/// the page, as is usual for a persistent background animation.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
