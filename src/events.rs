use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::FrameContext;

/// Wires every host signal the field consumes: pointer move/leave, window
/// resize and the reduced-motion preference. Listener closures are forgotten
/// so they live as long as the page, matching the frame loop.
pub fn wire_event_handlers(frame_ctx: &Rc<RefCell<FrameContext>>) {
    wire_pointer_move(frame_ctx);
    wire_pointer_leave(frame_ctx);
    wire_resize(frame_ctx);
    wire_reduced_motion(frame_ctx);
}

fn wire_pointer_move(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let canvas = frame_ctx.borrow().canvas.clone();
    let canvas_for_coords = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = dom::pointer_canvas_px(&ev, &canvas_for_coords);
        // The event timestamp drives the controller's sampling throttle.
        ctx.borrow_mut().field.on_pointer_move(pos, ev.time_stamp());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_leave(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let canvas = frame_ctx.borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        ctx.borrow_mut().field.on_pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        let canvas = ctx.borrow().canvas.clone();
        dom::sync_canvas_backing_size(&canvas);
        // No redistribution: out-of-bounds particles wrap on their next
        // update, and the grid cell size is canvas-independent.
        ctx.borrow_mut()
            .field
            .resize(canvas.width() as f32, canvas.height() as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_reduced_motion(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(Some(query)) = window.match_media("(prefers-reduced-motion: reduce)") else {
        return;
    };
    let ctx = frame_ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        log::info!("[events] reduced motion: {}", ev.matches());
        ctx.borrow_mut()
            .field
            .set_connections_enabled(!ev.matches());
    }) as Box<dyn FnMut(_)>);
    _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
