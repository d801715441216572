use crate::dom;
use scene_core::{client_to_ndc, CancelToken, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer handlers writing into the shared [`PointerState`]. The frame loop
/// reads it once per tick.
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl InputWiring {
    pub fn wire(&self) {
        self.wire_pointermove();
        self.wire_pointerdown();
        self.wire_pointerleave();
    }

    fn wire_pointerleave(&self) {
        let pointer = self.pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().leave();
        }) as Box<dyn FnMut(_)>);
        self.canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    fn wire_pointermove(&self) {
        let canvas = self.canvas.clone();
        let pointer = self.pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            pointer.borrow_mut().move_to(pointer_ndc(&ev, &canvas));
        }) as Box<dyn FnMut(_)>);
        self.canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    fn wire_pointerdown(&self) {
        let canvas = self.canvas.clone();
        let pointer = self.pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut p = pointer.borrow_mut();
            p.move_to(pointer_ndc(&ev, &canvas));
            p.press();
        }) as Box<dyn FnMut(_)>);
        self.canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}

#[inline]
fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> glam::Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    client_to_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Keep the canvas backing store in step with its CSS size. The frame loop
/// notices the new size and resizes camera and surface.
pub fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    panel: &web::HtmlElement,
    cancel: &CancelToken,
) {
    match ev.key().as_str() {
        "h" | "H" => dom::toggle_visible(panel),
        "Escape" => {
            if !cancel.is_cancelled() {
                log::info!("[animate] cancel requested");
            }
            cancel.cancel();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(window: &web::Window, panel: web::HtmlElement, cancel: CancelToken) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &panel, &cancel);
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

/// Stop the animation when the page goes away.
pub fn wire_pagehide(window: &web::Window, cancel: CancelToken) {
    let closure = Closure::wrap(Box::new(move || {
        cancel.cancel();
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
