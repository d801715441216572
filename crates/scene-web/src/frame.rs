use crate::dom;
use scene_core::{
    AnimationStatus, ControlParameters, FrameDriver, PointerState, Scene, TranslationAnimation,
};
use scene_gpu::SceneRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches. Shared state lives behind
/// `Rc<RefCell<..>>` so DOM handlers and the animation task can write to it
/// between frames.
pub struct FrameContext {
    pub driver: FrameDriver,
    pub scene: Rc<RefCell<Scene>>,
    pub controls: Rc<RefCell<ControlParameters>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub renderer: SceneRenderer<'static>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if (w, h) != self.renderer.size() {
            self.driver.resize(w, h, &mut self.renderer);
        }

        let controls = self.controls.borrow().clone();
        let report = self.driver.tick(
            &mut self.scene.borrow_mut(),
            &controls,
            &mut self.pointer.borrow_mut(),
            &mut self.renderer,
        );
        if let Some(cursor) = report.cursor() {
            dom::set_cursor(&self.canvas, cursor);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Step `animation` once per animation frame until it finishes or is
/// cancelled. Runs beside the render loop; neither waits on the other.
pub fn start_animation(animation: TranslationAnimation, scene: Rc<RefCell<Scene>>) {
    let animation = RefCell::new(animation);
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let status = animation.borrow_mut().step(&mut scene.borrow_mut());
        if status == AnimationStatus::Running {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
