#![cfg(target_arch = "wasm32")]
mod controls;
mod dom;
mod events;
mod frame;

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{build_scene, Color, FrameDriver, PickState, PointerState, SceneConfig};
use scene_gpu::SceneRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    dom::sync_canvas_backing_size(&canvas);
    events::wire_canvas_resize(&window, &canvas);

    let config = SceneConfig::default();
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let setup = build_scene(&config, aspect)?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer = SceneRenderer::new(&instance, surface, canvas.width(), canvas.height()).await?;

    let animation = setup.solid_animation(&config);
    let cancel = animation.cancel_token();
    let scene = Rc::new(RefCell::new(setup.scene));
    let controls = Rc::new(RefCell::new(config.controls.clone()));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let panel = controls::ControlPanel::mount(&document, controls.clone())?;
    events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
    }
    .wire();
    events::wire_global_keydown(&window, panel.root, cancel.clone());
    events::wire_pagehide(&window, cancel);

    let driver = FrameDriver::new(
        setup.camera,
        &scene.borrow(),
        PickState::new(Color::from_hex(config.highlight_hex)),
        StdRng::from_entropy(),
    );
    let frame_ctx = frame::FrameContext {
        driver,
        scene: scene.clone(),
        controls,
        pointer,
        renderer,
        canvas,
    };
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    frame::start_animation(animation, scene);
    log::info!("[setup] render loop and animation started");
    Ok(())
}
