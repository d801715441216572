mod keyboard;

use keyboard::{command_for_key, KeyCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{
    build_scene, client_to_ndc, Color, Cursor, FrameDriver, PickState, PointerState, SceneConfig,
};
use scene_gpu::SceneRenderer;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{CursorIcon, WindowBuilder};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("orbit-picker (native)")
        .build(&event_loop)?;
    let size = window.inner_size();

    let config = SceneConfig::default();
    let aspect = size.width as f32 / size.height.max(1) as f32;
    let setup = build_scene(&config, aspect)?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer =
        pollster::block_on(SceneRenderer::new(&instance, surface, size.width, size.height))?;

    let mut animation = setup.solid_animation(&config);
    let cancel = animation.cancel_token();
    let mut animating = true;
    let mut scene = setup.scene;
    let mut controls = config.controls.clone();
    let mut pointer = PointerState::default();
    let mut driver = FrameDriver::new(
        setup.camera,
        &scene,
        PickState::new(Color::from_hex(config.highlight_hex)),
        StdRng::from_entropy(),
    );
    log::info!("[setup] native front-end ready {}x{}", size.width, size.height);

    let window = &window;
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => driver.resize(size.width, size.height, &mut renderer),
            WindowEvent::CloseRequested => {
                cancel.cancel();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let s = window.inner_size();
                pointer.move_to(client_to_ndc(
                    position.x as f32,
                    position.y as f32,
                    s.width as f32,
                    s.height as f32,
                ));
            }
            WindowEvent::CursorLeft { .. } => pointer.leave(),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => pointer.press(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match command_for_key(&logical_key) {
                Some(KeyCommand::Control(action)) => {
                    controls.apply_action(action);
                    log::info!(
                        "[controls] {:?} speed={:.2} opacity={:.2} color={}",
                        action,
                        controls.rotation_speed,
                        controls.opacity,
                        controls.color
                    );
                }
                Some(KeyCommand::CancelAnimation) => cancel.cancel(),
                None => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            if animating {
                animating = !animation.step(&mut scene).is_done();
            }
            let report = driver.tick(&mut scene, &controls, &mut pointer, &mut renderer);
            if let Some(cursor) = report.cursor() {
                window.set_cursor_icon(match cursor {
                    Cursor::Interactive => CursorIcon::Pointer,
                    Cursor::Default => CursorIcon::Default,
                });
            }
            window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
