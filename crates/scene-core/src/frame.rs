use crate::camera::Camera;
use crate::color::Color;
use crate::constants::CUBE_NAME;
use crate::controls::{apply_controls, ControlParameters};
use crate::orbit;
use crate::pick::{Cursor, PickState, Transition};
use crate::pointer::PointerState;
use crate::ray::Ray;
use crate::scene::{ObjectId, Scene};
use instant::Instant;
use rand::rngs::StdRng;

/// Backend that draws a scene from a camera. Implemented by the GPU renderer
/// and by recording fakes in tests.
pub trait Rasterizer {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()>;
    fn resize(&mut self, width: u32, height: u32);
}

/// Wall-clock delta between successive ticks. The first tick reports zero.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn delta_sec(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self.last.map(|l| (now - l).as_secs_f32()).unwrap_or(0.0);
        self.last = Some(now);
        dt
    }
}

/// What happened during one tick, for the host to act on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub delta_sec: f32,
    pub transition: Option<Transition>,
    pub pressed: Option<Color>,
    pub rendered: bool,
}

impl FrameReport {
    /// Cursor change to apply, if the selection changed this tick.
    pub fn cursor(&self) -> Option<Cursor> {
        self.transition.map(|t| t.cursor())
    }
}

/// Per-frame orchestration. Holds the camera and highlight state; the scene
/// itself is borrowed each tick since the animator also writes to it.
pub struct FrameDriver {
    camera: Camera,
    pick: PickState,
    tunable: Option<ObjectId>,
    clock: FrameClock,
    rng: StdRng,
    frames: u64,
}

impl FrameDriver {
    pub fn new(camera: Camera, scene: &Scene, pick: PickState, rng: StdRng) -> Self {
        let tunable = scene.object_by_name(CUBE_NAME);
        if tunable.is_none() {
            log::warn!("[frame] no object named {CUBE_NAME:?}; controls will not be applied");
        }
        Self {
            camera,
            pick,
            tunable,
            clock: FrameClock::default(),
            rng,
            frames: 0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pick(&self) -> &PickState {
        &self.pick
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one tick using the wall-clock delta since the previous tick.
    pub fn tick<R: Rasterizer + ?Sized>(
        &mut self,
        scene: &mut Scene,
        controls: &ControlParameters,
        pointer: &mut PointerState,
        rasterizer: &mut R,
    ) -> FrameReport {
        let dt = self.clock.delta_sec();
        self.tick_with_delta(dt, scene, controls, pointer, rasterizer)
    }

    /// Run one tick with an explicit delta: orbit, controls, picking, render.
    /// Scheduling the next tick is left to the host.
    pub fn tick_with_delta<R: Rasterizer + ?Sized>(
        &mut self,
        delta_sec: f32,
        scene: &mut Scene,
        controls: &ControlParameters,
        pointer: &mut PointerState,
        rasterizer: &mut R,
    ) -> FrameReport {
        let delta_sec = delta_sec.max(0.0);

        orbit::advance(&mut self.camera, delta_sec, controls.rotation_speed, scene.origin);

        if let Some(id) = self.tunable {
            if let Some(object) = scene.get_mut(id) {
                apply_controls(&mut object.material, controls);
            }
        }

        let transition = if pointer.outside {
            self.pick.update(scene, None)
        } else {
            let ray = Ray::from_camera(pointer.ndc, &self.camera);
            self.pick.hover(scene, &ray)
        };
        let pressed = if pointer.take_press() {
            self.pick.press(scene, &mut self.rng)
        } else {
            None
        };

        let rendered = match rasterizer.render(scene, &self.camera) {
            Ok(()) => true,
            Err(e) => {
                log::error!("[frame] render error: {e:?}");
                false
            }
        };
        self.frames += 1;

        FrameReport {
            delta_sec,
            transition,
            pressed,
            rendered,
        }
    }

    /// Recompute the camera aspect and resize the rasterizer output.
    pub fn resize<R: Rasterizer + ?Sized>(&mut self, width: u32, height: u32, rasterizer: &mut R) {
        self.camera.set_viewport(width, height);
        rasterizer.resize(width, height);
    }
}
