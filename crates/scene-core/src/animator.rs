//! Bounded translation of a batch of objects.
//!
//! An animation runs for a fixed number of steps, adding the same delta to
//! every object each step, then finishes on its own. It is driven by the host
//! as an independent cooperative task; the frame tick never waits on it.

use crate::easing::Easing;
use crate::scene::{ObjectId, Scene};
use glam::Vec3;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Shared flag used to stop an animation from outside its task (key press,
/// host teardown). Cancelling never rolls back steps already applied.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    Running,
    Finished,
    Cancelled,
}

impl AnimationStatus {
    pub fn is_done(self) -> bool {
        self != AnimationStatus::Running
    }
}

#[derive(Debug)]
pub struct TranslationAnimation {
    targets: SmallVec<[ObjectId; 8]>,
    step_delta: Vec3,
    duration_ticks: u32,
    ticks_done: u32,
    cancel: CancelToken,
    status: AnimationStatus,
}

impl TranslationAnimation {
    /// Start an animation of `duration_ticks` steps. `direction` is
    /// normalized (a zero vector yields no motion) and `speed` is shaped once
    /// by `easing` before the first step.
    pub fn new(
        objects: impl IntoIterator<Item = ObjectId>,
        direction: Vec3,
        speed: f32,
        duration_ticks: u32,
        easing: Easing,
    ) -> Self {
        let speed = easing.apply(speed);
        let targets: SmallVec<[ObjectId; 8]> = objects.into_iter().collect();
        log::info!(
            "[animate] start objects={} dir=({:.2},{:.2},{:.2}) speed={:.3} ({}) ticks={}",
            targets.len(),
            direction.x,
            direction.y,
            direction.z,
            speed,
            easing,
            duration_ticks
        );
        Self {
            targets,
            step_delta: direction.normalize_or_zero() * speed,
            duration_ticks,
            ticks_done: 0,
            cancel: CancelToken::new(),
            status: if duration_ticks == 0 {
                AnimationStatus::Finished
            } else {
                AnimationStatus::Running
            },
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.refresh_cancelled();
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn ticks_done(&self) -> u32 {
        self.ticks_done
    }

    pub fn duration_ticks(&self) -> u32 {
        self.duration_ticks
    }

    /// Per-step displacement applied to each target.
    pub fn step_delta(&self) -> Vec3 {
        self.step_delta
    }

    pub fn targets(&self) -> &[ObjectId] {
        &self.targets
    }

    /// Apply one step. Once finished or cancelled this is a no-op that keeps
    /// reporting the terminal status.
    pub fn step(&mut self, scene: &mut Scene) -> AnimationStatus {
        self.refresh_cancelled();
        if self.status.is_done() {
            return self.status;
        }
        for &id in &self.targets {
            scene.translate(id, self.step_delta);
        }
        self.ticks_done += 1;
        if self.ticks_done >= self.duration_ticks {
            self.status = AnimationStatus::Finished;
            log::info!("[animate] finished after {} ticks", self.ticks_done);
        }
        self.status
    }

    fn refresh_cancelled(&mut self) {
        if self.status == AnimationStatus::Running && self.cancel.is_cancelled() {
            self.status = AnimationStatus::Cancelled;
            log::info!(
                "[animate] cancelled at tick {}/{}",
                self.ticks_done,
                self.duration_ticks
            );
        }
    }
}
