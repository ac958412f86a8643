use glam::{Quat, Vec2, Vec3};

use crate::config::LocomotionConfig;
use crate::services::{AnimationSink, BlendFlag, BlendParam};
use crate::utils::math::{clamp01, smoothing_factor};

/// Derive the blend parameters for this tick and push them to the sink.
///
/// `facing` is the orientation after this tick's rotation update; `move_dir`
/// is the unit planar move direction (zero when below the near-zero
/// threshold). Speed deliberately reads the raw stick magnitude rather than
/// the gated direction, so the animation ramps continuously through the
/// deadzone instead of snapping.
pub(crate) fn push_blend_params<A: AnimationSink>(
    sink: &mut A,
    facing: Quat,
    move_dir: Vec3,
    has_move: bool,
    has_look: bool,
    raw_move: Vec2,
    config: &LocomotionConfig,
    dt: f32,
) {
    let speed = clamp01(raw_move.length());
    let local_move = if has_move {
        facing.inverse() * move_dir
    } else {
        Vec3::ZERO
    };

    write_scalar(sink, BlendParam::Speed, speed, config.anim_damp, dt);
    write_scalar(sink, BlendParam::MoveX, local_move.x, config.anim_damp, dt);
    write_scalar(sink, BlendParam::MoveY, local_move.z, config.anim_damp, dt);

    // Backward needs an independent aim diverging from the motion; pure
    // movement has nothing to be backward relative to.
    let moving_backward = has_move
        && has_look
        && move_dir.dot(facing * Vec3::Z) < config.backward_alignment;
    if sink.supports_flag(BlendFlag::MovingBackward) {
        sink.set_flag(BlendFlag::MovingBackward, moving_backward);
    }
}

fn write_scalar<A: AnimationSink>(sink: &mut A, param: BlendParam, value: f32, damp: f32, dt: f32) {
    if sink.supports(param) {
        sink.set_param(param, value, damp, dt);
    }
}

/// Smoothed blend values for a locomotion 2D blend space. Owns the smoothing
/// state: each scalar write folds the target in through a first-order
/// exponential filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlendState {
    speed: f32,
    move_x: f32,
    move_y: f32,
    moving_backward: bool,
}

impl BlendState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn move_x(&self) -> f32 {
        self.move_x
    }

    pub fn move_y(&self) -> f32 {
        self.move_y
    }

    pub fn moving_backward(&self) -> bool {
        self.moving_backward
    }

    fn slot(&mut self, param: BlendParam) -> &mut f32 {
        match param {
            BlendParam::Speed => &mut self.speed,
            BlendParam::MoveX => &mut self.move_x,
            BlendParam::MoveY => &mut self.move_y,
        }
    }
}

impl AnimationSink for BlendState {
    fn supports(&self, _param: BlendParam) -> bool {
        true
    }

    fn supports_flag(&self, _flag: BlendFlag) -> bool {
        true
    }

    fn set_param(&mut self, param: BlendParam, value: f32, damp: f32, dt: f32) {
        let blend = smoothing_factor(damp, dt);
        let slot = self.slot(param);
        *slot += (value - *slot) * blend;
    }

    fn set_flag(&mut self, flag: BlendFlag, value: bool) {
        match flag {
            BlendFlag::MovingBackward => self.moving_backward = value,
        }
    }
}
