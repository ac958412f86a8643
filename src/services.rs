//! Capability interfaces the locomotion core is wired to at construction.
//!
//! The host simulation supplies one implementation of each: where the input
//! samples come from, what applies displacements, where the facing lives,
//! whether a camera frame is available, and what consumes blend parameters.

use glam::{Quat, Vec2, Vec3};

use crate::camera::CameraBasis;

/// The two analog sticks sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stick {
    Move,
    Look,
}

/// Scalar blend parameters fed to the animation graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendParam {
    Speed,
    MoveX,
    MoveY,
}

impl BlendParam {
    pub const ALL: [BlendParam; 3] = [BlendParam::Speed, BlendParam::MoveX, BlendParam::MoveY];

    pub fn name(self) -> &'static str {
        match self {
            BlendParam::Speed => "Speed",
            BlendParam::MoveX => "MoveX",
            BlendParam::MoveY => "MoveY",
        }
    }
}

/// Boolean blend parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFlag {
    MovingBackward,
}

impl BlendFlag {
    pub fn name(self) -> &'static str {
        match self {
            BlendFlag::MovingBackward => "MovingBackward",
        }
    }
}

pub trait InputSource {
    /// Current sample for the given stick. An unbound stick reads as zero.
    fn stick(&self, stick: Stick) -> Vec2;
}

pub trait MovementExecutor {
    /// Apply a world-space displacement for this tick. Collision resolution
    /// is the executor's business; no feedback flows back.
    fn apply_displacement(&mut self, delta: Vec3);
}

pub trait OrientationStore {
    fn facing(&self) -> Quat;
    fn set_facing(&mut self, facing: Quat);
}

pub trait CameraProvider {
    /// Forward/right reference frame, when a camera is configured.
    fn basis(&self) -> Option<CameraBasis>;
}

pub trait AnimationSink {
    fn supports(&self, param: BlendParam) -> bool;

    fn supports_flag(&self, flag: BlendFlag) -> bool;

    /// Write a scalar. The sink owns the smoothing state and folds `value`
    /// in with time constant `damp` over the frame delta `dt`.
    fn set_param(&mut self, param: BlendParam, value: f32, damp: f32, dt: f32);

    fn set_flag(&mut self, flag: BlendFlag, value: bool);
}
