use glam::{Quat, Vec3};

use crate::services::{MovementExecutor, OrientationStore};
use crate::utils::math::Aabb;

/// Point body the driver translates. Stands in for a full collision pipeline:
/// displacements integrate directly, optionally clamped into world bounds.
#[derive(Debug, Clone, Copy)]
pub struct KinematicBody {
    pub position: Vec3,
    bounds: Option<Aabb>,
}

impl KinematicBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            bounds: None,
        }
    }

    pub fn with_bounds(position: Vec3, bounds: Aabb) -> Self {
        Self {
            position,
            bounds: Some(bounds),
        }
    }
}

impl MovementExecutor for KinematicBody {
    fn apply_displacement(&mut self, delta: Vec3) {
        self.position += delta;
        if let Some(bounds) = self.bounds {
            self.position = bounds.clamp_point(self.position);
        }
    }
}

/// Character facing stored as a quaternion. Planar locomotion only ever
/// writes yaw rotations into it.
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub rotation: Quat,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

impl Heading {
    pub fn new(rotation: Quat) -> Self {
        Self { rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn yaw(&self) -> f32 {
        let forward = self.forward();
        forward.x.atan2(forward.z)
    }
}

impl OrientationStore for Heading {
    fn facing(&self) -> Quat {
        self.rotation
    }

    fn set_facing(&mut self, facing: Quat) {
        self.rotation = facing;
    }
}
