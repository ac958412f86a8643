//! src/utils/math.rs
//! Mathematical utilities and geometric types
use glam::{Quat, Vec3};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Zero out the vertical component without renormalizing.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Yaw-only orientation whose forward axis points along `dir`.
/// `dir` must have a non-zero horizontal component.
pub fn look_toward(dir: Vec3) -> Quat {
    Quat::from_rotation_y(dir.x.atan2(dir.z))
}

/// Fraction of the remaining distance an exponential filter with time
/// constant `damp` covers over `dt`. Zero damp snaps straight to the target.
pub fn smoothing_factor(damp: f32, dt: f32) -> f32 {
    if damp <= f32::EPSILON {
        1.0
    } else {
        1.0 - (-dt / damp).exp()
    }
}
