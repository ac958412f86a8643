use glam::Vec3;

use crate::services::CameraProvider;

/// Forward/right reference frame handed to the input normalizer. The vectors
/// are the camera's raw axes; flattening onto the ground plane happens at the
/// point of use.
#[derive(Debug, Clone, Copy)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

/// Yaw/pitch orbit camera. Pitched straight up or down its right vector
/// degenerates to zero, which the normalizer treats as "no steering frame".
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }
}

impl CameraProvider for OrbitCamera {
    fn basis(&self) -> Option<CameraBasis> {
        Some(CameraBasis {
            forward: self.forward(),
            right: self.right(),
        })
    }
}

/// Stand-in for hosts without a camera; steering falls back to world axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCamera;

impl CameraProvider for NoCamera {
    fn basis(&self) -> Option<CameraBasis> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_and_right_are_orthogonal_unit_vectors() {
        let camera = OrbitCamera::new(0.7, -0.3);
        let forward = camera.forward();
        let right = camera.right();

        assert_relative_eq!(forward.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(right.length(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(forward.dot(right), 0.0, epsilon = 1e-5);
        assert_relative_eq!(right.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_zero_looks_along_x() {
        let camera = OrbitCamera::new(0.0, 0.0);
        let forward = camera.forward();
        assert_relative_eq!(forward.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.z, 0.0, epsilon = 1e-6);
    }
}
