use glam::{Vec2, Vec3};

use crate::camera::CameraBasis;
use crate::services::{InputSource, Stick};
use crate::utils::math::flatten;

/// Latest analog samples for the two sticks. This is the fail-soft binding
/// surface: sticks nobody writes to read as zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct StickState {
    pub move_stick: Vec2,
    pub look_stick: Vec2,
}

impl StickState {
    pub fn set_move(&mut self, sample: Vec2) {
        self.move_stick = sample;
    }

    pub fn set_look(&mut self, sample: Vec2) {
        self.look_stick = sample;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for StickState {
    fn stick(&self, stick: Stick) -> Vec2 {
        match stick {
            Stick::Move => self.move_stick,
            Stick::Look => self.look_stick,
        }
    }
}

/// Map a raw stick sample onto the ground plane.
///
/// Samples with squared magnitude below `near_zero` mean "no intent" and
/// return an exact zero. Without a camera frame (or with camera-relative
/// steering off) the stick axes map straight onto the horizontal world axes,
/// x to x and y to z. With one, the basis forward/right are flattened onto
/// the plane and renormalized, and the stick steers in that frame.
///
/// A camera pitched straight up or down flattens to a zero basis; the result
/// degrades to zero rather than going NaN.
pub fn to_world_planar(
    stick: Vec2,
    camera_relative: bool,
    basis: Option<&CameraBasis>,
    near_zero: f32,
) -> Vec3 {
    if stick.length_squared() < near_zero {
        return Vec3::ZERO;
    }

    match basis {
        Some(basis) if camera_relative => {
            let forward = flatten(basis.forward).normalize_or_zero();
            let right = flatten(basis.right).normalize_or_zero();
            (forward * stick.y + right * stick.x).normalize_or_zero()
        }
        _ => Vec3::new(stick.x, 0.0, stick.y).normalize_or_zero(),
    }
}
