use glam::Vec3;
use log::warn;

use crate::character::animation;
use crate::character::input::to_world_planar;
use crate::config::LocomotionConfig;
use crate::services::{
    AnimationSink, BlendFlag, BlendParam, CameraProvider, InputSource, MovementExecutor,
    OrientationStore, Stick,
};
use crate::utils::error::ConfigError;
use crate::utils::math::look_toward;

/// Drives one character: samples the sticks, moves and turns it, and feeds
/// the animation blend space. One `tick` per simulation step; the host loop
/// owns the scheduling.
///
/// All collaborators are injected at construction. The driver never touches
/// anything it was not handed.
pub struct CharacterDriver<I, M, O, C, A> {
    config: LocomotionConfig,
    input: I,
    mover: M,
    orientation: O,
    camera: C,
    anim: A,
}

impl<I, M, O, C, A> CharacterDriver<I, M, O, C, A>
where
    I: InputSource,
    M: MovementExecutor,
    O: OrientationStore,
    C: CameraProvider,
    A: AnimationSink,
{
    pub fn new(
        config: LocomotionConfig,
        input: I,
        mover: M,
        orientation: O,
        camera: C,
        anim: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        for param in BlendParam::ALL {
            if !anim.supports(param) {
                warn!(
                    "Animation parameter '{}' not bound, writes will be skipped",
                    param.name()
                );
            }
        }
        if !anim.supports_flag(BlendFlag::MovingBackward) {
            warn!(
                "Animation flag '{}' not bound, writes will be skipped",
                BlendFlag::MovingBackward.name()
            );
        }

        Ok(Self {
            config,
            input,
            mover,
            orientation,
            camera,
            anim,
        })
    }

    /// Advance one simulation step.
    ///
    /// Order matters: displacement and rotation resolve first, then the blend
    /// parameters sample the post-rotation facing.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let raw_move = self.input.stick(Stick::Move);
        let raw_look = self.input.stick(Stick::Look);
        let basis = self.camera.basis();

        let move_dir = to_world_planar(
            raw_move,
            self.config.camera_relative,
            basis.as_ref(),
            self.config.near_zero,
        );
        let look_dir = to_world_planar(
            raw_look,
            self.config.camera_relative,
            basis.as_ref(),
            self.config.near_zero,
        );

        // The planar directions are unit length, so the deadzones gate on the
        // raw samples. A zero direction (degenerate camera) closes the gate
        // even when the stick itself is pushed.
        let has_move = raw_move.length_squared() > self.config.move_deadzone.powi(2)
            && move_dir != Vec3::ZERO;
        let has_look = raw_look.length_squared() > self.config.look_deadzone.powi(2)
            && look_dir != Vec3::ZERO;

        if has_move {
            self.mover
                .apply_displacement(move_dir * self.config.move_speed * dt);
        }

        // Facing target: an active look wins, otherwise gated movement,
        // otherwise the facing holds.
        let target = if has_look {
            Some(look_dir)
        } else if has_move {
            Some(move_dir)
        } else {
            None
        };
        if let Some(target) = target {
            let fraction = (self.config.rotation_speed * dt).min(1.0);
            let facing = self.orientation.facing();
            self.orientation
                .set_facing(facing.slerp(look_toward(target), fraction));
        }

        animation::push_blend_params(
            &mut self.anim,
            self.orientation.facing(),
            move_dir,
            has_move,
            has_look,
            raw_move,
            &self.config,
            dt,
        );
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn orientation(&self) -> &O {
        &self.orientation
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn animation(&self) -> &A {
        &self.anim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraBasis, NoCamera, OrbitCamera};
    use crate::character::animation::BlendState;
    use crate::character::input::StickState;
    use crate::physics::body::{Heading, KinematicBody};
    use approx::assert_relative_eq;
    use glam::{Quat, Vec2};

    const DT: f32 = 1.0 / 60.0;

    type TestDriver<C> = CharacterDriver<StickState, KinematicBody, Heading, C, BlendState>;

    fn test_config() -> LocomotionConfig {
        LocomotionConfig {
            move_speed: 5.0,
            rotation_speed: 10.0,
            camera_relative: false,
            anim_damp: 0.0,
            move_deadzone: 0.04,
            look_deadzone: 0.04,
            ..LocomotionConfig::default()
        }
    }

    fn world_driver(config: LocomotionConfig) -> TestDriver<NoCamera> {
        CharacterDriver::new(
            config,
            StickState::default(),
            KinematicBody::new(Vec3::ZERO),
            Heading::default(),
            NoCamera,
            BlendState::new(),
        )
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = LocomotionConfig {
            move_speed: f32::INFINITY,
            ..LocomotionConfig::default()
        };
        let result = CharacterDriver::new(
            config,
            StickState::default(),
            KinematicBody::new(Vec3::ZERO),
            Heading::default(),
            NoCamera,
            BlendState::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn forward_move_without_look() {
        let mut driver = world_driver(test_config());
        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.tick(DT);

        let position = driver.mover().position;
        assert_relative_eq!(position.z, 5.0 * DT, epsilon = 1e-5);
        assert_eq!(position.x, 0.0);
        assert_eq!(position.y, 0.0);

        assert_relative_eq!(driver.animation().speed(), 1.0);
        assert!(!driver.animation().moving_backward());
    }

    #[test]
    fn move_direction_becomes_facing_target() {
        let mut driver = world_driver(test_config());
        driver.orientation.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        driver.input_mut().set_move(Vec2::new(0.0, 1.0));

        let initial_error = driver.orientation().forward().dot(Vec3::Z);
        for _ in 0..120 {
            driver.tick(DT);
        }
        let converged = driver.orientation().forward().dot(Vec3::Z);
        assert!(converged > initial_error);
        assert_relative_eq!(converged, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn opposite_look_sets_backward_flag() {
        // Rotation fast enough to converge on the aim within one tick.
        let config = LocomotionConfig {
            rotation_speed: 60.0,
            ..test_config()
        };
        let mut driver = world_driver(config);
        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.input_mut().set_look(Vec2::new(0.0, -1.0));
        driver.tick(DT);

        // Facing snapped to the look direction; motion runs dead against it.
        assert_relative_eq!(driver.orientation().forward().z, -1.0, epsilon = 1e-3);
        assert!(driver.animation().moving_backward());
        assert!(driver.mover().position.z > 0.0);
    }

    #[test]
    fn below_deadzone_is_no_motion_but_raw_speed() {
        let mut driver = world_driver(test_config());
        driver.orientation.rotation = Quat::from_rotation_y(1.0);
        let before = driver.orientation().facing();

        driver.input_mut().set_move(Vec2::new(0.02, 0.02));
        driver.tick(DT);

        assert_eq!(driver.mover().position, Vec3::ZERO);
        assert_eq!(driver.orientation().facing(), before);
        // Raw magnitude still drives the speed ramp.
        assert_relative_eq!(driver.animation().speed(), 0.028284271, epsilon = 1e-4);
    }

    #[test]
    fn facing_update_is_idempotent_at_the_target() {
        let mut driver = world_driver(test_config());
        driver.orientation.rotation = look_toward(Vec3::X);
        driver.input_mut().set_look(Vec2::new(1.0, 0.0));
        driver.tick(DT);

        let forward = driver.orientation().forward();
        assert_relative_eq!(forward.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(forward.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn oversized_rotation_step_clamps_to_target() {
        let config = LocomotionConfig {
            rotation_speed: 1000.0,
            ..test_config()
        };
        let mut driver = world_driver(config);
        driver.input_mut().set_look(Vec2::new(1.0, 0.0));
        driver.tick(DT);

        // rotation_speed * dt >> 1: lands exactly on the target, no overshoot.
        let forward = driver.orientation().forward();
        assert_relative_eq!(forward.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn non_positive_dt_is_a_no_op() {
        let mut driver = world_driver(test_config());
        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.input_mut().set_look(Vec2::new(1.0, 0.0));

        driver.tick(0.0);
        driver.tick(-0.25);
        driver.tick(f32::NAN);

        assert_eq!(driver.mover().position, Vec3::ZERO);
        assert_eq!(driver.orientation().facing(), Quat::IDENTITY);
        assert_eq!(driver.animation().speed(), 0.0);
    }

    #[test]
    fn camera_relative_steering_follows_camera() {
        let config = LocomotionConfig {
            camera_relative: true,
            ..test_config()
        };
        // Camera looking along +X, pitched down a little.
        let camera = OrbitCamera::new(0.0, -0.4);
        let mut driver = CharacterDriver::new(
            config,
            StickState::default(),
            KinematicBody::new(Vec3::ZERO),
            Heading::default(),
            camera,
            BlendState::new(),
        )
        .unwrap();

        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.tick(DT);

        let position = driver.mover().position;
        assert!(position.x > 0.0);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-5);
        assert_eq!(position.y, 0.0);
    }

    struct TopDownCamera;

    impl CameraProvider for TopDownCamera {
        fn basis(&self) -> Option<CameraBasis> {
            Some(CameraBasis {
                forward: Vec3::NEG_Y,
                right: Vec3::ZERO,
            })
        }
    }

    #[test]
    fn degenerate_camera_stalls_motion_without_nan() {
        let config = LocomotionConfig {
            camera_relative: true,
            ..test_config()
        };
        let mut driver = CharacterDriver::new(
            config,
            StickState::default(),
            KinematicBody::new(Vec3::ZERO),
            Heading::default(),
            TopDownCamera,
            BlendState::new(),
        )
        .unwrap();

        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.tick(DT);

        assert_eq!(driver.mover().position, Vec3::ZERO);
        assert_eq!(driver.orientation().facing(), Quat::IDENTITY);
        assert!(driver.animation().speed().is_finite());
        assert!(driver.animation().move_x().is_finite());
        assert!(driver.animation().move_y().is_finite());
        // Speed reads the raw stick, gated or not.
        assert_relative_eq!(driver.animation().speed(), 1.0);
    }

    struct SpeedOnlySink {
        speed: f32,
        other_writes: u32,
    }

    impl AnimationSink for SpeedOnlySink {
        fn supports(&self, param: BlendParam) -> bool {
            param == BlendParam::Speed
        }

        fn supports_flag(&self, _flag: BlendFlag) -> bool {
            false
        }

        fn set_param(&mut self, param: BlendParam, value: f32, _damp: f32, _dt: f32) {
            match param {
                BlendParam::Speed => self.speed = value,
                _ => self.other_writes += 1,
            }
        }

        fn set_flag(&mut self, _flag: BlendFlag, _value: bool) {
            unreachable!("unsupported flag must never be written");
        }
    }

    #[test]
    fn unsupported_parameters_are_skipped() {
        let mut driver = CharacterDriver::new(
            test_config(),
            StickState::default(),
            KinematicBody::new(Vec3::ZERO),
            Heading::default(),
            NoCamera,
            SpeedOnlySink {
                speed: 0.0,
                other_writes: 0,
            },
        )
        .unwrap();

        driver.input_mut().set_move(Vec2::new(0.0, 1.0));
        driver.tick(DT);

        assert_relative_eq!(driver.animation().speed, 1.0);
        assert_eq!(driver.animation().other_writes, 0);
    }
}
