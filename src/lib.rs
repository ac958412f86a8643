pub mod camera;
pub mod character;
pub mod config;
pub mod physics;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use camera::{CameraBasis, NoCamera, OrbitCamera};
pub use character::animation::BlendState;
pub use character::controller::CharacterDriver;
pub use character::input::{to_world_planar, StickState};
pub use config::{load_or_create_config, LocomotionConfig};
pub use physics::body::{Heading, KinematicBody};
pub use services::{
    AnimationSink, BlendFlag, BlendParam, CameraProvider, InputSource, MovementExecutor,
    OrientationStore, Stick,
};
pub use utils::error::ConfigError;
pub use utils::math::Aabb;
