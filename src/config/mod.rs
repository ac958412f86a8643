pub mod locomotion;

pub use locomotion::{load_or_create_config, LocomotionConfig};
