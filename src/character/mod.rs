pub mod animation;
pub mod controller;
pub mod input;

pub use animation::BlendState;
pub use controller::CharacterDriver;
pub use input::{to_world_planar, StickState};
