//! Reference movement and orientation collaborators
pub mod body;

pub use body::{Heading, KinematicBody};
