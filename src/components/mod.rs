mod character;
mod physics;

pub use character::*;
pub use physics::*;

use glam::Vec3;

/// World-space position of an entity. The simulation is 2D-in-3D: characters
/// move in the XY plane and Z is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
}

impl LocalTransform {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}
