use glam::Vec3;

use crate::components::Body;
use crate::config::Tuning;
use crate::engine::input::AxisSample;
use crate::systems::RaycastHit;

/// Read-only collision query along a proposed velocity.
pub trait CollisionProbe {
    fn check_collision(&self, velocity: Vec3) -> Option<RaycastHit>;
}

/// Probe for open ground with nothing to collide with.
pub struct NoCollision;

impl CollisionProbe for NoCollision {
    fn check_collision(&self, _velocity: Vec3) -> Option<RaycastHit> {
        None
    }
}

/// Everything a locomotion state may touch during one frame.
pub struct LocomotionCtx<'a> {
    pub body: &'a mut Body,
    pub tuning: &'a Tuning,
    /// Movement axis, sampled once at the start of the frame.
    pub movement: AxisSample,
    pub probe: &'a dyn CollisionProbe,
}
