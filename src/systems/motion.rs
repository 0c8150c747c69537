use hecs::World;

use crate::components::{Body, LocalTransform};

/// Semi-implicit Euler: velocity was committed by the FSM this frame, now
/// move by it.
pub fn motion_system(world: &mut World, dt: f32) {
    for (_entity, (local, body)) in world.query_mut::<(&mut LocalTransform, &Body)>() {
        local.position += body.velocity * dt;
    }
}
