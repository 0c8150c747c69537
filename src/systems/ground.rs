use glam::Vec3;
use hecs::World;

use crate::components::{Body, CharacterShape, LocalTransform};
use crate::config::Tuning;

use super::raycast::StaticScene;

/// Surfaces steeper than this (normal·up) do not count as ground.
pub const GROUND_NORMAL_DOT: f32 = 0.7;

/// Refresh ground contact for every character. Runs before the FSM each frame.
///
/// Casts straight down from the character's center; a walkable hit within
/// `radius + probe_skin`, plus however far the character falls this frame,
/// sets `grounded` and `ground_normal` and snaps the character onto the
/// surface.
pub fn ground_system(world: &mut World, tuning: &Tuning, dt: f32) {
    let scene = StaticScene::snapshot(world);

    for (_entity, (body, local, shape)) in
        world.query_mut::<(&mut Body, &mut LocalTransform, &CharacterShape)>()
    {
        let fall = (-body.velocity.y).max(0.0) * dt;
        let reach = shape.radius + tuning.probe_skin + fall;
        match scene.raycast(local.position, Vec3::NEG_Y, reach) {
            Some(hit) if hit.normal.dot(Vec3::Y) > GROUND_NORMAL_DOT => {
                body.grounded = true;
                body.ground_normal = hit.normal;
                local.position.y = hit.point.y + shape.radius;
            }
            _ => {
                body.grounded = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::prefabs::{spawn_ground_plane, spawn_player};

    fn grounded_after(height: f32, fall_speed: f32) -> bool {
        let mut world = World::new();
        spawn_ground_plane(&mut world, Vec3::ZERO, Vec3::Y);
        let player = spawn_player(&mut world, Vec3::new(0.0, height, 0.0));
        world.get::<&mut Body>(player).unwrap().velocity = Vec3::new(0.0, -fall_speed, 0.0);

        ground_system(&mut world, &Tuning::default(), 1.0 / 60.0);
        let grounded = world.get::<&Body>(player).unwrap().grounded;
        grounded
    }

    #[test]
    fn reach_covers_this_frames_fall() {
        assert!(!grounded_after(1.0, 0.0));
        assert!(grounded_after(1.0, 40.0));
    }

    #[test]
    fn landing_snaps_onto_the_surface() {
        let mut world = World::new();
        spawn_ground_plane(&mut world, Vec3::ZERO, Vec3::Y);
        let player = spawn_player(&mut world, Vec3::new(0.0, 0.52, 0.0));

        ground_system(&mut world, &Tuning::default(), 1.0 / 60.0);
        assert!(world.get::<&Body>(player).unwrap().grounded);
        let y = world.get::<&LocalTransform>(player).unwrap().position.y;
        assert!((y - 0.5).abs() < 1e-5);
    }
}
