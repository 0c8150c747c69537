use glam::Vec3;
use hecs::{Entity, World};

use crate::components::{Body, CharacterShape, Collider, LocalTransform, Player, PlayerFsm, Static};

/// Radius of the player's probe shape.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Immovable axis-aligned box (platforms, walls).
pub fn spawn_static_box(world: &mut World, center: Vec3, half_extents: Vec3) -> Entity {
    world.spawn((
        LocalTransform::new(center),
        Collider::Box { half_extents },
        Static,
    ))
}

/// Infinite ground plane through `point`. A non-vertical `normal` makes a
/// slope.
pub fn spawn_ground_plane(world: &mut World, point: Vec3, normal: Vec3) -> Entity {
    let normal = normal.normalize_or_zero();
    world.spawn((
        LocalTransform::new(point),
        Collider::Plane {
            normal,
            offset: normal.dot(point),
        },
        Static,
    ))
}

/// Player character standing with its center at `position`.
pub fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    world.spawn((
        Player,
        LocalTransform::new(position),
        CharacterShape {
            radius: PLAYER_RADIUS,
        },
        Body::default(),
        PlayerFsm::new(),
    ))
}
