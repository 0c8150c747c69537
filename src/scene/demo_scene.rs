use glam::Vec3;
use hecs::{Entity, World};

use super::prefabs::{spawn_ground_plane, spawn_player, spawn_static_box, PLAYER_RADIUS};

/// Handles to the entities the demo and its tests care about.
pub struct DemoScene {
    pub player: Entity,
    /// x of the platform's right edge. Running past it drops the player.
    pub ledge_x: f32,
    /// Foot of the lower slope, directly below the ledge.
    pub slope_foot: Vec3,
    /// Surface normal of the lower slope.
    pub slope_normal: Vec3,
}

impl DemoScene {
    /// Height of the lower slope's surface at `x`.
    pub fn slope_height_at(&self, x: f32) -> f32 {
        let n = self.slope_normal;
        self.slope_foot.y - n.x / n.y * (x - self.slope_foot.x)
    }
}

/// A platform with a wall at its left end and a drop past its right end onto
/// a slope that climbs away from the ledge.
///
/// ```text
///  |#|                                 __/
///  |#|        @                    __/
///  |#|=====================|   __/
///                           __/
///                       __/
/// ```
pub fn load_demo_scene(world: &mut World) -> DemoScene {
    let ledge_x = 20.0;
    let slope_foot = Vec3::new(ledge_x, -8.0, 0.0);
    // 15 degree incline rising along +x.
    let slope_normal = Vec3::new(-0.258_819, 0.965_926, 0.0);

    // Platform top sits at y = 0.
    spawn_static_box(
        world,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(ledge_x, 0.5, 2.0),
    );
    // Wall face at x = -11.5.
    spawn_static_box(
        world,
        Vec3::new(-12.0, 1.5, 0.0),
        Vec3::new(0.5, 1.5, 2.0),
    );
    spawn_ground_plane(world, slope_foot, slope_normal);

    let player = spawn_player(world, Vec3::new(0.0, PLAYER_RADIUS, 0.0));

    DemoScene {
        player,
        ledge_x,
        slope_foot,
        slope_normal,
    }
}
