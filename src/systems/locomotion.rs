use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Body, CharacterShape, LocalTransform, PlayerFsm};
use crate::config::Tuning;
use crate::engine::input::{InputAction, InputSource};
use crate::locomotion::{LocomotionCtx, StateChange};

use super::raycast::StaticScene;

/// Drive every character's locomotion FSM one frame.
///
/// Runs after `ground_system` and before `motion_system`. The movement axis
/// is polled once and shared by all characters. Returns the state changes
/// that fired this frame.
pub fn locomotion_system(
    world: &mut World,
    input: &impl InputSource,
    tuning: &Tuning,
    dt: f32,
) -> Vec<(Entity, StateChange)> {
    // Collect statics first so the probe does not hold a borrow on the world.
    let scene = StaticScene::snapshot(world);
    let movement = input.sample_axis(InputAction::Movement);
    let mut changes = Vec::new();

    for (entity, (fsm, body, local, shape)) in world.query_mut::<(
        &mut PlayerFsm,
        &mut Body,
        &LocalTransform,
        &CharacterShape,
    )>() {
        let probe = scene.sweep(local.position, dt, shape.radius + tuning.probe_skin);
        let mut ctx = LocomotionCtx {
            body,
            tuning,
            movement,
            probe: &probe,
        };

        if let Some(change) = fsm.update(&mut ctx, dt) {
            debug!(
                entity = ?entity,
                from = %change.from,
                to = %change.to,
                speed = ctx.body.speed,
                axis = movement.value,
                "character state change"
            );
            changes.push((entity, change));
        }
    }

    changes
}
