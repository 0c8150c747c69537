use glam::Vec3;

use crate::fsm::{State, StateClock, Transition};

use super::{LocomotionCtx, TopId};

/// Off the ground. Lateral velocity carries over from the last grounded
/// frame while gravity pulls the character down until contact returns.
#[derive(Debug, Default)]
pub struct Airborne {
    clock: StateClock,
}

impl<'a> State<LocomotionCtx<'a>> for Airborne {
    type Next = TopId;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    fn enter(&mut self, _ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<TopId> {
        if ctx.body.grounded {
            return Transition::Go(TopId::Grounded);
        }
        ctx.body.velocity -= Vec3::Y * ctx.tuning.airborne_gravity * dt;
        self.clock.stay(dt)
    }
}
