use crate::components::Pose;
use crate::fsm::{State, StateClock, Transition};

use super::{LeafTransition, LocomotionCtx};

/// Standing still. Any movement input starts a run.
#[derive(Debug, Default)]
pub struct Idle {
    clock: StateClock,
}

impl<'a> State<LocomotionCtx<'a>> for Idle {
    type Next = LeafTransition;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    fn enter(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
        ctx.body.pose = Pose::Stand;
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<LeafTransition> {
        if ctx.movement.has_input() {
            return Transition::Go(LeafTransition::Run);
        }
        self.clock.stay(dt)
    }
}
