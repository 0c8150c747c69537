use crate::components::Pose;
use crate::fsm::{State, StateClock, Transition};

use super::{LeafTransition, LocomotionCtx};

/// Interpolation endpoints handed from Run to Skid with the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkidPayload {
    pub start_speed: f32,
    pub target_speed: f32,
}

/// Braking after a fast reversal.
///
/// Speed is lerped from `start_speed` to `target_speed` over
/// `skid_duration`; once the skid completes the speed flips sign so the
/// character carries on in the new direction.
#[derive(Debug, Default)]
pub struct Skid {
    clock: StateClock,
    payload: SkidPayload,
}

impl Skid {
    /// Must be called before `enter`. The payload is stale once Skid exits.
    pub fn prime(&mut self, payload: SkidPayload) {
        self.payload = payload;
    }

    pub fn start_speed(&self) -> f32 {
        self.payload.start_speed
    }

    pub fn target_speed(&self) -> f32 {
        self.payload.target_speed
    }
}

impl<'a> State<LocomotionCtx<'a>> for Skid {
    type Next = LeafTransition;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    fn enter(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
        ctx.body.pose = Pose::Skid;
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<LeafTransition> {
        let duration = ctx.tuning.skid_duration;
        let alpha = if duration > 0.0 {
            self.clock.elapsed() / duration
        } else {
            1.0
        };

        let SkidPayload {
            start_speed,
            target_speed,
        } = self.payload;

        if alpha >= 1.0 {
            // Skid complete: carry on in the new direction.
            ctx.body.speed = -target_speed;
            return if ctx.movement.has_input() {
                Transition::Go(LeafTransition::Run)
            } else {
                Transition::Go(LeafTransition::Stop)
            };
        }

        let speed = start_speed + (target_speed - start_speed) * alpha;
        ctx.body.speed = speed;
        self.clock.stay(dt)
    }
}
