use crate::components::Pose;
use crate::fsm::{State, StateClock, Transition};

use super::{LeafTransition, LocomotionCtx, SkidPayload};

/// Accelerating along the movement axis.
///
/// Reversing the stick above the skid threshold hands off to Skid. Releasing
/// the stick starts a grace window: only once `stop_delay` has elapsed with
/// no input does Run give way to Stop, so a quick reversal still skids.
#[derive(Debug, Default)]
pub struct Run {
    clock: StateClock,
    stop_timer: f32,
}

impl Run {
    /// Seconds accumulated without input since this run started.
    pub fn stop_timer(&self) -> f32 {
        self.stop_timer
    }
}

impl<'a> State<LocomotionCtx<'a>> for Run {
    type Next = LeafTransition;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    fn enter(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
        self.stop_timer = 0.0;
        ctx.body.pose = Pose::Run1;
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<LeafTransition> {
        let tuning = ctx.tuning;
        let axis = ctx.movement;
        let speed = ctx.body.speed;

        let reversing = speed.signum() != axis.value.signum();
        if axis.has_input() && speed.abs() > tuning.skid_speed_threshold && reversing {
            return Transition::Go(LeafTransition::Skid(SkidPayload {
                start_speed: speed,
                target_speed: speed / 2.0,
            }));
        }

        if !axis.has_input() {
            if self.stop_timer >= tuning.stop_delay {
                return Transition::Go(LeafTransition::Stop);
            }
            self.stop_timer += dt;
        }

        let speed = (speed + axis.value * tuning.base_acceleration * dt)
            .clamp(-tuning.max_speed, tuning.max_speed);
        ctx.body.speed = speed;

        // Hold each frame for less time the closer we are to max speed.
        let hold = tuning.walk_anim_frame_interval
            * (1.0 - (speed.abs() / tuning.max_speed).clamp(0.0, 1.0));
        if self.clock.elapsed() > hold {
            self.clock.reset();
            ctx.body.pose = ctx.body.pose.next_run_frame();
        }

        self.clock.stay(dt)
    }
}
