use crate::components::Pose;
use crate::fsm::{State, StateClock, Transition};

use super::{LeafTransition, LocomotionCtx};

/// Below this `|speed|` a stopping character snaps to rest.
pub const STOP_EPSILON: f32 = 0.1;

/// Friction deceleration with no input held.
#[derive(Debug, Default)]
pub struct Stop {
    clock: StateClock,
}

impl<'a> State<LocomotionCtx<'a>> for Stop {
    type Next = LeafTransition;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    fn enter(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
        ctx.body.pose = Pose::Skid;
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<LeafTransition> {
        let speed = ctx.body.speed;
        // Never step past zero.
        let step = (ctx.tuning.stop_friction * dt).min(speed.abs());
        let speed = speed - step * speed.signum();

        if speed.abs() < STOP_EPSILON {
            ctx.body.speed = 0.0;
            return Transition::Go(LeafTransition::Idle);
        }

        ctx.body.speed = speed;
        self.clock.stay(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;
    use crate::locomotion::test_support::{ctx, grounded_body};

    #[test]
    fn decelerates_against_direction_of_travel() {
        let tuning = Tuning {
            stop_friction: 10.0,
            ..Tuning::default()
        };
        let mut stop = Stop::default();

        let mut body = grounded_body(-4.0);
        stop.enter(&mut ctx(&mut body, &tuning, 0.0));
        assert_eq!(body.pose, Pose::Skid);
        assert!(stop.update(&mut ctx(&mut body, &tuning, 0.0), 0.125).is_stay());
        assert_eq!(body.speed, -2.75);

        let mut body = grounded_body(4.0);
        assert!(stop.update(&mut ctx(&mut body, &tuning, 0.0), 0.125).is_stay());
        assert_eq!(body.speed, 2.75);
    }

    #[test]
    fn settles_to_exact_zero_then_idles() {
        let tuning = Tuning {
            stop_friction: 10.0,
            ..Tuning::default()
        };
        let mut body = grounded_body(3.0);
        let mut stop = Stop::default();
        stop.enter(&mut ctx(&mut body, &tuning, 0.0));

        let mut frames = 0;
        loop {
            frames += 1;
            assert!(frames < 100, "stop never settled");
            if let Transition::Go(next) = stop.update(&mut ctx(&mut body, &tuning, 0.0), 1.0 / 60.0) {
                assert_eq!(next, LeafTransition::Idle);
                break;
            }
        }
        assert_eq!(body.speed, 0.0);
    }

    #[test]
    fn large_friction_step_does_not_oscillate() {
        let tuning = Tuning {
            stop_friction: 1000.0,
            ..Tuning::default()
        };
        let mut body = grounded_body(0.5);
        let mut stop = Stop::default();
        let t = stop.update(&mut ctx(&mut body, &tuning, 0.0), 0.1);
        assert_eq!(t, Transition::Go(LeafTransition::Idle));
        assert_eq!(body.speed, 0.0);
    }
}
