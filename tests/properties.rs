//! Property-based tests for the locomotion states.

use proptest::prelude::*;

use stride::components::Body;
use stride::engine::input::AxisSample;
use stride::fsm::{State, Transition};
use stride::locomotion::{
    Airborne, Grounded, Idle, LeafTransition, LocomotionCtx, LocomotionFsm, NoCollision, Run,
    Skid, SkidPayload, Stop, TopId,
};
use stride::{LeafId, StateId, Tuning};

fn ctx<'a>(body: &'a mut Body, tuning: &'a Tuning, axis: f32) -> LocomotionCtx<'a> {
    LocomotionCtx {
        body,
        tuning,
        movement: AxisSample::new(axis),
        probe: &NoCollision,
    }
}

fn body_at(speed: f32, grounded: bool) -> Body {
    Body {
        speed,
        grounded,
        ..Body::default()
    }
}

prop_compose! {
    fn frame()(axis in prop_oneof![Just(0.0f32), -1.0f32..=1.0], dt in 0.001f32..0.1) -> (f32, f32) {
        (axis, dt)
    }
}

fn allowed_change(from: StateId, to: StateId) -> bool {
    use LeafId::*;
    match (from, to) {
        (StateId::Grounded(_), StateId::Airborne) => true,
        (StateId::Airborne, StateId::Grounded(Idle | Run)) => true,
        (StateId::Grounded(a), StateId::Grounded(b)) => matches!(
            (a, b),
            (Idle, Run) | (Run, Skid) | (Run, Stop) | (Skid, Run) | (Skid, Stop) | (Stop, Idle)
        ),
        _ => false,
    }
}

proptest! {
    #[test]
    fn run_speed_stays_within_max(
        start in -8.0f32..=8.0,
        frames in prop::collection::vec(frame(), 1..200),
    ) {
        let tuning = Tuning::default();
        let mut body = body_at(start, true);
        let mut run = Run::default();
        run.enter(&mut ctx(&mut body, &tuning, 0.0));

        for (axis, dt) in frames {
            if let Transition::Go(_) = run.update(&mut ctx(&mut body, &tuning, axis), dt) {
                run.enter(&mut ctx(&mut body, &tuning, axis));
            }
            prop_assert!(body.speed.abs() <= tuning.max_speed);
        }
    }

    #[test]
    fn leaves_only_request_their_fixed_targets(
        start in -8.0f32..=8.0,
        frames in prop::collection::vec(frame(), 1..100),
    ) {
        let tuning = Tuning::default();
        let mut bodies = [start; 4].map(|s| body_at(s, true));
        let mut idle = Idle::default();
        let mut run = Run::default();
        let mut skid = Skid::default();
        let mut stop = Stop::default();
        skid.prime(SkidPayload { start_speed: start, target_speed: start / 2.0 });

        for (axis, dt) in frames {
            match idle.update(&mut ctx(&mut bodies[0], &tuning, axis), dt) {
                Transition::Stay | Transition::Go(LeafTransition::Run) => {}
                other => prop_assert!(false, "idle requested {:?}", other),
            }
            match run.update(&mut ctx(&mut bodies[1], &tuning, axis), dt) {
                Transition::Stay | Transition::Go(LeafTransition::Skid(_) | LeafTransition::Stop) => {}
                other => prop_assert!(false, "run requested {:?}", other),
            }
            match skid.update(&mut ctx(&mut bodies[2], &tuning, axis), dt) {
                Transition::Stay => {}
                Transition::Go(LeafTransition::Run | LeafTransition::Stop) => {
                    skid.enter(&mut ctx(&mut bodies[2], &tuning, axis));
                }
                other => prop_assert!(false, "skid requested {:?}", other),
            }
            match stop.update(&mut ctx(&mut bodies[3], &tuning, axis), dt) {
                Transition::Stay | Transition::Go(LeafTransition::Idle) => {}
                other => prop_assert!(false, "stop requested {:?}", other),
            }
        }
        prop_assert!(bodies.iter().all(|b| b.speed.is_finite()));
    }

    #[test]
    fn top_level_states_only_swap_with_each_other(
        frames in prop::collection::vec((frame(), any::<bool>()), 1..100),
    ) {
        let tuning = Tuning::default();
        let mut grounded = Grounded::default();
        let mut airborne = Airborne::default();
        let mut gb = body_at(0.0, true);
        let mut ab = body_at(0.0, false);
        grounded.enter(&mut ctx(&mut gb, &tuning, 0.0));
        airborne.enter(&mut ctx(&mut ab, &tuning, 0.0));

        for ((axis, dt), on_ground) in frames {
            gb.grounded = on_ground;
            ab.grounded = on_ground;
            let g = grounded.update(&mut ctx(&mut gb, &tuning, axis), dt);
            prop_assert!(matches!(g, Transition::Stay | Transition::Go(TopId::Airborne)));
            prop_assert_eq!(g == Transition::Go(TopId::Airborne), !on_ground);
            let a = airborne.update(&mut ctx(&mut ab, &tuning, axis), dt);
            prop_assert!(matches!(a, Transition::Stay | Transition::Go(TopId::Grounded)));
            prop_assert_eq!(a == Transition::Go(TopId::Grounded), on_ground);
        }
    }

    #[test]
    fn machine_follows_the_state_graph(
        frames in prop::collection::vec((frame(), prop::bool::weighted(0.9)), 1..400),
    ) {
        let tuning = Tuning::default();
        let mut body = body_at(0.0, true);
        let mut fsm = LocomotionFsm::new();

        for ((axis, dt), on_ground) in frames {
            body.grounded = on_ground;
            if let Some(change) = fsm.update(&mut ctx(&mut body, &tuning, axis), dt) {
                prop_assert!(
                    allowed_change(change.from, change.to),
                    "illegal change {} -> {}", change.from, change.to
                );
                prop_assert_eq!(change.to, fsm.current());
            }
            prop_assert!(body.speed.abs() <= tuning.max_speed);
            prop_assert!(!body.velocity.is_nan());
        }
    }

    #[test]
    fn stop_reaches_exact_zero(
        start in prop_oneof![-100.0f32..-0.01, 0.01f32..100.0],
        friction in 1.0f32..50.0,
        dt in 0.005f32..0.1,
    ) {
        let tuning = Tuning { stop_friction: friction, ..Tuning::default() };
        let mut body = body_at(start, true);
        let mut stop = Stop::default();
        stop.enter(&mut ctx(&mut body, &tuning, 0.0));

        let bound = (start.abs() / (friction * dt)).ceil() as usize + 2;
        let mut settled = false;
        for _ in 0..bound {
            if let Transition::Go(next) = stop.update(&mut ctx(&mut body, &tuning, 0.0), dt) {
                prop_assert_eq!(next, LeafTransition::Idle);
                settled = true;
                break;
            }
            prop_assert_eq!(body.speed.signum(), start.signum());
        }
        prop_assert!(settled, "still moving at {} after {} frames", body.speed, bound);
        prop_assert_eq!(body.speed, 0.0);
    }

    #[test]
    fn skid_moves_monotonically_then_flips(
        start_mag in 3.1f32..=8.0,
        negative in any::<bool>(),
        duration in 0.05f32..1.0,
        dt in 0.001f32..0.05,
        held in any::<bool>(),
    ) {
        let start = if negative { -start_mag } else { start_mag };
        let target = start / 2.0;
        let tuning = Tuning { skid_duration: duration, ..Tuning::default() };
        let mut body = body_at(start, true);
        let mut skid = Skid::default();
        skid.prime(SkidPayload { start_speed: start, target_speed: target });
        skid.enter(&mut ctx(&mut body, &tuning, 0.0));

        let axis = if held { -start.signum() } else { 0.0 };
        let mut gap = (start - target).abs();
        let bound = (duration / dt).ceil() as usize + 2;
        for _ in 0..bound {
            match skid.update(&mut ctx(&mut body, &tuning, axis), dt) {
                Transition::Stay => {
                    let next_gap = (body.speed - target).abs();
                    prop_assert!(next_gap <= gap + 1e-5);
                    gap = next_gap;
                }
                Transition::Go(next) => {
                    let expected = if held { LeafTransition::Run } else { LeafTransition::Stop };
                    prop_assert_eq!(next, expected);
                    prop_assert_eq!(body.speed, -target);
                    prop_assert_eq!(body.speed.signum(), -target.signum());
                    return Ok(());
                }
            }
        }
        prop_assert!(false, "skid never resolved");
    }
}
