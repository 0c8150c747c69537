use glam::Vec3;
use tracing::trace;

use crate::fsm::{State, StateClock, Transition};

use super::{Idle, LeafId, LeafTransition, LocomotionCtx, Run, Skid, Stop, TopId};

/// Remove the component of `movement` along `normal`, keeping its length.
///
/// Returns zero when `movement` is zero or points straight along the normal,
/// since no tangent direction exists to rescale.
pub fn project_onto_surface(movement: Vec3, normal: Vec3) -> Vec3 {
    let magnitude = movement.length();
    let Some(direction) = movement.try_normalize() else {
        return Vec3::ZERO;
    };
    let tangent = direction - normal * direction.dot(normal);
    tangent.normalize_or_zero() * magnitude
}

/// Composite state for everything done with ground contact.
///
/// Each frame it re-checks contact, projects the character's speed onto the
/// walking surface, gates it through the collision probe, and only then runs
/// the active leaf's decision logic.
#[derive(Debug)]
pub struct Grounded {
    clock: StateClock,
    idle: Idle,
    run: Run,
    skid: Skid,
    stop: Stop,
    active: LeafId,
}

impl Default for Grounded {
    fn default() -> Self {
        Self {
            clock: StateClock::default(),
            idle: Idle::default(),
            run: Run::default(),
            skid: Skid::default(),
            stop: Stop::default(),
            active: LeafId::Idle,
        }
    }
}

impl Grounded {
    pub fn active(&self) -> LeafId {
        self.active
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn skid(&self) -> &Skid {
        &self.skid
    }

    /// Commit this frame's surface velocity. Hitting an obstacle kills all
    /// speed outright. Returns whether the probe reported a hit.
    fn surface_step(ctx: &mut LocomotionCtx<'_>) -> bool {
        let body = &mut *ctx.body;
        body.flip_x = body.speed > 0.0;

        let movement = body.lateral * body.speed;
        let mut velocity = project_onto_surface(movement, body.ground_normal);

        let hit = ctx.probe.check_collision(velocity);
        if let Some(hit) = &hit {
            trace!(
                distance = hit.distance,
                speed = body.speed,
                "grounded collision, stopping"
            );
            body.speed = 0.0;
            velocity = Vec3::ZERO;
        }

        body.velocity = velocity;
        hit.is_some()
    }

    fn leaf_enter(&mut self, ctx: &mut LocomotionCtx<'_>) {
        match self.active {
            LeafId::Idle => self.idle.enter(ctx),
            LeafId::Run => self.run.enter(ctx),
            LeafId::Skid => self.skid.enter(ctx),
            LeafId::Stop => self.stop.enter(ctx),
        }
    }

    fn leaf_exit(&mut self, ctx: &mut LocomotionCtx<'_>) {
        match self.active {
            LeafId::Idle => self.idle.exit(ctx),
            LeafId::Run => self.run.exit(ctx),
            LeafId::Skid => self.skid.exit(ctx),
            LeafId::Stop => self.stop.exit(ctx),
        }
    }

    fn leaf_update(&mut self, ctx: &mut LocomotionCtx<'_>, dt: f32) -> Transition<LeafTransition> {
        match self.active {
            LeafId::Idle => self.idle.update(ctx, dt),
            LeafId::Run => self.run.update(ctx, dt),
            LeafId::Skid => self.skid.update(ctx, dt),
            LeafId::Stop => self.stop.update(ctx, dt),
        }
    }

    fn switch_leaf(&mut self, ctx: &mut LocomotionCtx<'_>, next: LeafTransition) {
        let from = self.active;
        self.leaf_exit(ctx);
        if let LeafTransition::Skid(payload) = next {
            self.skid.prime(payload);
        }
        self.active = next.target();
        self.leaf_enter(ctx);
        trace!(from = from.name(), to = self.active.name(), speed = ctx.body.speed, "leaf transition");
    }
}

impl<'a> State<LocomotionCtx<'a>> for Grounded {
    type Next = TopId;

    fn clock(&self) -> &StateClock {
        &self.clock
    }

    /// Landing with momentum resumes a run so Stop's grace and friction
    /// still apply; otherwise the character stands. The surface step runs
    /// here too so no airborne fall velocity survives the landing frame.
    fn enter(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.clock.reset();
        self.active = if ctx.body.speed != 0.0 {
            LeafId::Run
        } else {
            LeafId::Idle
        };
        Self::surface_step(ctx);
        self.leaf_enter(ctx);
    }

    fn update(&mut self, ctx: &mut LocomotionCtx<'a>, dt: f32) -> Transition<TopId> {
        if !ctx.body.grounded {
            return Transition::Go(TopId::Airborne);
        }

        let blocked = Self::surface_step(ctx);

        if let Transition::Go(next) = self.leaf_update(ctx, dt) {
            self.switch_leaf(ctx, next);
        }

        // Leaves must not revive speed on a blocked frame. A skid replays its
        // payload every frame, so a blocked skid gives up and stops.
        if blocked {
            ctx.body.speed = 0.0;
            if self.active == LeafId::Skid {
                self.switch_leaf(ctx, LeafTransition::Stop);
            }
        }

        self.clock.stay(dt)
    }

    fn exit(&mut self, ctx: &mut LocomotionCtx<'a>) {
        self.leaf_exit(ctx);
    }
}
