use crate::fsm::{State, Transition};

use super::{Airborne, Grounded, LocomotionCtx, StateId, TopId};

/// A change of active state observed across one `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: StateId,
    pub to: StateId,
}

/// Controller-side owner of the locomotion hierarchy.
///
/// Holds one instance of every top-level state and the active pointer.
/// The initial state is entered lazily on the first `update`.
#[derive(Debug)]
pub struct LocomotionFsm {
    grounded: Grounded,
    airborne: Airborne,
    active: TopId,
    entered: bool,
}

impl Default for LocomotionFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl LocomotionFsm {
    pub fn new() -> Self {
        Self {
            grounded: Grounded::default(),
            airborne: Airborne::default(),
            active: TopId::Grounded,
            entered: false,
        }
    }

    pub fn current(&self) -> StateId {
        match self.active {
            TopId::Grounded => StateId::Grounded(self.grounded.active()),
            TopId::Airborne => StateId::Airborne,
        }
    }

    pub fn airborne(&self) -> &Airborne {
        &self.airborne
    }

    /// Run one frame. Returns the observed change of active state, if any,
    /// including changes between grounded leaves.
    pub fn update(&mut self, ctx: &mut LocomotionCtx<'_>, dt: f32) -> Option<StateChange> {
        if !self.entered {
            self.enter_active(ctx);
            self.entered = true;
        }

        let before = self.current();
        let next = match self.active {
            TopId::Grounded => self.grounded.update(ctx, dt),
            TopId::Airborne => self.airborne.update(ctx, dt),
        };

        if let Transition::Go(next) = next {
            if next != self.active {
                self.exit_active(ctx);
                self.active = next;
                self.enter_active(ctx);
            }
        }

        let after = self.current();
        (before != after).then_some(StateChange {
            from: before,
            to: after,
        })
    }

    fn enter_active(&mut self, ctx: &mut LocomotionCtx<'_>) {
        match self.active {
            TopId::Grounded => self.grounded.enter(ctx),
            TopId::Airborne => self.airborne.enter(ctx),
        }
    }

    fn exit_active(&mut self, ctx: &mut LocomotionCtx<'_>) {
        match self.active {
            TopId::Grounded => self.grounded.exit(ctx),
            TopId::Airborne => self.airborne.exit(ctx),
        }
    }
}
