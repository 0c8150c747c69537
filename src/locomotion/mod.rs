//! Grounded locomotion state machine.
//!
//! ```text
//! LocomotionFsm
//! ├── Grounded ── Idle ⇄ Run ⇄ Skid
//! │                 ↑     ↓     ↓
//! │                 └──── Stop ←┘
//! └── Airborne
//! ```
//!
//! Every state is built once inside [`LocomotionFsm`] and reused; only the
//! active designation moves. Per-frame order is ground physics in
//! [`Grounded`] first, then the active leaf's decision logic.

mod airborne;
mod ctx;
mod grounded;
mod idle;
mod machine;
mod run;
mod skid;
mod stop;

pub use airborne::Airborne;
pub use ctx::{CollisionProbe, LocomotionCtx, NoCollision};
pub use grounded::{project_onto_surface, Grounded};
pub use idle::Idle;
pub use machine::{LocomotionFsm, StateChange};
pub use run::Run;
pub use skid::{Skid, SkidPayload};
pub use stop::{Stop, STOP_EPSILON};

use std::fmt;

/// The four grounded leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafId {
    Idle,
    Run,
    Skid,
    Stop,
}

impl LeafId {
    pub fn name(self) -> &'static str {
        match self {
            LeafId::Idle => "idle",
            LeafId::Run => "run",
            LeafId::Skid => "skid",
            LeafId::Stop => "stop",
        }
    }
}

/// Top-level states owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopId {
    Grounded,
    Airborne,
}

/// Fully qualified active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Grounded(LeafId),
    Airborne,
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateId::Grounded(leaf) => write!(f, "grounded/{}", leaf.name()),
            StateId::Airborne => f.write_str("airborne"),
        }
    }
}

/// Transition requested by a grounded leaf. Skid carries the interpolation
/// endpoints captured from the outgoing Run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LeafTransition {
    Idle,
    Run,
    Skid(SkidPayload),
    Stop,
}

impl LeafTransition {
    pub fn target(&self) -> LeafId {
        match self {
            LeafTransition::Idle => LeafId::Idle,
            LeafTransition::Run => LeafId::Run,
            LeafTransition::Skid(_) => LeafId::Skid,
            LeafTransition::Stop => LeafId::Stop,
        }
    }
}
