use glam::Vec3;

use crate::locomotion::LocomotionFsm;

/// Sprite slot selected by the active locomotion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Stand,
    Run1,
    Run2,
    /// Shared by skidding and friction stopping.
    Skid,
}

impl Pose {
    /// The other running frame. Any non-running pose restarts the cycle.
    pub fn next_run_frame(self) -> Pose {
        match self {
            Pose::Run1 => Pose::Run2,
            _ => Pose::Run1,
        }
    }
}

/// Shared physics and presentation state of one character.
///
/// Owned by the controller entity; states borrow it mutably for the single
/// frame they are active.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Signed scalar speed along `lateral`. Positive moves along `lateral`.
    pub speed: f32,
    /// Velocity committed by the last grounded/airborne step, units per second.
    pub velocity: Vec3,
    /// Ground contact, written by ground sensing before the FSM runs.
    pub grounded: bool,
    /// Unit normal of the surface under the character. Only meaningful while
    /// `grounded` is set.
    pub ground_normal: Vec3,
    /// Unit direction the movement axis drives along.
    pub lateral: Vec3,
    pub pose: Pose,
    /// Horizontal sprite flip, set when moving in the positive direction.
    pub flip_x: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            speed: 0.0,
            velocity: Vec3::ZERO,
            grounded: false,
            ground_normal: Vec3::Y,
            lateral: Vec3::X,
            pose: Pose::Stand,
            flip_x: false,
        }
    }
}

/// Marker: this entity is the player.
pub struct Player;

/// Collision extent of a character, used by the ground and sweep probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterShape {
    pub radius: f32,
}

/// FSM component attached to every character entity.
pub type PlayerFsm = LocomotionFsm;
