mod ground;
mod locomotion;
mod motion;
mod raycast;

pub use ground::{ground_system, GROUND_NORMAL_DOT};
pub use locomotion::locomotion_system;
pub use motion::motion_system;
pub use raycast::{RaycastHit, StaticScene, SweepProbe};
