//! Hierarchical grounded-locomotion state machine for a 2D platformer
//! character, with the small hecs world and probes needed to drive it.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod fsm;
pub mod locomotion;
pub mod scene;
pub mod systems;

pub use config::Tuning;
pub use locomotion::{LeafId, LocomotionFsm, StateId};
