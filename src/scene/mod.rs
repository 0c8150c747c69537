pub mod demo_scene;
pub mod prefabs;

pub use demo_scene::{load_demo_scene, DemoScene};
