use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hecs::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stride::components::{Body, LocalTransform, PlayerFsm};
use stride::engine::input::ScriptedInput;
use stride::engine::time::{FixedClock, PHYSICS_DT};
use stride::scene::load_demo_scene;
use stride::systems::{ground_system, locomotion_system, motion_system};
use stride::Tuning;

#[derive(Parser)]
#[command(name = "stride", about = "Headless grounded-locomotion simulation")]
struct Args {
    /// JSON file overriding locomotion tunables
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Movement axis timeline as `time:value` pairs
    #[arg(long, default_value = "0:1,1:-1,4:0,4.5:1")]
    script: ScriptedInput,

    /// Simulated seconds
    #[arg(long, default_value_t = 11.0)]
    seconds: f32,

    /// Log filter, e.g. `stride=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter `{directives}`"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stride=info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut world = World::new();
    let scene = load_demo_scene(&mut world);
    let mut input = args.script;
    let mut clock = FixedClock::new(PHYSICS_DT);
    let frames = clock.frames_for(args.seconds);

    info!(frames, dt = clock.dt, keyframes = input.keyframes().len(), "starting simulation");

    let mut transitions = 0usize;
    for _ in 0..frames {
        ground_system(&mut world, &tuning, clock.dt);
        transitions += locomotion_system(&mut world, &input, &tuning, clock.dt).len();
        motion_system(&mut world, clock.dt);

        clock.tick();
        input.set_time(clock.elapsed);
    }

    let fsm = world
        .get::<&PlayerFsm>(scene.player)
        .context("player has no locomotion FSM")?;
    let body = world
        .get::<&Body>(scene.player)
        .context("player has no body")?;
    let local = world
        .get::<&LocalTransform>(scene.player)
        .context("player has no transform")?;
    info!(
        state = %fsm.current(),
        speed = body.speed,
        x = local.position.x,
        y = local.position.y,
        transitions,
        elapsed = clock.elapsed,
        "simulation finished"
    );

    Ok(())
}
