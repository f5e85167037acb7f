//! # ecs_app: console host
//!
//! Builds the engine and a scene, starts the background key listener and
//! ticks the engine until asked to stop.
//!
//! ## Controls
//!
//! Type a key and press enter:
//!
//! - `p`: toggle the controlled entity's sound between playing and paused.
//! - `+` / `-`: adjust the controlled entity's rigid-body mass.
//! - `q` or `esc`: quit.

mod cli;
mod demo;
mod input;
mod scene_file;
mod tick;

use anyhow::{Context, Result};
use clap::Parser;
use ecs_component::Component;
use ecs_system::{StdoutSink, TracingSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Args, Output};
use tick::TickLoop;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ecs_app=info".parse()?)
                .add_directive("ecs_system::diagnostic=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => scene_file::load(path)?,
        None => demo::build_scene(),
    };
    let engine = match args.output {
        Output::Console => demo::build_engine(StdoutSink)?,
        Output::Tracing => demo::build_engine(TracingSink)?,
    };
    info!(
        scene = scene.name(),
        systems = engine.system_count(),
        "engine ready (p: toggle sound, +/-: mass, q: quit)"
    );

    let commands = input::spawn_listener().context("failed to start key listener")?;
    let mut tick_loop = TickLoop::new(args.tick_config(), engine, scene.into_shared());
    tick_loop.run(commands).await;

    info!(
        ticks = tick_loop.tick_id(),
        scene = tick_loop.scene().borrow().name(),
        "engine host shut down"
    );
    Ok(())
}
