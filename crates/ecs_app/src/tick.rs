//! Host tick loop.
//!
//! Each iteration:
//!
//! 1. Apply the console commands posted since the last tick.
//! 2. Bind the scene to every system (a no-op after the first tick).
//! 3. Update every system with a fixed `dt`.
//! 4. Sleep the frame delay so the output stays readable.

use std::time::Duration;

use ecs_component::{Container, Rigidbody, SharedScene, SoundSource};
use ecs_system::Engine;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::demo;
use crate::input::Command;

/// Configuration for the host tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Simulated ticks per second.
    pub tick_rate: f32,
    /// Wall-clock delay between ticks.
    pub frame_delay: Duration,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
    /// Entity whose sound [`Command::TogglePlayback`] toggles.
    pub sound_entity: String,
    /// Entity whose rigid body the mass commands adjust.
    pub body_entity: String,
}

impl TickConfig {
    /// Simulated seconds per tick.
    #[must_use]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            frame_delay: Duration::from_millis(500),
            max_ticks: 0,
            sound_entity: demo::ENTITY_A.to_owned(),
            body_entity: demo::ENTITY_B.to_owned(),
        }
    }
}

/// The host loop state: the engine, the scene it drives and a tick counter.
#[derive(Debug)]
pub struct TickLoop {
    /// Current tick counter.
    tick_id: u64,
    config: TickConfig,
    engine: Engine,
    scene: SharedScene,
}

impl TickLoop {
    /// Create a new tick loop.
    #[must_use]
    pub fn new(config: TickConfig, engine: Engine, scene: SharedScene) -> Self {
        Self {
            tick_id: 0,
            config,
            engine,
            scene,
        }
    }

    /// Returns the current tick counter.
    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    /// Returns the scene being driven.
    #[must_use]
    pub fn scene(&self) -> &SharedScene {
        &self.scene
    }

    /// Apply a console command to the scene. Returns `false` when the loop
    /// should stop.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Quit => return false,
            Command::TogglePlayback => self.toggle_playback(),
            Command::IncreaseMass => self.adjust_mass(1.0),
            Command::DecreaseMass => self.adjust_mass(-1.0),
        }
        true
    }

    fn toggle_playback(&self) {
        let mut scene = self.scene.borrow_mut();
        let sound = scene
            .find_entity_by_name_mut(&self.config.sound_entity)
            .and_then(|e| e.get_component_mut::<SoundSource>());
        match sound {
            Some(sound) => {
                sound.playback_state = sound.playback_state.toggled();
                info!(
                    entity = %self.config.sound_entity,
                    state = %sound.playback_state,
                    "playback toggled"
                );
            }
            None => warn!(entity = %self.config.sound_entity, "no sound to toggle"),
        }
    }

    fn adjust_mass(&self, delta: f32) {
        let mut scene = self.scene.borrow_mut();
        let body = scene
            .find_entity_by_name_mut(&self.config.body_entity)
            .and_then(|e| e.get_component_mut::<Rigidbody>());
        match body {
            Some(body) => {
                body.mass += delta;
                info!(entity = %self.config.body_entity, mass = body.mass, "mass adjusted");
            }
            None => warn!(entity = %self.config.body_entity, "no rigidbody to adjust"),
        }
    }

    /// Run one tick: bind the scene and update every system.
    pub fn tick(&mut self) {
        self.tick_id += 1;
        let dt = self.config.dt();
        debug!(tick_id = self.tick_id, dt, "tick start");
        self.engine.set_active_scene(&self.scene);
        self.engine.update_systems(dt);
    }

    /// Run until a [`Command::Quit`], Ctrl-C, or the configured tick limit.
    pub async fn run(&mut self, mut commands: UnboundedReceiver<Command>) {
        info!(
            tick_rate = self.config.tick_rate,
            frame_delay_ms = self.config.frame_delay.as_millis() as u64,
            max_ticks = self.config.max_ticks,
            "starting tick loop"
        );

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            while let Ok(command) = commands.try_recv() {
                if !self.apply(command) {
                    info!(ticks = self.tick_id, "quit requested");
                    return;
                }
            }

            self.tick();

            if self.config.max_ticks > 0 && self.tick_id >= self.config.max_ticks {
                info!(ticks = self.tick_id, "tick loop complete");
                return;
            }

            tokio::select! {
                () = tokio::time::sleep(self.config.frame_delay) => {}
                _ = &mut shutdown => {
                    info!(ticks = self.tick_id, "interrupted");
                    return;
                }
            }
        }
    }
}
