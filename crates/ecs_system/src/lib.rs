//! # ecs_system
//!
//! The "S" in ECS: per-frame processing units and the engine that drives
//! them.
//!
//! The host loop binds a scene and ticks the engine once per frame:
//!
//! ```rust
//! use ecs_component::{Component, Entity, Rigidbody, Scene};
//! use ecs_system::{Engine, PhysicsSystem, RecordingSink, SystemConfig};
//!
//! let recorder = RecordingSink::new();
//! let mut engine = Engine::new();
//! engine
//!     .add_system(PhysicsSystem::new(SystemConfig::new("physics")).with_sink(recorder.clone()))
//!     .unwrap();
//!
//! let scene = Scene::new("world")
//!     .with_entity(Entity::new("crate").with_component(Rigidbody::new("body").with_mass(2.0).with_enabled(true)))
//!     .into_shared();
//!
//! engine.set_active_scene(&scene);
//! engine.update_systems(1.0 / 60.0);
//! assert_eq!(recorder.lines(), vec!["\"crate\" rigidbody \"body\" Mass is : 2"]);
//! ```

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod error;
pub mod physics;
pub mod sound;
pub mod system;

pub use config::SystemConfig;
pub use diagnostic::{Diagnostic, DiagnosticSink, RecordingSink, StdoutSink, TracingSink};
pub use engine::Engine;
pub use error::EngineError;
pub use physics::PhysicsSystem;
pub use sound::SoundSystem;
pub use system::{System, SystemState};
