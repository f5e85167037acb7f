//! # ecs_component
//!
//! The "E" and "C" of the scene ECS: what a component is, how entities and
//! scenes contain them, and the built-in component kinds.
//!
//! This crate provides:
//!
//! - [`Component`] trait and [`AnyComponent`], the tagged variant containers
//!   store.
//! - [`Container`]: ordered, typed component lookups shared by entities and
//!   scenes.
//! - [`Entity`] and [`Scene`]: the composition model.
//! - [`Data`], [`Rigidbody`], [`SoundSource`]: built-in component kinds.
//! - [`Handle`]: process-unique instance identity.

pub mod component;
pub mod container;
pub mod data;
pub mod entity;
pub mod handle;
pub mod rigidbody;
pub mod scene;
pub mod sound;

pub use component::{AnyComponent, Component, ComponentInfo, ComponentKind, Owner};
pub use container::Container;
pub use data::Data;
pub use entity::Entity;
pub use handle::Handle;
pub use rigidbody::Rigidbody;
pub use scene::{Scene, SharedScene};
pub use sound::{PlaybackState, SoundSource};
