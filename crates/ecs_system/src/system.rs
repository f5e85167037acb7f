//! The [`System`] trait.
//!
//! A system is a per-frame processing unit bound to one active scene. The
//! engine rebinds the scene every frame; a system only reacts (through
//! [`System::on_scene_changed`]) when the scene actually differs from the one
//! it already holds.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use ecs_component::{Component, SharedScene};
use tracing::debug;

use crate::config::SystemConfig;

/// State shared by every system: identity, enable flag and bound scene.
pub struct SystemState {
    name: String,
    id: u32,
    enabled: bool,
    current_scene: Option<SharedScene>,
}

impl SystemState {
    /// Create the state from a config. No scene is bound.
    #[must_use]
    pub fn new(config: SystemConfig) -> Self {
        Self {
            name: config.name,
            id: config.id,
            enabled: config.enabled,
            current_scene: None,
        }
    }

    /// The registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user-assigned id.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns `true` if the system is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the system.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The bound scene.
    #[must_use]
    pub fn current_scene(&self) -> Option<&SharedScene> {
        self.current_scene.as_ref()
    }

    /// The bound scene, but only when the system should run this frame.
    #[must_use]
    pub fn active_scene(&self) -> Option<SharedScene> {
        if self.enabled {
            self.current_scene.clone()
        } else {
            None
        }
    }

    /// Replace the bound scene. Returns `true` if it differs (by identity)
    /// from the previous one.
    fn replace_scene(&mut self, scene: Option<SharedScene>) -> bool {
        let changed = match (&self.current_scene, &scene) {
            (Some(current), Some(next)) => !Rc::ptr_eq(current, next),
            (None, None) => false,
            _ => true,
        };
        if changed {
            self.current_scene = scene;
        }
        changed
    }
}

impl fmt::Debug for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self
            .current_scene
            .as_ref()
            .and_then(|s| s.try_borrow().ok().map(|s| s.info().name().to_owned()));
        f.debug_struct("SystemState")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("enabled", &self.enabled)
            .field("current_scene", &scene)
            .finish()
    }
}

/// A per-frame processing unit.
///
/// Implementors own a [`SystemState`] and implement [`System::update`]; the
/// provided methods handle identity and scene binding.
pub trait System: Any + fmt::Debug {
    /// Shared system state.
    fn state(&self) -> &SystemState;

    /// Shared system state, mutably.
    fn state_mut(&mut self) -> &mut SystemState;

    /// Run one frame. Must be a no-op when the system is disabled or no
    /// scene is bound.
    fn update(&mut self, dt: f32);

    /// Called after the bound scene changed.
    fn on_scene_changed(&mut self) {}

    /// Upcast for kind lookups in the engine.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for kind lookups in the engine, mutably.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The registry name.
    fn name(&self) -> &str {
        self.state().name()
    }

    /// The user-assigned id.
    fn id(&self) -> u32 {
        self.state().id()
    }

    /// Returns `true` if the system is enabled.
    fn is_enabled(&self) -> bool {
        self.state().is_enabled()
    }

    /// Enable or disable the system.
    fn set_enabled(&mut self, enabled: bool) {
        self.state_mut().set_enabled(enabled);
    }

    /// The bound scene.
    fn current_scene(&self) -> Option<&SharedScene> {
        self.state().current_scene()
    }

    /// Bind a scene (or none). Fires [`System::on_scene_changed`] only when
    /// the scene differs by identity from the current one, and returns
    /// whether it did.
    fn set_current_scene(&mut self, scene: Option<SharedScene>) -> bool {
        if !self.state_mut().replace_scene(scene) {
            return false;
        }
        debug!(system = self.name(), "scene changed");
        self.on_scene_changed();
        true
    }
}
