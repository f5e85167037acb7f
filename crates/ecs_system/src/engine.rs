//! Engine: the system registry and per-frame driver.
//!
//! Systems are registered once at startup under a unique name. Each frame the
//! host binds the active scene with [`Engine::set_active_scene`] and then
//! calls [`Engine::update_systems`], which runs every system in registration
//! order. Systems run sequentially and may observe what earlier systems did
//! to the scene in the same frame.

use std::rc::Rc;

use ecs_component::SharedScene;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::system::System;

/// Registry of all systems, in registration order.
#[derive(Debug, Default)]
pub struct Engine {
    /// Registered systems. Names are unique.
    systems: Vec<Box<dyn System>>,
}

impl Engine {
    /// Create a new engine with no systems.
    #[must_use]
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Register a system under its name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateSystem`] if a system with the same name
    /// is already registered. The existing system is left in place.
    pub fn add_system(&mut self, system: impl System) -> Result<(), EngineError> {
        self.add_boxed_system(Box::new(system))
    }

    /// Register an already boxed system, e.g. one returned by
    /// [`Engine::remove_system`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateSystem`] on a name clash.
    pub fn add_boxed_system(&mut self, system: Box<dyn System>) -> Result<(), EngineError> {
        if self.systems.iter().any(|s| s.name() == system.name()) {
            return Err(EngineError::DuplicateSystem(system.name().to_owned()));
        }
        info!(system = system.name(), id = system.id(), "system registered");
        self.systems.push(system);
        Ok(())
    }

    /// Remove a system by name.
    ///
    /// Returns the system if it was registered.
    pub fn remove_system(&mut self, name: &str) -> Option<Box<dyn System>> {
        let index = self.systems.iter().position(|s| s.name() == name)?;
        info!(system = name, "system removed");
        Some(self.systems.remove(index))
    }

    /// The first registered system of kind `K`.
    #[must_use]
    pub fn get_system<K: System>(&self) -> Option<&K> {
        self.systems
            .iter()
            .find_map(|s| s.as_any().downcast_ref::<K>())
    }

    /// The first registered system of kind `K`, mutably.
    pub fn get_system_mut<K: System>(&mut self) -> Option<&mut K> {
        self.systems
            .iter_mut()
            .find_map(|s| s.as_any_mut().downcast_mut::<K>())
    }

    /// The system of kind `K` registered under `name`.
    #[must_use]
    pub fn get_system_named<K: System>(&self, name: &str) -> Option<&K> {
        self.systems
            .iter()
            .filter(|s| s.name() == name)
            .find_map(|s| s.as_any().downcast_ref::<K>())
    }

    /// The system of kind `K` registered under `name`, mutably.
    pub fn get_system_named_mut<K: System>(&mut self, name: &str) -> Option<&mut K> {
        self.systems
            .iter_mut()
            .filter(|s| s.name() == name)
            .find_map(|s| s.as_any_mut().downcast_mut::<K>())
    }

    /// Bind `scene` to every registered system. Systems already bound to this
    /// scene are left untouched.
    pub fn set_active_scene(&mut self, scene: &SharedScene) {
        for system in &mut self.systems {
            system.set_current_scene(Some(Rc::clone(scene)));
        }
    }

    /// Unbind the scene from every registered system.
    pub fn clear_active_scene(&mut self) {
        for system in &mut self.systems {
            system.set_current_scene(None);
        }
    }

    /// Run every system's update once, in registration order.
    pub fn update_systems(&mut self, dt: f32) {
        debug!(dt, systems = self.systems.len(), "updating systems");
        for system in &mut self.systems {
            system.update(dt);
        }
    }

    /// Returns the number of registered systems.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Returns `true` if no system is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Names of the registered systems, in registration order.
    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.iter().map(|s| s.name())
    }
}
