//! Entity type.
//!
//! An [`Entity`] is a named component container. It is itself a
//! [`Component`](crate::Component), so entities can own sub-entities.

use crate::component::{AnyComponent, ComponentInfo};
use crate::container::Container;

/// A component container.
#[derive(Debug, Clone)]
pub struct Entity {
    pub(crate) info: ComponentInfo,
    components: Vec<AnyComponent>,
}

impl Entity {
    /// Create an enabled, empty entity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ComponentInfo::new(name, true),
            components: Vec::new(),
        }
    }

    /// Builder: attach a component.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<AnyComponent>) -> Self {
        self.add_component(component);
        self
    }
}

impl Container for Entity {
    fn components(&self) -> &[AnyComponent] {
        &self.components
    }

    fn components_vec_mut(&mut self) -> &mut Vec<AnyComponent> {
        &mut self.components
    }
}
