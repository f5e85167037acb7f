//! Rigid-body component.

use crate::component::ComponentInfo;

/// A rigid body.
///
/// Carries no position or velocity; the physics system only reports the mass
/// and branches on [`Rigidbody::fixed`].
#[derive(Debug, Clone)]
pub struct Rigidbody {
    pub(crate) info: ComponentInfo,
    /// Mass in kilograms.
    pub mass: f32,
    /// Fixed bodies are never integrated.
    pub fixed: bool,
}

impl Rigidbody {
    /// Create a rigid body. Starts disabled, massless and movable.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ComponentInfo::new(name, false),
            mass: 0.0,
            fixed: false,
        }
    }

    /// Builder: set the mass.
    #[must_use]
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Builder: set whether the body is fixed in place.
    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }
}
