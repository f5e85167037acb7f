//! Physics system.
//!
//! Visits every enabled [`Rigidbody`] in the bound scene and reports its
//! mass. Bodies carry no kinematic state yet, so movable bodies only reach
//! the integration step and nothing is integrated.

use std::any::Any;

use ecs_component::{Component, Container, Rigidbody};
use tracing::{debug, trace, warn};

use crate::config::SystemConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::system::{System, SystemState};

/// Per-frame rigid-body processing.
#[derive(Debug)]
pub struct PhysicsSystem {
    state: SystemState,
    sink: Box<dyn DiagnosticSink>,
}

impl PhysicsSystem {
    /// Create a physics system reporting through [`TracingSink`].
    #[must_use]
    pub fn new(config: SystemConfig) -> Self {
        Self {
            state: SystemState::new(config),
            sink: Box::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    fn process(&mut self, body: &Rigidbody, dt: f32) {
        let owner = body.info().owner_name();
        debug!(
            system = self.state.name(),
            owner,
            component = body.name(),
            mass = body.mass,
            "rigidbody"
        );
        self.sink.emit(&Diagnostic::RigidbodyMass {
            owner: owner.to_owned(),
            component: body.name().to_owned(),
            mass: body.mass,
        });

        if !body.fixed {
            trace!(component = body.name(), dt, "integration step");
        }
    }
}

impl System for PhysicsSystem {
    fn state(&self) -> &SystemState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SystemState {
        &mut self.state
    }

    fn update(&mut self, dt: f32) {
        let Some(shared) = self.state.active_scene() else {
            return;
        };
        let Ok(scene) = shared.try_borrow() else {
            warn!(system = self.state.name(), "scene is mutably borrowed, skipping frame");
            return;
        };

        for body in scene.get_components::<Rigidbody>() {
            if body.is_enabled() {
                self.process(body, dt);
            }
        }

        for entity in scene.entities() {
            for body in entity.get_components::<Rigidbody>() {
                if body.is_enabled() {
                    self.process(body, dt);
                }
            }
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
