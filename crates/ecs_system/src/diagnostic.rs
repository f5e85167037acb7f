//! Diagnostic output of systems.
//!
//! Systems report each processing step as a [`Diagnostic`] written to an
//! injected [`DiagnosticSink`]. The core only needs the "write line"
//! capability; where the line ends up is the host's choice.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ecs_component::PlaybackState;
use tracing::info;

/// A notification emitted while processing a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A rigid body was visited by the physics system.
    RigidbodyMass {
        /// Name of the owning entity or scene.
        owner: String,
        /// Name of the rigid-body component.
        component: String,
        /// Current mass.
        mass: f32,
    },
    /// A sound's playback state changed since it was last observed.
    SoundChanged {
        /// Name of the owning entity or scene.
        owner: String,
        /// Track path.
        path: String,
        /// The new state.
        state: PlaybackState,
    },
    /// A disabled sound was forced back to stopped.
    SoundDisabled {
        /// Name of the owning entity or scene.
        owner: String,
        /// Track path.
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RigidbodyMass {
                owner,
                component,
                mass,
            } => write!(f, "\"{owner}\" rigidbody \"{component}\" Mass is : {mass}"),
            Self::SoundChanged { owner, path, state } => {
                write!(f, "\"{owner}\" sound \"{path}\" changed to {state}!")
            }
            Self::SoundDisabled { owner, path } => {
                write!(f, "\"{owner}\" sound \"{path}\" has been disabled!")
            }
        }
    }
}

/// Something that accepts human-readable diagnostic lines.
pub trait DiagnosticSink: fmt::Debug {
    /// Write one line.
    fn write_line(&mut self, line: &str);

    /// Render a diagnostic and write it.
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_line(&diagnostic.to_string());
    }
}

/// Forwards lines to `tracing` at info level. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write_line(&mut self, line: &str) {
        info!(target: "ecs_system::diagnostic", "{line}");
    }
}

/// Prints lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps every line in memory. Clones share the same buffer, so a host can
/// keep one clone and hand the other to a system.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Number of recorded lines containing `needle`.
    #[must_use]
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .borrow()
            .iter()
            .filter(|l| l.contains(needle))
            .count()
    }

    /// Drop every recorded line.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}
