//! System configuration.

/// Configuration a system is constructed from.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Unique registry name (e.g. `"SamplePhysicsSystem"`).
    pub name: String,
    /// User-assigned id.
    pub id: u32,
    /// Whether the system starts enabled.
    pub enabled: bool,
}

impl SystemConfig {
    /// Create an enabled system config with the given name and id 0.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: 0,
            enabled: true,
        }
    }

    /// Set the id.
    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Start the system disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
