//! Generic data holder component.

use serde_json::Value;

use crate::component::ComponentInfo;

/// A component carrying an arbitrary JSON value.
///
/// No built-in system consumes it; hosts use it to attach tags and settings
/// to entities.
#[derive(Debug, Clone)]
pub struct Data {
    pub(crate) info: ComponentInfo,
    /// The payload.
    pub value: Value,
}

impl Data {
    /// Create an enabled data component.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            info: ComponentInfo::new(name, true),
            value,
        }
    }
}
