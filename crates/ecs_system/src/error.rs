//! Engine error types.

/// Errors raised by the [`Engine`](crate::Engine) registry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// A system with the same name is already registered.
    #[error("a system named '{0}' is already registered")]
    DuplicateSystem(String),
}
