//! Instance handles.
//!
//! A [`Handle`] is a lightweight `u64` identity given to every component,
//! entity and scene when it is constructed. Containers use it for identity
//! based removal and components use it to point back at their owner without
//! holding a reference to it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Next handle to hand out. Starts at 1 so that no live handle is zero.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// A process-unique instance identity.
///
/// Handles are unrelated to the user-facing `id` of a component, which is
/// free-form and may repeat inside a container. Cloning a component keeps
/// its handle, so a clone is the same instance as far as identity goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Allocates a fresh handle.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_produces_increasing_handles() {
        let h1 = Handle::next();
        let h2 = Handle::next();
        assert_ne!(h1, h2);
        assert!(h1.id() > 0);
        assert!(h2.id() > h1.id());
    }

    #[test]
    fn test_copy_is_equal() {
        let h = Handle::next();
        let copy = h;
        assert_eq!(h, copy);
        assert_eq!(h.id(), copy.id());
    }
}
