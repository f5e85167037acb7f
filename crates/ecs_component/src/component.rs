//! Core [`Component`] trait and associated metadata.
//!
//! Every unit of data attached to an entity or scene implements
//! [`Component`]. The set of component kinds is closed: containers store
//! [`AnyComponent`], a tagged variant over every kind, and typed queries
//! resolve through [`Component::from_any`] instead of runtime type tests.

use std::fmt;

use crate::data::Data;
use crate::entity::Entity;
use crate::handle::Handle;
use crate::rigidbody::Rigidbody;
use crate::scene::Scene;
use crate::sound::SoundSource;

/// Non-owning back-reference from a component to the container it was
/// attached to.
///
/// Only used for diagnostic context, e.g. naming the entity whose sound
/// changed. Holding the owner's handle rather than a reference keeps the
/// ownership graph acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Handle of the owning container.
    pub handle: Handle,
    /// Name of the owning container at attach time.
    pub name: String,
}

/// The fields shared by every component: identity, name, enable flag and
/// owner.
#[derive(Debug, Clone)]
pub struct ComponentInfo {
    handle: Handle,
    name: String,
    id: u32,
    enabled: bool,
    owner: Option<Owner>,
}

impl ComponentInfo {
    /// Create the info block for a new component instance.
    #[must_use]
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            handle: Handle::next(),
            name: name.into(),
            id: 0,
            enabled,
            owner: None,
        }
    }

    /// The instance handle.
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user-assigned id. Not unique.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns `true` if the component is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the component.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The container this component was attached to, if any.
    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Name of the owner, or an empty string for a detached component.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map_or("", |o| o.name.as_str())
    }

    /// Builds the back-reference children of this container receive.
    #[must_use]
    pub fn as_owner(&self) -> Owner {
        Owner {
            handle: self.handle,
            name: self.name.clone(),
        }
    }

    pub(crate) fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub(crate) fn attach(&mut self, owner: Owner) {
        if let Some(previous) = &self.owner {
            tracing::warn!(
                component = %self.name,
                previous = %previous.name,
                owner = %owner.name,
                "component re-attached to a second container"
            );
        }
        self.owner = Some(owner);
    }
}

/// The kind tag of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Generic data holder.
    Data,
    /// Rigid body.
    Rigidbody,
    /// Sound source.
    Sound,
    /// Entity, a component container.
    Entity,
    /// Scene, the top-level entity container.
    Scene,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Data => "Data",
            Self::Rigidbody => "Rigidbody",
            Self::Sound => "Sound",
            Self::Entity => "Entity",
            Self::Scene => "Scene",
        };
        f.write_str(s)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// The core component trait.
///
/// Implemented by every kind stored in [`AnyComponent`]. The trait is sealed:
/// the kind set is closed so that typed lookups are a tag match.
///
/// # Examples
///
/// ```rust
/// use ecs_component::{Component, Container, Entity, Rigidbody};
///
/// let mut entity = Entity::new("crate");
/// entity.add_component(Rigidbody::new("body").with_mass(12.0).with_enabled(true));
///
/// let body = entity.get_component::<Rigidbody>().unwrap();
/// assert_eq!(body.owner().unwrap().name, "crate");
/// ```
pub trait Component: sealed::Sealed + Sized + 'static {
    /// The kind tag for this component type.
    const KIND: ComponentKind;

    /// Shared component fields.
    fn info(&self) -> &ComponentInfo;

    /// Mutable shared component fields.
    fn info_mut(&mut self) -> &mut ComponentInfo;

    /// Resolve a stored component to this kind.
    fn from_any(any: &AnyComponent) -> Option<&Self>;

    /// Resolve a stored component to this kind, mutably.
    fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self>;

    /// Wrap this component in the tagged variant.
    fn into_any(self) -> AnyComponent;

    /// The component name.
    fn name(&self) -> &str {
        self.info().name()
    }

    /// The user-assigned id.
    fn id(&self) -> u32 {
        self.info().id()
    }

    /// The instance handle.
    fn handle(&self) -> Handle {
        self.info().handle()
    }

    /// Returns `true` if the component is enabled.
    fn is_enabled(&self) -> bool {
        self.info().is_enabled()
    }

    /// Enable or disable the component.
    fn set_enabled(&mut self, enabled: bool) {
        self.info_mut().set_enabled(enabled);
    }

    /// The container this component was attached to.
    fn owner(&self) -> Option<&Owner> {
        self.info().owner()
    }

    /// Builder: set the user-assigned id.
    #[must_use]
    fn with_id(mut self, id: u32) -> Self {
        self.info_mut().set_id(id);
        self
    }

    /// Builder: set the enable flag.
    #[must_use]
    fn with_enabled(mut self, enabled: bool) -> Self {
        self.info_mut().set_enabled(enabled);
        self
    }
}

/// A component of any kind, as stored inside containers.
#[derive(Debug, Clone)]
pub enum AnyComponent {
    /// See [`Data`].
    Data(Data),
    /// See [`Rigidbody`].
    Rigidbody(Rigidbody),
    /// See [`SoundSource`].
    Sound(SoundSource),
    /// See [`Entity`].
    Entity(Entity),
    /// See [`Scene`].
    Scene(Scene),
}

impl AnyComponent {
    /// The kind tag of the wrapped component.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Data(_) => ComponentKind::Data,
            Self::Rigidbody(_) => ComponentKind::Rigidbody,
            Self::Sound(_) => ComponentKind::Sound,
            Self::Entity(_) => ComponentKind::Entity,
            Self::Scene(_) => ComponentKind::Scene,
        }
    }

    /// Shared component fields.
    #[must_use]
    pub fn info(&self) -> &ComponentInfo {
        match self {
            Self::Data(c) => c.info(),
            Self::Rigidbody(c) => c.info(),
            Self::Sound(c) => c.info(),
            Self::Entity(c) => c.info(),
            Self::Scene(c) => c.info(),
        }
    }

    /// Mutable shared component fields.
    pub fn info_mut(&mut self) -> &mut ComponentInfo {
        match self {
            Self::Data(c) => c.info_mut(),
            Self::Rigidbody(c) => c.info_mut(),
            Self::Sound(c) => c.info_mut(),
            Self::Entity(c) => c.info_mut(),
            Self::Scene(c) => c.info_mut(),
        }
    }

    /// The component name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.info().name()
    }

    /// The user-assigned id.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.info().id()
    }

    /// The instance handle.
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.info().handle()
    }

    /// Returns `true` if the component is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.info().is_enabled()
    }

    /// The container this component was attached to.
    #[must_use]
    pub fn owner(&self) -> Option<&Owner> {
        self.info().owner()
    }

    /// Resolve to a concrete kind.
    #[must_use]
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        C::from_any(self)
    }

    /// Resolve to a concrete kind, mutably.
    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        C::from_any_mut(self)
    }
}

macro_rules! impl_component {
    ($ty:ident, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl Component for $ty {
            const KIND: ComponentKind = ComponentKind::$variant;

            fn info(&self) -> &ComponentInfo {
                &self.info
            }

            fn info_mut(&mut self) -> &mut ComponentInfo {
                &mut self.info
            }

            fn from_any(any: &AnyComponent) -> Option<&Self> {
                match any {
                    AnyComponent::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn from_any_mut(any: &mut AnyComponent) -> Option<&mut Self> {
                match any {
                    AnyComponent::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn into_any(self) -> AnyComponent {
                AnyComponent::$variant(self)
            }
        }

        impl From<$ty> for AnyComponent {
            fn from(value: $ty) -> Self {
                AnyComponent::$variant(value)
            }
        }
    };
}

impl_component!(Data, Data);
impl_component!(Rigidbody, Rigidbody);
impl_component!(SoundSource, Sound);
impl_component!(Entity, Entity);
impl_component!(Scene, Scene);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let any: AnyComponent = Rigidbody::new("body").into();
        assert_eq!(any.kind(), ComponentKind::Rigidbody);
        assert_eq!(any.kind(), Rigidbody::KIND);
    }

    #[test]
    fn test_downcast_rejects_other_kinds() {
        let any: AnyComponent = SoundSource::new("music", "a.mp3").into();
        assert!(any.downcast_ref::<SoundSource>().is_some());
        assert!(any.downcast_ref::<Rigidbody>().is_none());
        assert!(any.downcast_ref::<Entity>().is_none());
    }

    #[test]
    fn test_builders_set_id_and_enabled() {
        let body = Rigidbody::new("body").with_id(9).with_enabled(true);
        assert_eq!(body.id(), 9);
        assert!(body.is_enabled());
        assert!(body.owner().is_none());
    }

    #[test]
    fn test_clone_keeps_handle() {
        let body = Rigidbody::new("body");
        let copy = body.clone();
        assert_eq!(body.handle(), copy.handle());
    }

    #[test]
    fn test_distinct_instances_have_distinct_handles() {
        let a = Data::new("a", serde_json::Value::Null);
        let b = Data::new("a", serde_json::Value::Null);
        assert_ne!(a.handle(), b.handle());
    }

    #[test]
    fn test_owner_name_empty_when_detached() {
        let info = ComponentInfo::new("loose", true);
        assert_eq!(info.owner_name(), "");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ComponentKind::Sound.to_string(), "Sound");
        assert_eq!(ComponentKind::Scene.to_string(), "Scene");
    }
}
