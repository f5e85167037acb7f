//! Component containers.
//!
//! [`Container`] is the capability shared by [`Entity`](crate::Entity) and
//! [`Scene`](crate::Scene): an ordered list of components with typed lookups.
//! Every lookup is a linear scan in insertion order and the first match wins,
//! so ids and names may repeat.

use tracing::trace;

use crate::component::{AnyComponent, Component};
use crate::handle::Handle;

/// An ordered collection of components owned by a component.
pub trait Container: Component {
    /// The stored components, in insertion order.
    fn components(&self) -> &[AnyComponent];

    /// Raw access to the backing list. Prefer [`Container::add_component`],
    /// which also sets the owner.
    #[doc(hidden)]
    fn components_vec_mut(&mut self) -> &mut Vec<AnyComponent>;

    /// Attach a component: sets its owner to this container and appends it.
    ///
    /// No duplicate detection is done; adding a clone of an attached
    /// component produces a second entry with the same handle.
    fn add_component(&mut self, component: impl Into<AnyComponent>) -> Handle {
        let mut component = component.into();
        let owner = self.info().as_owner();
        trace!(
            owner = %owner.name,
            component = component.name(),
            handle = component.handle().id(),
            kind = %component.kind(),
            "component attached"
        );
        component.info_mut().attach(owner);
        let handle = component.handle();
        self.components_vec_mut().push(component);
        handle
    }

    /// Remove the first component with the given handle.
    ///
    /// Returns `None` if nothing was removed. The removed component keeps its
    /// owner back-reference.
    fn remove_component(&mut self, handle: Handle) -> Option<AnyComponent> {
        let components = self.components_vec_mut();
        let index = components.iter().position(|c| c.handle() == handle)?;
        Some(components.remove(index))
    }

    /// Returns `true` if any component is of kind `C`.
    fn has_component<C: Component>(&self) -> bool {
        self.components().iter().any(|c| C::from_any(c).is_some())
    }

    /// The first component of kind `C`.
    fn get_component<C: Component>(&self) -> Option<&C> {
        self.components().iter().find_map(C::from_any)
    }

    /// The first component of kind `C`, mutably.
    fn get_component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components_vec_mut().iter_mut().find_map(C::from_any_mut)
    }

    /// Every component of kind `C`, in insertion order.
    fn get_components<C: Component>(&self) -> impl Iterator<Item = &C> {
        self.components().iter().filter_map(C::from_any)
    }

    /// Every component of kind `C`, in insertion order, mutably.
    fn get_components_mut<C: Component>(&mut self) -> impl Iterator<Item = &mut C> {
        self.components_vec_mut()
            .iter_mut()
            .filter_map(C::from_any_mut)
    }

    /// The first component of kind `C` with the given name.
    fn find_component_by_name<C: Component>(&self, name: &str) -> Option<&C> {
        self.get_components::<C>().find(|c| c.name() == name)
    }

    /// The first component of kind `C` with the given name, mutably.
    fn find_component_by_name_mut<C: Component>(&mut self, name: &str) -> Option<&mut C> {
        self.get_components_mut::<C>().find(|c| c.name() == name)
    }

    /// The first component of kind `C` with the given id.
    fn find_component_by_id<C: Component>(&self, id: u32) -> Option<&C> {
        self.get_components::<C>().find(|c| c.id() == id)
    }

    /// The first component of kind `C` with the given id, mutably.
    fn find_component_by_id_mut<C: Component>(&mut self, id: u32) -> Option<&mut C> {
        self.get_components_mut::<C>().find(|c| c.id() == id)
    }
}
