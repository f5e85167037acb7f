//! Scene type.
//!
//! A [`Scene`] is the top-level anchor of a frame: it holds its own
//! components like an entity does, plus a flat list of child entities.
//! Systems scan both, as two separate passes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::component::{AnyComponent, Component, ComponentInfo};
use crate::container::Container;
use crate::entity::Entity;
use crate::handle::Handle;

/// A scene shared between the host and the systems bound to it.
///
/// The core is single-threaded; the host mutates the scene between ticks and
/// systems borrow it during their update.
pub type SharedScene = Rc<RefCell<Scene>>;

/// The queryable world: scene-level components plus child entities.
#[derive(Debug, Clone)]
pub struct Scene {
    pub(crate) info: ComponentInfo,
    components: Vec<AnyComponent>,
    entities: Vec<Entity>,
}

impl Scene {
    /// Create an enabled, empty scene.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ComponentInfo::new(name, true),
            components: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Move the scene behind a [`SharedScene`].
    #[must_use]
    pub fn into_shared(self) -> SharedScene {
        Rc::new(RefCell::new(self))
    }

    /// The child entities, in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The child entities, mutably.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Attach an entity: sets its owner to this scene and appends it.
    pub fn add_entity(&mut self, mut entity: Entity) -> Handle {
        trace!(scene = %self.info.name(), entity = entity.name(), "entity added");
        entity.info_mut().attach(self.info.as_owner());
        let handle = entity.handle();
        self.entities.push(entity);
        handle
    }

    /// Builder: attach an entity.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.add_entity(entity);
        self
    }

    /// Builder: attach a scene-level component.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<AnyComponent>) -> Self {
        self.add_component(component);
        self
    }

    /// Remove the first entity with the given handle. Returns `None` if no
    /// entity was removed.
    pub fn remove_entity(&mut self, handle: Handle) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.handle() == handle)?;
        Some(self.entities.remove(index))
    }

    /// The first entity with the given name.
    #[must_use]
    pub fn find_entity_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name() == name)
    }

    /// The first entity with the given name, mutably.
    pub fn find_entity_by_name_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.name() == name)
    }

    /// The first entity with the given id.
    #[must_use]
    pub fn find_entity_by_id(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// The first entity with the given id, mutably.
    pub fn find_entity_by_id_mut(&mut self, id: u32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }
}

impl Container for Scene {
    fn components(&self) -> &[AnyComponent] {
        &self.components
    }

    fn components_vec_mut(&mut self) -> &mut Vec<AnyComponent> {
        &mut self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rigidbody, SoundSource};

    fn sample() -> Scene {
        Scene::new("MySampleScene")
            .with_entity(Entity::new("entityA"))
            .with_entity(Entity::new("entityB").with_id(1))
            .with_entity(Entity::new("entityA").with_id(2))
    }

    #[test]
    fn test_add_entity_sets_owner() {
        let scene = sample();
        let entity = scene.find_entity_by_name("entityB").unwrap();
        assert_eq!(entity.owner().unwrap().name, "MySampleScene");
        assert_eq!(entity.owner().unwrap().handle, scene.handle());
    }

    #[test]
    fn test_find_entity_first_match() {
        let scene = sample();
        assert_eq!(scene.find_entity_by_name("entityA").unwrap().id(), 0);
        assert_eq!(scene.find_entity_by_id(2).unwrap().name(), "entityA");
        assert!(scene.find_entity_by_name("entityC").is_none());
        assert!(scene.find_entity_by_id(7).is_none());
    }

    #[test]
    fn test_entity_lookups_do_not_search_components() {
        let scene = Scene::new("s").with_component(Entity::new("nested"));
        assert!(scene.find_entity_by_name("nested").is_none());
        assert!(scene.find_component_by_name::<Entity>("nested").is_some());
    }

    #[test]
    fn test_remove_entity() {
        let mut scene = Scene::new("s");
        let handle = scene.add_entity(Entity::new("gone"));
        let removed = scene.remove_entity(handle).unwrap();
        assert_eq!(removed.owner().unwrap().name, "s");
        assert!(scene.entities().is_empty());
        assert!(scene.remove_entity(handle).is_none());
    }

    #[test]
    fn test_scene_components_are_separate_from_entities() {
        let scene = Scene::new("s")
            .with_component(SoundSource::new("ambience", "wind.mp3"))
            .with_entity(Entity::new("e").with_component(Rigidbody::new("body")));
        assert!(scene.has_component::<SoundSource>());
        assert!(!scene.has_component::<Rigidbody>());
        assert!(scene.entities()[0].has_component::<Rigidbody>());
    }

    #[test]
    fn test_mutation_through_shared_scene() {
        let shared = sample().into_shared();
        shared
            .borrow_mut()
            .find_entity_by_name_mut("entityB")
            .unwrap()
            .add_component(Rigidbody::new("late"));
        let scene = shared.borrow();
        let entity = scene.find_entity_by_name("entityB").unwrap();
        assert_eq!(entity.get_component::<Rigidbody>().unwrap().owner().unwrap().name, "entityB");
    }
}
