//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "name": "Level1",
//!   "components": [{ "kind": "sound", "name": "Wind", "path": "wind.mp3", "enabled": true }],
//!   "entities": [
//!     { "name": "crate", "components": [{ "kind": "rigidbody", "name": "Body", "mass": 4.0, "enabled": true }] }
//!   ]
//! }
//! ```
//!
//! Omitted `enabled` flags follow the component constructors: entities, scenes
//! and data components start enabled, rigid bodies and sounds start disabled.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ecs_component::{AnyComponent, Component, Data, Entity, PlaybackState, Rigidbody, Scene, SoundSource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

fn enabled() -> bool {
    true
}

/// A scene and everything in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub name: String,
    #[serde(default)]
    pub id: u32,
    #[serde(default = "enabled")]
    pub enabled: bool,
    /// Scene-level components.
    #[serde(default)]
    pub components: Vec<ComponentFile>,
    #[serde(default)]
    pub entities: Vec<EntityFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityFile {
    pub name: String,
    #[serde(default)]
    pub id: u32,
    #[serde(default = "enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub components: Vec<ComponentFile>,
}

/// One component, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ComponentFile {
    Data {
        name: String,
        #[serde(default)]
        id: u32,
        #[serde(default = "enabled")]
        enabled: bool,
        #[serde(default)]
        value: Value,
    },
    Rigidbody {
        name: String,
        #[serde(default)]
        id: u32,
        #[serde(default)]
        enabled: bool,
        #[serde(default)]
        mass: f32,
        #[serde(default)]
        fixed: bool,
    },
    Sound {
        name: String,
        #[serde(default)]
        id: u32,
        #[serde(default)]
        enabled: bool,
        path: String,
        #[serde(default)]
        state: PlaybackState,
    },
}

impl ComponentFile {
    fn build(self) -> AnyComponent {
        match self {
            Self::Data {
                name,
                id,
                enabled,
                value,
            } => Data::new(name, value)
                .with_id(id)
                .with_enabled(enabled)
                .into(),
            Self::Rigidbody {
                name,
                id,
                enabled,
                mass,
                fixed,
            } => Rigidbody::new(name)
                .with_mass(mass)
                .with_fixed(fixed)
                .with_id(id)
                .with_enabled(enabled)
                .into(),
            Self::Sound {
                name,
                id,
                enabled,
                path,
                state,
            } => SoundSource::new(name, path)
                .with_state(state)
                .with_id(id)
                .with_enabled(enabled)
                .into(),
        }
    }
}

impl EntityFile {
    fn build(self) -> Entity {
        self.components.into_iter().fold(
            Entity::new(self.name).with_id(self.id).with_enabled(self.enabled),
            |entity, component| entity.with_component(component.build()),
        )
    }
}

impl SceneFile {
    /// Parse a JSON scene description.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build the scene, attaching components and entities in file order.
    #[must_use]
    pub fn build(self) -> Scene {
        let mut scene = Scene::new(self.name)
            .with_id(self.id)
            .with_enabled(self.enabled);
        for component in self.components {
            scene = scene.with_component(component.build());
        }
        for entity in self.entities {
            scene = scene.with_entity(entity.build());
        }
        scene
    }
}

/// Read and build the scene stored at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid scene description.
pub fn load(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let file = SceneFile::parse(&text)
        .with_context(|| format!("invalid scene file {}", path.display()))?;
    let scene = file.build();
    info!(
        file = %path.display(),
        scene = scene.name(),
        entities = scene.entities().len(),
        "scene loaded"
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use ecs_component::Container;

    use super::*;

    const SAMPLE: &str = include_str!("../scenes/sample.json");

    #[test]
    fn test_bundled_sample_matches_demo_scene() {
        let scene = SceneFile::parse(SAMPLE).unwrap().build();
        assert_eq!(scene.name(), crate::demo::SAMPLE_SCENE);

        let a = scene.find_entity_by_name(crate::demo::ENTITY_A).unwrap();
        let sound = a.get_component::<SoundSource>().unwrap();
        assert!(sound.is_enabled());
        assert_eq!(sound.playback_state, PlaybackState::Playing);
        assert_eq!(sound.owner().unwrap().name, "entityA");

        let b = scene.find_entity_by_name(crate::demo::ENTITY_B).unwrap();
        assert_eq!(b.id(), 1);
        assert!(!b.get_component::<SoundSource>().unwrap().is_enabled());
        let body = b.get_component::<Rigidbody>().unwrap();
        assert_eq!(body.mass, 100.0);
        assert!(body.fixed);
        assert!(body.is_enabled());
    }

    #[test]
    fn test_defaults_follow_constructors() {
        let scene = SceneFile::parse(
            r#"{
                "name": "bare",
                "components": [
                    { "kind": "data", "name": "tag" },
                    { "kind": "rigidbody", "name": "body" },
                    { "kind": "sound", "name": "s", "path": "a.mp3" }
                ],
                "entities": [{ "name": "e" }]
            }"#,
        )
        .unwrap()
        .build();

        assert!(scene.is_enabled());
        assert!(scene.get_component::<Data>().unwrap().is_enabled());
        assert!(!scene.get_component::<Rigidbody>().unwrap().is_enabled());
        let sound = scene.get_component::<SoundSource>().unwrap();
        assert!(!sound.is_enabled());
        assert_eq!(sound.playback_state, PlaybackState::Stopped);
        assert!(scene.entities()[0].is_enabled());
        assert_eq!(sound.owner().unwrap().name, "bare");
    }

    #[test]
    fn test_component_order_is_file_order() {
        let scene = SceneFile::parse(
            r#"{
                "name": "ordered",
                "entities": [{
                    "name": "e",
                    "components": [
                        { "kind": "rigidbody", "name": "first", "id": 3 },
                        { "kind": "data", "name": "between", "value": [1, 2] },
                        { "kind": "rigidbody", "name": "second", "id": 3 }
                    ]
                }]
            }"#,
        )
        .unwrap()
        .build();
        let e = &scene.entities()[0];
        let names: Vec<&str> = e.get_components::<Rigidbody>().map(|b| b.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(e.find_component_by_id::<Rigidbody>(3).unwrap().name(), "first");
        assert_eq!(e.get_component::<Data>().unwrap().value, serde_json::json!([1, 2]));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = SceneFile::parse(r#"{ "name": "x", "components": [{ "kind": "light", "name": "l" }] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read scene file"));
    }
}
