//! Sample world: the engine with both built-in systems and a two-entity
//! scene.

use ecs_component::{Component, Entity, PlaybackState, Rigidbody, Scene, SoundSource};
use ecs_system::{DiagnosticSink, Engine, EngineError, PhysicsSystem, SoundSystem, SystemConfig};

pub const SAMPLE_SCENE: &str = "MySampleScene";
pub const ENTITY_A: &str = "entityA";
pub const ENTITY_B: &str = "entityB";

/// Register the sound system, then the physics system, both reporting to
/// `sink`.
///
/// # Errors
///
/// Fails only if the system names clash, which the fixed names never do.
pub fn build_engine<S>(sink: S) -> Result<Engine, EngineError>
where
    S: DiagnosticSink + Clone + 'static,
{
    let mut engine = Engine::new();
    engine.add_system(
        SoundSystem::new(SystemConfig::new("SampleSoundSystem").with_id(0)).with_sink(sink.clone()),
    )?;
    engine.add_system(
        PhysicsSystem::new(SystemConfig::new("SamplePhysicsSystem").with_id(1)).with_sink(sink),
    )?;
    Ok(engine)
}

/// `entityA` plays a track; `entityB` has a disabled track and a fixed
/// 100 kg body.
#[must_use]
pub fn build_scene() -> Scene {
    let entity_a = Entity::new(ENTITY_A).with_component(
        SoundSource::new("EntityASound", "//Assets//Sounds//BulletTheBlueSky.mp3")
            .with_enabled(true)
            .with_state(PlaybackState::Playing),
    );

    let entity_b = Entity::new(ENTITY_B)
        .with_id(1)
        .with_component(SoundSource::new(
            "EntityBSound",
            "//Assets//Sounds//WhosGonnaRideYourWildHorses.mp3",
        ))
        .with_component(
            Rigidbody::new("EntityBRigidbody")
                .with_id(1)
                .with_enabled(true)
                .with_fixed(true)
                .with_mass(100.0),
        );

    Scene::new(SAMPLE_SCENE)
        .with_entity(entity_a)
        .with_entity(entity_b)
}

#[cfg(test)]
mod tests {
    use ecs_component::Container;
    use ecs_system::RecordingSink;

    use super::*;

    #[test]
    fn test_engine_registers_sound_then_physics() {
        let engine = build_engine(RecordingSink::new()).unwrap();
        assert_eq!(
            engine.system_names().collect::<Vec<_>>(),
            vec!["SampleSoundSystem", "SamplePhysicsSystem"]
        );
    }

    #[test]
    fn test_first_tick_output() {
        let recorder = RecordingSink::new();
        let mut engine = build_engine(recorder.clone()).unwrap();
        let scene = build_scene().into_shared();
        engine.set_active_scene(&scene);
        engine.update_systems(1.0 / 60.0);

        assert_eq!(
            recorder.lines(),
            vec![
                "\"entityA\" sound \"//Assets//Sounds//BulletTheBlueSky.mp3\" changed to Playing!"
                    .to_owned(),
                "\"entityB\" rigidbody \"EntityBRigidbody\" Mass is : 100".to_owned(),
            ]
        );
    }

    #[test]
    fn test_scene_layout() {
        let scene = build_scene();
        assert_eq!(scene.entities().len(), 2);
        let b = scene.find_entity_by_id(1).unwrap();
        assert_eq!(b.name(), ENTITY_B);
        assert!(!b.get_component::<SoundSource>().unwrap().is_enabled());
        assert!(b.get_component::<Rigidbody>().unwrap().fixed);
    }
}
