//! Sound system.
//!
//! Observes the playback state of every [`SoundSource`] in the bound scene
//! and reports transitions. State is tracked per track path and only for the
//! current scene: binding another scene forgets everything.
//!
//! Two passes run per frame. The scene-level pass processes every sound the
//! scene owns directly, enabled or not. The entity-level pass only processes
//! enabled sounds. A disabled sound reached by the scene-level pass is forced
//! back to [`PlaybackState::Stopped`].

use std::any::Any;
use std::collections::HashMap;

use ecs_component::{Component, Container, PlaybackState, SoundSource};
use tracing::{debug, warn};

use crate::config::SystemConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::system::{System, SystemState};

/// Per-frame sound-state tracking.
#[derive(Debug)]
pub struct SoundSystem {
    state: SystemState,
    sink: Box<dyn DiagnosticSink>,
    /// Last observed state per track path.
    tracked: HashMap<String, PlaybackState>,
}

impl SoundSystem {
    /// Create a sound system reporting through [`TracingSink`].
    #[must_use]
    pub fn new(config: SystemConfig) -> Self {
        Self {
            state: SystemState::new(config),
            sink: Box::new(TracingSink),
            tracked: HashMap::new(),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// The last observed state of a track, if it has been seen in the
    /// current scene.
    #[must_use]
    pub fn tracked_state(&self, path: &str) -> Option<PlaybackState> {
        self.tracked.get(path).copied()
    }

    /// Number of tracks being tracked.
    #[must_use]
    pub fn tracked_len(&self) -> usize {
        self.tracked.len()
    }

    fn process(&mut self, sound: &mut SoundSource) {
        let last = match self.tracked.get(&sound.path).copied() {
            Some(state) => state,
            None => {
                debug!(system = self.state.name(), path = %sound.path, "tracking new sound");
                self.tracked
                    .insert(sound.path.clone(), PlaybackState::Stopped);
                PlaybackState::Stopped
            }
        };

        let owner = sound.info().owner_name().to_owned();
        if sound.is_enabled() {
            if sound.playback_state != last {
                self.tracked
                    .insert(sound.path.clone(), sound.playback_state);
                debug!(
                    owner = %owner,
                    path = %sound.path,
                    from = %last,
                    to = %sound.playback_state,
                    "sound state changed"
                );
                self.sink.emit(&Diagnostic::SoundChanged {
                    owner,
                    path: sound.path.clone(),
                    state: sound.playback_state,
                });
            }
        } else if sound.playback_state != PlaybackState::Stopped {
            sound.playback_state = PlaybackState::Stopped;
            self.tracked
                .insert(sound.path.clone(), PlaybackState::Stopped);
            debug!(owner = %owner, path = %sound.path, "disabled sound forced to stopped");
            self.sink.emit(&Diagnostic::SoundDisabled {
                owner,
                path: sound.path.clone(),
            });
        }
    }
}

impl System for SoundSystem {
    fn state(&self) -> &SystemState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SystemState {
        &mut self.state
    }

    fn update(&mut self, _dt: f32) {
        let Some(shared) = self.state.active_scene() else {
            return;
        };
        let Ok(mut scene) = shared.try_borrow_mut() else {
            warn!(system = self.state.name(), "scene is already borrowed, skipping frame");
            return;
        };

        for sound in scene.get_components_mut::<SoundSource>() {
            self.process(sound);
        }

        for entity in scene.entities_mut() {
            for sound in entity.get_components_mut::<SoundSource>() {
                if sound.is_enabled() {
                    self.process(sound);
                }
            }
        }
    }

    fn on_scene_changed(&mut self) {
        debug!(
            system = self.state.name(),
            forgotten = self.tracked.len(),
            "clearing tracked sounds"
        );
        self.tracked.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ecs_component::{Entity, Scene, SharedScene};

    use super::*;
    use crate::diagnostic::RecordingSink;

    fn sound_system(recorder: &RecordingSink) -> SoundSystem {
        SoundSystem::new(SystemConfig::new("sound")).with_sink(recorder.clone())
    }

    fn entity_sound(scene: &SharedScene, entity: &str) -> PlaybackState {
        scene
            .borrow()
            .find_entity_by_name(entity)
            .and_then(|e| e.get_component::<SoundSource>())
            .map(|s| s.playback_state)
            .unwrap()
    }

    fn set_entity_sound(scene: &SharedScene, entity: &str, state: PlaybackState) {
        scene
            .borrow_mut()
            .find_entity_by_name_mut(entity)
            .and_then(|e| e.get_component_mut::<SoundSource>())
            .unwrap()
            .playback_state = state;
    }

    fn playing_scene() -> SharedScene {
        Scene::new("s")
            .with_entity(
                Entity::new("A").with_component(
                    SoundSource::new("music", "x")
                        .with_enabled(true)
                        .with_state(PlaybackState::Playing),
                ),
            )
            .into_shared()
    }

    #[test]
    fn test_emits_once_per_actual_toggle() {
        let scene = playing_scene();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(Rc::clone(&scene)));

        system.update(0.1);
        assert_eq!(recorder.lines(), vec!["\"A\" sound \"x\" changed to Playing!".to_owned()]);

        system.update(0.1);
        assert_eq!(recorder.len(), 1);

        set_entity_sound(&scene, "A", PlaybackState::Paused);
        system.update(0.1);
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.lines()[1], "\"A\" sound \"x\" changed to Paused!");
        assert_eq!(system.tracked_state("x"), Some(PlaybackState::Paused));

        system.update(0.1);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_stopped_sound_is_seeded_silently() {
        let scene = Scene::new("s")
            .with_entity(
                Entity::new("A").with_component(SoundSource::new("m", "x").with_enabled(true)),
            )
            .into_shared();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(scene));
        system.update(0.1);

        assert!(recorder.is_empty());
        assert_eq!(system.tracked_state("x"), Some(PlaybackState::Stopped));
    }

    #[test]
    fn test_disabled_scene_sound_is_forced_to_stopped() {
        let scene = Scene::new("s")
            .with_component(SoundSource::new("m", "x").with_state(PlaybackState::Playing))
            .into_shared();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(Rc::clone(&scene)));

        system.update(0.1);
        assert_eq!(recorder.lines(), vec!["\"s\" sound \"x\" has been disabled!".to_owned()]);
        assert_eq!(
            scene.borrow().get_component::<SoundSource>().unwrap().playback_state,
            PlaybackState::Stopped
        );

        system.update(0.1);
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_disabled_entity_sound_is_left_alone() {
        let scene = Scene::new("s")
            .with_entity(
                Entity::new("B")
                    .with_component(SoundSource::new("m", "y").with_state(PlaybackState::Playing)),
            )
            .into_shared();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(Rc::clone(&scene)));
        system.update(0.1);

        assert!(recorder.is_empty());
        assert_eq!(entity_sound(&scene, "B"), PlaybackState::Playing);
        assert_eq!(system.tracked_state("y"), None);
    }

    #[test]
    fn test_scene_and_entity_sounds_both_reported() {
        let scene = Scene::new("s")
            .with_component(
                SoundSource::new("ambience", "wind")
                    .with_enabled(true)
                    .with_state(PlaybackState::Playing),
            )
            .with_entity(
                Entity::new("A").with_component(
                    SoundSource::new("music", "x")
                        .with_enabled(true)
                        .with_state(PlaybackState::Playing),
                ),
            )
            .into_shared();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(scene));
        system.update(0.1);

        assert_eq!(
            recorder.lines(),
            vec![
                "\"s\" sound \"wind\" changed to Playing!".to_owned(),
                "\"A\" sound \"x\" changed to Playing!".to_owned(),
            ]
        );
    }

    #[test]
    fn test_shared_path_is_tracked_once() {
        let scene = Scene::new("s")
            .with_entity(Entity::new("A").with_component(
                SoundSource::new("m", "x").with_enabled(true).with_state(PlaybackState::Playing),
            ))
            .with_entity(Entity::new("B").with_component(
                SoundSource::new("m", "x").with_enabled(true).with_state(PlaybackState::Playing),
            ))
            .into_shared();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(scene));
        system.update(0.1);

        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.count_containing("\"A\""), 1);
        assert_eq!(system.tracked_len(), 1);
    }

    #[test]
    fn test_scene_change_resets_tracking() {
        let first = playing_scene();
        let recorder = RecordingSink::new();
        let mut system = sound_system(&recorder);
        system.set_current_scene(Some(Rc::clone(&first)));
        system.update(0.1);
        assert_eq!(system.tracked_len(), 1);

        // Rebinding the same scene keeps the cache.
        system.set_current_scene(Some(Rc::clone(&first)));
        assert_eq!(system.tracked_len(), 1);

        system.set_current_scene(Some(playing_scene()));
        assert_eq!(system.tracked_len(), 0);
        system.update(0.1);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_disabled_system_does_nothing() {
        let scene = playing_scene();
        let recorder = RecordingSink::new();
        let mut system =
            SoundSystem::new(SystemConfig::new("sound").disabled()).with_sink(recorder.clone());
        system.set_current_scene(Some(scene));
        system.update(0.1);
        assert!(recorder.is_empty());
        assert_eq!(system.tracked_len(), 0);
    }
}
