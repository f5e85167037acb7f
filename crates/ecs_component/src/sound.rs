//! Sound-source component and its playback state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::ComponentInfo;

/// Playback state of a sound source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Not playing. The state of any sound never seen before.
    #[default]
    Stopped,
    /// Paused mid-track.
    Paused,
    /// Playing.
    Playing,
}

impl PlaybackState {
    /// Playing becomes Paused; anything else becomes Playing.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused | Self::Stopped => Self::Playing,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stopped => "Stopped",
            Self::Paused => "Paused",
            Self::Playing => "Playing",
        };
        f.write_str(s)
    }
}

/// A sound source.
///
/// The host drives [`SoundSource::playback_state`]; the sound system observes
/// it and forces disabled sources back to [`PlaybackState::Stopped`].
#[derive(Debug, Clone)]
pub struct SoundSource {
    pub(crate) info: ComponentInfo,
    /// Path to the track. Also the key the sound system tracks state under.
    pub path: String,
    /// Current playback state.
    pub playback_state: PlaybackState,
}

impl SoundSource {
    /// Create a sound source. Starts disabled and stopped.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            info: ComponentInfo::new(name, false),
            path: path.into(),
            playback_state: PlaybackState::Stopped,
        }
    }

    /// Builder: set the playback state.
    #[must_use]
    pub fn with_state(mut self, state: PlaybackState) -> Self {
        self.playback_state = state;
        self
    }
}
