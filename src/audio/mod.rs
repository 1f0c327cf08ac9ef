//! Audio output: guide track playback and spoken notifications.

pub mod notify;
pub mod player;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use notify::{LogNotifier, Notifier, TtsNotifier};
pub use player::{NullPlayer, Player, RodioPlayer};

/// Errors from playback or notification delivery.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("TTS initialization failed: {0}")]
    TtsInitFailed(String),

    #[error("Decode failed: {0}")]
    DecodeFailed(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    #[error("Speech failed: {0}")]
    SpeechFailed(String),
}

/// Audio output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Master enable for track playback
    pub enabled: bool,
    /// Playback volume (0-100)
    pub volume: u8,
    /// Speak notifications aloud
    pub voice_enabled: bool,
    /// Speech rate multiplier (0.5 - 2.0)
    pub speech_rate: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 80,
            voice_enabled: true,
            speech_rate: 1.0,
        }
    }
}
