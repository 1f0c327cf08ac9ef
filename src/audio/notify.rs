//! Notification side channel for triggered tracks.

use super::AudioError;
use std::sync::Mutex;

/// Delivers best-effort notifications when a track fires.
///
/// No delivery guarantee; failures are the caller's to log and ignore.
pub trait Notifier: Send + Sync {
    /// Surface one notification.
    fn notify(&self, title: &str, body: &str) -> Result<(), AudioError>;
}

/// Speaks notifications through the platform TTS engine.
pub struct TtsNotifier {
    tts: Mutex<tts::Tts>,
}

impl TtsNotifier {
    /// Initialize the platform TTS engine.
    ///
    /// `speech_rate` is a multiplier on the voice's normal rate, clamped
    /// to 0.5 - 2.0.
    pub fn new(speech_rate: f32) -> Result<Self, AudioError> {
        let mut tts = tts::Tts::default().map_err(|e| AudioError::TtsInitFailed(e.to_string()))?;

        let rate = tts.normal_rate() * speech_rate.clamp(0.5, 2.0);
        if let Err(error) = tts.set_rate(rate) {
            tracing::warn!(%error, "Could not set speech rate, using platform default");
        }

        Ok(Self {
            tts: Mutex::new(tts),
        })
    }
}

impl Notifier for TtsNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), AudioError> {
        let text = if body.is_empty() {
            title.to_string()
        } else {
            format!("{}. {}", title, body)
        };

        let mut tts = self
            .tts
            .lock()
            .map_err(|_| AudioError::SpeechFailed("TTS engine lock poisoned".to_string()))?;

        tts.speak(text, false)
            .map(|_| ())
            .map_err(|e| AudioError::SpeechFailed(e.to_string()))
    }
}

/// Logs notifications instead of surfacing them.
///
/// Fallback when no speech engine is available, and the default for
/// headless runs.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), AudioError> {
        tracing::info!(title, body, "Audio guide notification");
        Ok(())
    }
}
