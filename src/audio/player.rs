//! Guide track playback.

use super::AudioError;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Plays fetched guide audio.
///
/// Implementations report whether anything is currently playing so the
/// dispatcher can avoid interrupting a running track.
pub trait Player: Send + Sync {
    /// Begin playing encoded audio bytes for a track. Returns once
    /// playback has started; the track plays out in the background.
    fn play_bytes(&self, track_id: &str, bytes: Vec<u8>) -> Result<(), AudioError>;

    /// Whether playback is in progress.
    fn is_playing(&self) -> bool;

    /// Stop the current playback, if any.
    fn stop(&self);
}

/// rodio-backed player.
///
/// Each playback runs on a dedicated thread that opens the default output
/// stream and holds it until the track ends or a stop is requested.
pub struct RodioPlayer {
    volume: f32,
    playing: Arc<AtomicBool>,
    stop_requested: Arc<AtomicBool>,
}

impl RodioPlayer {
    /// Create a player with a 0-100 volume.
    pub fn new(volume: u8) -> Self {
        Self {
            volume: f32::from(volume.min(100)) / 100.0,
            playing: Arc::new(AtomicBool::new(false)),
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Player for RodioPlayer {
    fn play_bytes(&self, track_id: &str, bytes: Vec<u8>) -> Result<(), AudioError> {
        if self.playing.swap(true, Ordering::SeqCst) {
            return Err(AudioError::PlaybackFailed(
                "a track is already playing".to_string(),
            ));
        }
        self.stop_requested.store(false, Ordering::SeqCst);

        let playing = self.playing.clone();
        let stop = self.stop_requested.clone();
        let volume = self.volume;
        let track_id = track_id.to_string();

        let spawned = std::thread::Builder::new()
            .name("tourcast-playback".to_string())
            .spawn(move || {
                tracing::debug!(track_id = %track_id, "Playback thread started");
                if let Err(error) = play_to_end(bytes, volume, &stop) {
                    tracing::warn!(track_id = %track_id, %error, "Playback ended with error");
                }
                playing.store(false, Ordering::SeqCst);
            });

        if let Err(e) = spawned {
            self.playing.store(false, Ordering::SeqCst);
            return Err(AudioError::PlaybackFailed(e.to_string()));
        }
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);
    }
}

fn play_to_end(bytes: Vec<u8>, volume: f32, stop: &AtomicBool) -> Result<(), AudioError> {
    let (_stream, stream_handle) = rodio::OutputStream::try_default()
        .map_err(|e| AudioError::DeviceNotAvailable(e.to_string()))?;

    let sink = rodio::Sink::try_new(&stream_handle)
        .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
    sink.set_volume(volume);

    let source = rodio::Decoder::new(Cursor::new(bytes))
        .map_err(|e| AudioError::DecodeFailed(e.to_string()))?;
    sink.append(source);

    while !sink.empty() {
        if stop.load(Ordering::SeqCst) {
            sink.stop();
            break;
        }
        std::thread::sleep(Duration::from_millis(100));
    }

    Ok(())
}

/// No-op player for headless runs and tests; always idle.
#[derive(Debug, Default)]
pub struct NullPlayer;

impl Player for NullPlayer {
    fn play_bytes(&self, track_id: &str, _bytes: Vec<u8>) -> Result<(), AudioError> {
        tracing::debug!(track_id, "Discarding playback (audio disabled)");
        Ok(())
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn stop(&self) {}
}
