//! Recording fakes for the session's audio collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tourcast::audio::{AudioError, Notifier, Player};

/// Player fake that records which tracks it was asked to play.
///
/// Playing stays true after the first play, like a real track that keeps
/// running while later geofences fire.
#[derive(Default)]
pub struct RecordingPlayer {
    playing: AtomicBool,
    played: Mutex<Vec<String>>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<String> {
        self.played.lock().unwrap().clone()
    }
}

impl Player for RecordingPlayer {
    fn play_bytes(&self, track_id: &str, _bytes: Vec<u8>) -> Result<(), AudioError> {
        self.played.lock().unwrap().push(track_id.to_string());
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn stop(&self) {
        self.playing.store(false, Ordering::SeqCst);
    }
}

/// Notifier fake that records notification titles.
#[derive(Default)]
pub struct RecordingNotifier {
    notified: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notified(&self) -> Vec<String> {
        self.notified.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, _body: &str) -> Result<(), AudioError> {
        self.notified.lock().unwrap().push(title.to_string());
        Ok(())
    }
}
