//! GPS proximity triggering for geofenced guide tracks.
//!
//! The scanner decides which tracks a position sample brings into range;
//! the dispatcher records them as fired and describes the side effects to
//! perform. Firing is at most once per track per session.

pub mod dispatcher;
pub mod scanner;

pub use dispatcher::dispatch;
pub use scanner::scan;

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

/// A side effect requested by the dispatcher.
///
/// Effects are described here and performed by the session's
/// collaborators (notifier, player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Surface a notification for a newly fired track.
    Notify {
        track_id: String,
        title: String,
        body: String,
    },
    /// Begin playing the track's audio.
    BeginPlayback { track_id: String },
}

/// The set of tracks fired during the current session.
///
/// Insert-only: an id, once present, is never removed. A new session
/// starts from a fresh, empty state.
#[derive(Debug, Clone)]
pub struct TriggerState {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    fired: HashSet<String>,
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerState {
    /// Create an empty state for a new session.
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            fired: HashSet::new(),
        }
    }

    /// Identifier of the session this state belongs to.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Mark a track as fired. Returns false if it had already fired.
    pub(crate) fn mark_fired(&mut self, track_id: &str) -> bool {
        self.fired.insert(track_id.to_string())
    }

    /// Whether a track has fired this session.
    pub fn has_fired(&self, track_id: &str) -> bool {
        self.fired.contains(track_id)
    }

    /// Read-only view of the fired set, in the shape the scanner takes.
    pub fn fired(&self) -> &HashSet<String> {
        &self.fired
    }

    /// Number of tracks fired this session.
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}
