//! Guide session: runs position updates through the trigger pipeline and
//! performs the requested side effects.

use crate::audio::{Notifier, Player};
use crate::guide::{catalog, GuideTrack};
use crate::position::{PositionError, PositionSample, PositionUpdate};
use crate::trigger::{dispatch, scan, Effect, TriggerState};
use crossbeam::channel::{Receiver, Sender};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Observable session events.
#[derive(Debug, Clone)]
pub enum GuideEvent {
    /// A position sample was accepted for scanning
    PositionUpdated { sample: PositionSample },
    /// A track fired
    TrackTriggered { track_id: String, title: String },
    /// The notification side channel accepted a trigger
    NotificationSent { track_id: String },
    /// Playback of a track's audio began
    PlaybackStarted { track_id: String },
    /// The position source failed; GPS triggering is disabled
    PositionLost { reason: String },
    /// The update stream ended
    SessionEnded { fired_count: usize },
}

/// One audio guide session over a fixed set of tracks.
///
/// The session exclusively owns the trigger state. Every sample runs
/// scan, dispatch, and effect application to completion before the next
/// update is taken, so the state needs no locking.
pub struct GuideSession {
    tracks: Vec<GuideTrack>,
    state: TriggerState,
    player: Arc<dyn Player>,
    notifier: Arc<dyn Notifier>,
    http: reqwest::Client,
    event_tx: Option<Sender<GuideEvent>>,
}

impl GuideSession {
    /// Create a session over a track catalog.
    pub fn new(
        tracks: Vec<GuideTrack>,
        player: Arc<dyn Player>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tracks,
            state: TriggerState::new(),
            player,
            notifier,
            http: reqwest::Client::new(),
            event_tx: None,
        }
    }

    /// Get a receiver for session events.
    pub fn event_receiver(&mut self) -> Receiver<GuideEvent> {
        let (tx, rx) = crossbeam::channel::unbounded();
        self.event_tx = Some(tx);
        rx
    }

    /// The tracks this session watches.
    pub fn tracks(&self) -> &[GuideTrack] {
        &self.tracks
    }

    /// The session's trigger state.
    pub fn state(&self) -> &TriggerState {
        &self.state
    }

    fn send_event(&self, event: GuideEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }

    /// Consume position updates until the stream ends or fails.
    ///
    /// The first error from the source disables GPS triggering for the
    /// remainder of the session; there are no retries.
    pub async fn run(&mut self, mut updates: mpsc::Receiver<PositionUpdate>) {
        tracing::info!(
            session_id = %self.state.session_id(),
            tracks = self.tracks.len(),
            "Guide session started"
        );

        while let Some(update) = updates.recv().await {
            match update {
                Ok(sample) => self.handle_sample(&sample).await,
                Err(error) => {
                    self.handle_position_error(&error);
                    break;
                }
            }
        }

        tracing::info!(
            session_id = %self.state.session_id(),
            fired = self.state.fired_count(),
            "Guide session ended"
        );
        self.send_event(GuideEvent::SessionEnded {
            fired_count: self.state.fired_count(),
        });
    }

    /// Process one sample: scan for newly in-range tracks, record them as
    /// fired, and perform the described effects.
    pub async fn handle_sample(&mut self, sample: &PositionSample) {
        if !sample.coordinate.is_finite() {
            tracing::debug!("Skipping non-finite position sample");
            return;
        }

        self.send_event(GuideEvent::PositionUpdated { sample: *sample });

        let matched = scan(&sample.coordinate, &self.tracks, self.state.fired());
        if matched.is_empty() {
            return;
        }

        let effects = dispatch(&matched, &mut self.state, !self.player.is_playing());
        for effect in effects {
            self.apply_effect(effect).await;
        }
    }

    fn handle_position_error(&self, error: &PositionError) {
        tracing::warn!(%error, "Position source failed; GPS triggering disabled for this session");
        self.send_event(GuideEvent::PositionLost {
            reason: error.to_string(),
        });
    }

    async fn apply_effect(&self, effect: Effect) {
        match effect {
            Effect::Notify {
                track_id,
                title,
                body,
            } => {
                self.send_event(GuideEvent::TrackTriggered {
                    track_id: track_id.clone(),
                    title: title.clone(),
                });
                match self.notifier.notify(&title, &body) {
                    Ok(()) => self.send_event(GuideEvent::NotificationSent { track_id }),
                    Err(error) => {
                        tracing::warn!(%track_id, %error, "Notification failed");
                    }
                }
            }
            Effect::BeginPlayback { track_id } => {
                let Some(track) = self.tracks.iter().find(|t| t.id == track_id) else {
                    return;
                };

                match catalog::fetch_audio(&self.http, &track.audio_url).await {
                    Ok(bytes) => match self.player.play_bytes(&track_id, bytes) {
                        Ok(()) => self.send_event(GuideEvent::PlaybackStarted { track_id }),
                        Err(error) => {
                            tracing::warn!(%track_id, %error, "Playback failed to start");
                        }
                    },
                    Err(error) => {
                        tracing::warn!(%track_id, %error, "Could not fetch track audio");
                    }
                }
            }
        }
    }
}
