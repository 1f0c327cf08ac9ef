//! Trigger dispatcher.

use super::{Effect, TriggerState};
use crate::guide::GuideTrack;

/// Record each newly triggered track as fired and describe the side
/// effects to perform: one notification per track, plus playback of the
/// first track when nothing is already playing.
///
/// Marking is idempotent. A track that arrives already fired produces no
/// effects, so firing stays at most once per session even if a caller
/// passes stale scan results.
pub fn dispatch(
    newly_triggered: &[&GuideTrack],
    state: &mut TriggerState,
    playback_idle: bool,
) -> Vec<Effect> {
    let mut effects = Vec::new();
    let mut idle = playback_idle;

    for track in newly_triggered {
        if !state.mark_fired(&track.id) {
            continue;
        }

        tracing::info!(track_id = %track.id, title = %track.title, "Guide track triggered");

        effects.push(Effect::Notify {
            track_id: track.id.clone(),
            title: track.title.clone(),
            body: track.description.clone().unwrap_or_default(),
        });

        if idle {
            effects.push(Effect::BeginPlayback {
                track_id: track.id.clone(),
            });
            idle = false;
        }
    }

    effects
}
