//! Scripted position source for tests and demos.

use super::{
    PositionError, PositionSample, PositionSource, PositionUpdate, PositionWatch, WatchHandle,
    WatchOptions,
};
use crate::geo::Coordinate;
use chrono::Utc;
use tokio::sync::mpsc;

/// Position source that delivers a pre-scripted list of updates in order.
///
/// Stands in for platform geolocation wherever a deterministic stream is
/// needed. An error is terminal: anything scripted after it is dropped,
/// matching how a real source stops after reporting a failure.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    updates: Vec<PositionUpdate>,
}

impl ScriptedSource {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fix at the given coordinate.
    pub fn push_fix(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.updates.push(Ok(PositionSample::new(
            Coordinate::new(latitude, longitude),
            Utc::now(),
        )));
        self
    }

    /// Append a full sample.
    pub fn push_sample(&mut self, sample: PositionSample) -> &mut Self {
        self.updates.push(Ok(sample));
        self
    }

    /// Append the source's terminal error.
    pub fn push_error(&mut self, error: PositionError) -> &mut Self {
        self.updates.push(Err(error));
        self
    }

    /// Number of scripted updates.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Whether the script is empty.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

impl PositionSource for ScriptedSource {
    fn watch(&mut self, _options: &WatchOptions) -> Result<PositionWatch, PositionError> {
        let (tx, rx) = mpsc::channel(self.updates.len().max(1));
        let handle = WatchHandle::new();
        let stop = handle.clone();
        let updates = std::mem::take(&mut self.updates);

        tokio::spawn(async move {
            for update in updates {
                if stop.is_stopped() {
                    break;
                }
                let terminal = update.is_err();
                if tx.send(update).await.is_err() {
                    break;
                }
                if terminal {
                    break;
                }
            }
        });

        Ok(PositionWatch {
            updates: rx,
            handle,
        })
    }
}
