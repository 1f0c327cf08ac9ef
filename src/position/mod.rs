//! Position sources: streams of GPS samples feeding the trigger scanner.

pub mod replay;
pub mod sim;

use crate::geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

pub use replay::GpxReplaySource;
pub use sim::ScriptedSource;

/// Errors reported by a position source.
///
/// A source reports at most one error and then stops. Callers disable GPS
/// triggering for the rest of the session rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("Position permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Timed out waiting for a position fix")]
    Timeout,

    #[error("Invalid replay track: {0}")]
    InvalidTrack(String),
}

/// A single GPS fix. Transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Where the device is
    pub coordinate: Coordinate,
    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
    /// Reported horizontal accuracy, when the source knows it
    pub accuracy_meters: Option<f64>,
}

impl PositionSample {
    /// Create a sample with no accuracy estimate.
    pub fn new(coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            timestamp,
            accuracy_meters: None,
        }
    }
}

/// Options for a position watch, mirroring platform geolocation watches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WatchOptions {
    /// Request the most precise fix available
    pub enable_high_accuracy: bool,
    /// Maximum acceptable age of a cached fix, in milliseconds
    pub maximum_age_ms: u64,
    /// How long to wait for a fix before reporting a timeout, in milliseconds
    pub timeout_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            maximum_age_ms: 30_000,
            timeout_ms: 10_000,
        }
    }
}

/// One position update: a fix, or the source's single terminal error.
pub type PositionUpdate = Result<PositionSample, PositionError>;

/// Handle to stop a running watch.
///
/// Stopping halts further delivery; a sample already handed off is still
/// processed by the consumer.
#[derive(Debug, Clone)]
pub struct WatchHandle {
    stopped: Arc<AtomicBool>,
}

impl WatchHandle {
    pub(crate) fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop the watch.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Whether the watch has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// An active subscription to a position source.
pub struct PositionWatch {
    /// Stream of updates, closed when the source ends
    pub updates: mpsc::Receiver<PositionUpdate>,
    /// Stops delivery on demand (session teardown)
    pub handle: WatchHandle,
}

/// A continuous source of position samples.
pub trait PositionSource {
    /// Start delivering samples.
    ///
    /// At most one error is ever delivered; after it the stream ends.
    fn watch(&mut self, options: &WatchOptions) -> Result<PositionWatch, PositionError>;
}
