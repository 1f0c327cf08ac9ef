//! GPX replay position source.
//!
//! Replays the points of a recorded GPX trace as live position samples.
//! Gives the trigger pipeline a real position stream on platforms without
//! geolocation, and makes walking tours reproducible in development.

use super::{
    PositionError, PositionSample, PositionSource, PositionWatch, WatchHandle, WatchOptions,
};
use crate::geo::Coordinate;
use chrono::Utc;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;

/// Position source replaying a GPX trace at a fixed cadence.
pub struct GpxReplaySource {
    points: Vec<Coordinate>,
    interval: Duration,
}

impl GpxReplaySource {
    /// Parse a GPX document into a replay source.
    ///
    /// Points are taken from tracks first, then routes, then waypoints.
    pub fn from_reader(content: &[u8], interval: Duration) -> Result<Self, PositionError> {
        let gpx_data: gpx::Gpx =
            gpx::read(content).map_err(|e| PositionError::InvalidTrack(e.to_string()))?;

        let mut points = Vec::new();

        for track in gpx_data.tracks {
            for segment in track.segments {
                for point in segment.points {
                    points.push(Coordinate::new(point.point().y(), point.point().x()));
                }
            }
        }

        if points.is_empty() {
            for route in gpx_data.routes {
                for point in route.points {
                    points.push(Coordinate::new(point.point().y(), point.point().x()));
                }
            }
        }

        if points.is_empty() {
            for point in gpx_data.waypoints {
                points.push(Coordinate::new(point.point().y(), point.point().x()));
            }
        }

        if points.is_empty() {
            return Err(PositionError::InvalidTrack(
                "no GPS points in GPX document".to_string(),
            ));
        }

        Ok(Self { points, interval })
    }

    /// Load a replay source from a GPX file on disk.
    pub fn from_file(path: impl AsRef<Path>, interval: Duration) -> Result<Self, PositionError> {
        let content = std::fs::read(path.as_ref())
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;
        Self::from_reader(&content, interval)
    }

    /// Number of points in the trace.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trace is empty (never true for a constructed source).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PositionSource for GpxReplaySource {
    fn watch(&mut self, _options: &WatchOptions) -> Result<PositionWatch, PositionError> {
        let (tx, rx) = mpsc::channel(16);
        let handle = WatchHandle::new();
        let stop = handle.clone();
        let points = self.points.clone();
        let interval = self.interval;

        tracing::info!(points = points.len(), ?interval, "Starting GPX replay watch");

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            for coordinate in points {
                ticker.tick().await;
                if stop.is_stopped() {
                    break;
                }
                let sample = PositionSample::new(coordinate, Utc::now());
                if tx.send(Ok(sample)).await.is_err() {
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
