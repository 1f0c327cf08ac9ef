//! Audio guide domain model: geofenced tracks for points of interest.

pub mod catalog;

use crate::geo::{distance_meters, Coordinate};
use serde::{Deserialize, Serialize};

pub use catalog::{CatalogClient, CatalogError};

/// A circular region that triggers location-based content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    /// Center of the region
    pub location: Coordinate,
    /// Trigger radius in meters
    pub radius_meters: f64,
    /// Whether entering the region should auto-play the track
    pub auto_trigger: bool,
}

impl Geofence {
    /// Whether a position falls inside this region.
    pub fn contains(&self, position: &Coordinate) -> bool {
        distance_meters(position, &self.location) <= self.radius_meters
    }
}

/// A single audio guide track for a point of interest.
///
/// Immutable for the lifetime of a session once loaded from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideTrack {
    /// Catalog identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Optional narration summary, spoken with notifications
    pub description: Option<String>,
    /// Where to fetch the audio from (http(s) URL or local path)
    pub audio_url: String,
    /// Track length in seconds, when the catalog knows it
    pub duration_secs: Option<u32>,
    /// Track language (BCP-47)
    pub language: Option<String>,
    /// GPS trigger region, if the track has one
    pub geofence: Option<Geofence>,
}

impl GuideTrack {
    /// Create a track with no geofence.
    pub fn new(id: impl Into<String>, title: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            audio_url: audio_url.into(),
            duration_secs: None,
            language: None,
            geofence: None,
        }
    }

    /// Attach a GPS trigger region.
    pub fn with_geofence(mut self, location: Coordinate, radius_meters: f64, auto_trigger: bool) -> Self {
        self.geofence = Some(Geofence {
            location,
            radius_meters,
            auto_trigger,
        });
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether position updates can ever fire this track.
    ///
    /// Tracks without a usable geofence behave as if `auto_trigger` were
    /// false.
    pub fn is_auto_triggerable(&self) -> bool {
        self.geofence.map(|g| g.auto_trigger).unwrap_or(false)
    }
}
