//! Audio guide catalog client.
//!
//! Fetches per-POI track lists from the backend
//! (`GET /pois/{id}/audio-guide?language=...`) or loads the same JSON
//! document from a local file. Track audio is fetched separately by URL.

use super::{Geofence, GuideTrack};
use crate::geo::Coordinate;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from catalog loading or audio fetching.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Catalog endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Wire form of a track's GPS trigger region.
///
/// Every field is optional so a partially filled geofence degrades to "no
/// geofence" instead of failing the whole catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGpsLocation {
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<f64>,
    #[serde(default)]
    auto_trigger: bool,
}

/// Wire form of one catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTrack {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    audio_url: String,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    gps_location: Option<WireGpsLocation>,
}

impl WireTrack {
    fn into_track(self) -> GuideTrack {
        let geofence = self.gps_location.and_then(|gps| {
            let (lat, lng, radius) = (gps.lat?, gps.lng?, gps.radius?);
            let location = Coordinate::new(lat, lng);
            if !location.is_finite() || !radius.is_finite() || radius < 0.0 {
                tracing::debug!(track_id = %self.id, "Dropping unusable geofence");
                return None;
            }
            Some(Geofence {
                location,
                radius_meters: radius,
                auto_trigger: gps.auto_trigger,
            })
        });

        GuideTrack {
            id: self.id,
            title: self.title,
            description: self.description,
            audio_url: self.audio_url,
            duration_secs: self.duration,
            language: self.language,
            geofence,
        }
    }
}

/// Parse a catalog JSON document (array of tracks in the API wire shape).
pub fn parse_catalog(json: &str) -> Result<Vec<GuideTrack>, CatalogError> {
    let wire: Vec<WireTrack> =
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
    Ok(wire.into_iter().map(WireTrack::into_track).collect())
}

/// Load a catalog from a local JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<GuideTrack>, CatalogError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
    parse_catalog(&content)
}

/// Fetch a track's audio bytes from an http(s) URL or a local path.
pub async fn fetch_audio(client: &reqwest::Client, source: &str) -> Result<Vec<u8>, CatalogError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = client
            .get(source)
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|e| CatalogError::IoError(e.to_string()))
    }
}

/// Client for the POI audio guide API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against a backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the audio guide tracks for a point of interest.
    pub async fn fetch_tracks(
        &self,
        poi_id: &str,
        language: Option<&str>,
    ) -> Result<Vec<GuideTrack>, CatalogError> {
        let url = format!("{}/pois/{}/audio-guide", self.base_url, poi_id);

        let mut request = self.client.get(&url);
        if let Some(lang) = language {
            request = request.query(&[("language", lang)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        let tracks = parse_catalog(&body)?;
        tracing::info!(poi_id, count = tracks.len(), "Loaded audio guide catalog");
        Ok(tracks)
    }

    /// Fetch a track's audio bytes.
    pub async fn fetch_audio(&self, source: &str) -> Result<Vec<u8>, CatalogError> {
        fetch_audio(&self.client, source).await
    }
}
