//! Unit tests for catalog parsing and loading.

use std::io::Write;
use tourcast::guide::catalog::{load_from_file, parse_catalog};

const MUSEUM_CATALOG: &str = r#"[
  {
    "id": "entrance",
    "title": "Welcome",
    "description": "An introduction to the collection.",
    "audioUrl": "https://cdn.example.com/museum/entrance-en.mp3",
    "duration": 95,
    "language": "en",
    "gpsLocation": { "lat": 48.8606, "lng": 2.3376, "radius": 60.0, "autoTrigger": true }
  },
  {
    "id": "grand-gallery",
    "title": "The Grand Gallery",
    "audioUrl": "https://cdn.example.com/museum/gallery-en.mp3",
    "duration": 240,
    "language": "en",
    "gpsLocation": { "lat": 48.8611, "lng": 2.3364, "radius": 35.0, "autoTrigger": true }
  },
  {
    "id": "gift-shop",
    "title": "Gift Shop",
    "audioUrl": "https://cdn.example.com/museum/shop-en.mp3"
  },
  {
    "id": "broken",
    "title": "Unmapped Annex",
    "audioUrl": "https://cdn.example.com/museum/annex-en.mp3",
    "gpsLocation": { "lat": 48.8612 }
  }
]"#;

#[test]
fn test_parse_museum_catalog() {
    let tracks = parse_catalog(MUSEUM_CATALOG).unwrap();
    assert_eq!(tracks.len(), 4);

    assert_eq!(tracks[0].id, "entrance");
    assert_eq!(tracks[0].duration_secs, Some(95));
    assert_eq!(
        tracks[0].description.as_deref(),
        Some("An introduction to the collection.")
    );
    assert!(tracks[0].is_auto_triggerable());

    // No gpsLocation at all.
    assert!(tracks[2].geofence.is_none());

    // gpsLocation with only a latitude: degrades to no geofence, the
    // track itself still loads.
    assert_eq!(tracks[3].id, "broken");
    assert!(tracks[3].geofence.is_none());
}

#[test]
fn test_catalog_order_is_preserved() {
    let tracks = parse_catalog(MUSEUM_CATALOG).unwrap();
    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["entrance", "grand-gallery", "gift-shop", "broken"]);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MUSEUM_CATALOG.as_bytes()).unwrap();

    let tracks = load_from_file(file.path()).unwrap();
    assert_eq!(tracks.len(), 4);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = load_from_file(std::path::Path::new("/nonexistent/catalog.json"));
    assert!(result.is_err());
}
