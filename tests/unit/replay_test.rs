//! Unit tests for the GPX replay source.

use std::io::Write;
use std::time::Duration;
use tourcast::position::{GpxReplaySource, PositionError};

const WALK_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk>
    <name>Riverside Walk</name>
    <trkseg>
      <trkpt lat="48.8584" lon="2.2945"><ele>35</ele></trkpt>
      <trkpt lat="48.8586" lon="2.2950"><ele>35</ele></trkpt>
      <trkpt lat="48.8589" lon="2.2955"><ele>36</ele></trkpt>
      <trkpt lat="48.8592" lon="2.2961"><ele>36</ele></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

#[test]
fn test_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WALK_GPX.as_bytes()).unwrap();

    let source = GpxReplaySource::from_file(file.path(), Duration::from_millis(100)).unwrap();
    assert_eq!(source.len(), 4);
}

#[test]
fn test_missing_file_is_unavailable() {
    let result = GpxReplaySource::from_file("/nonexistent/walk.gpx", Duration::from_millis(100));
    assert!(matches!(result, Err(PositionError::Unavailable(_))));
}

#[test]
fn test_malformed_document_is_invalid() {
    let result = GpxReplaySource::from_reader(b"<gpx><oops", Duration::from_millis(100));
    assert!(matches!(result, Err(PositionError::InvalidTrack(_))));
}
