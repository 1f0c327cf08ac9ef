//! Unit tests for great-circle distance.

use tourcast::geo::{distance_meters, Coordinate};

#[test]
fn test_zero_distance_anywhere() {
    for (lat, lng) in [(0.0, 0.0), (89.9, 179.9), (-45.0, -120.0)] {
        let here = Coordinate::new(lat, lng);
        assert_eq!(distance_meters(&here, &here), 0.0);
    }
}

#[test]
fn test_symmetry_across_hemispheres() {
    let a = Coordinate::new(35.6762, 139.6503); // Tokyo
    let b = Coordinate::new(-33.8688, 151.2093); // Sydney

    assert_eq!(distance_meters(&a, &b), distance_meters(&b, &a));
}

#[test]
fn test_one_degree_of_latitude() {
    // A degree of latitude is ~111,195 m on the mean sphere, at any
    // longitude.
    let a = Coordinate::new(40.0, -75.0);
    let b = Coordinate::new(41.0, -75.0);

    let distance = distance_meters(&a, &b);
    assert!((distance - 111_195.0).abs() < 111_195.0 * 0.01);
}

#[test]
fn test_longitude_degrees_shrink_toward_the_poles() {
    let equator = distance_meters(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0));
    let sixty_north = distance_meters(&Coordinate::new(60.0, 0.0), &Coordinate::new(60.0, 1.0));

    // cos(60°) = 0.5
    assert!((sixty_north / equator - 0.5).abs() < 0.01);
}

#[test]
fn test_london_to_new_york() {
    let london = Coordinate::new(51.5074, -0.1278);
    let new_york = Coordinate::new(40.7128, -74.0060);

    let distance_km = distance_meters(&london, &new_york) / 1000.0;
    assert!((distance_km - 5_570.0).abs() < 60.0);
}

#[test]
fn test_geofence_scale_distances() {
    // The scale geofences operate at: tens of meters.
    let gate = Coordinate::new(48.86055, 2.33765);
    let visitor = Coordinate::new(48.86070, 2.33765);

    let distance = distance_meters(&gate, &visitor);
    assert!(distance > 14.0 && distance < 20.0);
}
