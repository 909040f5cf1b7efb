use globe_core::{lat_lon_to_vec3, surface_normal, FRANCHISES, MARKER_RADIUS};

const EPS: f32 = 1e-4;

#[test]
fn projection_stays_on_the_sphere() {
    for radius in [0.5_f32, 1.0, 1.02, 3.0] {
        let mut lat = -90.0_f32;
        while lat <= 90.0 {
            let mut lon = -180.0_f32;
            while lon <= 180.0 {
                let p = lat_lon_to_vec3(lat, lon, radius);
                assert!(
                    (p.length() - radius).abs() < EPS * radius,
                    "lat={lat} lon={lon} r={radius} -> |p|={}",
                    p.length()
                );
                lon += 7.5;
            }
            lat += 7.5;
        }
    }
}

#[test]
fn north_pole_ignores_longitude() {
    for lon in [-180.0_f32, -97.3, 0.0, 45.0, 180.0] {
        let p = lat_lon_to_vec3(90.0, lon, 2.0);
        assert!(p.x.abs() < EPS && p.z.abs() < EPS, "lon={lon} -> {p:?}");
        assert!((p.y - 2.0).abs() < EPS);
    }
}

#[test]
fn south_pole_ignores_longitude() {
    for lon in [-180.0_f32, -12.0, 0.0, 90.0, 180.0] {
        let p = lat_lon_to_vec3(-90.0, lon, 2.0);
        assert!(p.x.abs() < EPS && p.z.abs() < EPS, "lon={lon} -> {p:?}");
        assert!((p.y + 2.0).abs() < EPS);
    }
}

#[test]
fn equator_points_follow_longitude_offset() {
    // lon = 0 lands on +X, lon = 90 on -Z, lon = -90 on +Z
    let p0 = lat_lon_to_vec3(0.0, 0.0, 1.0);
    assert!((p0.x - 1.0).abs() < EPS && p0.y.abs() < EPS && p0.z.abs() < EPS);
    let p90 = lat_lon_to_vec3(0.0, 90.0, 1.0);
    assert!((p90.z + 1.0).abs() < EPS && p90.x.abs() < EPS);
    let pm90 = lat_lon_to_vec3(0.0, -90.0, 1.0);
    assert!((pm90.z - 1.0).abs() < EPS && pm90.x.abs() < EPS);
}

#[test]
fn out_of_range_input_still_yields_a_point() {
    let p = lat_lon_to_vec3(135.0, 400.0, 1.5);
    assert!(p.is_finite());
    assert!((p.length() - 1.5).abs() < EPS);
}

#[test]
fn franchise_anchors_sit_just_above_surface() {
    for m in FRANCHISES {
        let a = m.anchor();
        assert!((a.length() - MARKER_RADIUS).abs() < EPS, "{}", m.name);
        let n = surface_normal(m.latitude, m.longitude);
        assert!((a.normalize() - n).length() < EPS, "{}", m.name);
    }
}

#[test]
fn franchise_coordinates_are_in_range() {
    assert_eq!(FRANCHISES.len(), 8);
    for m in FRANCHISES {
        assert!((-90.0..=90.0).contains(&m.latitude), "{}", m.name);
        assert!((-180.0..=180.0).contains(&m.longitude), "{}", m.name);
        assert!(m.icon.ends_with(".png"));
    }
}
