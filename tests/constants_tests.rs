// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use web_constants::*;
use globe_core::*;

#[test]
fn dom_ids_are_unique() {
    let ids = [
        APP_ROOT_ID,
        SPLASH_ID,
        PARTICLES_ID,
        GLOBE_VIEW_ID,
        CANVAS_ID,
        LABELS_ID,
        TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_is_a_fraction_of_a_second() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
}

#[test]
fn colors_are_normalised() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(GLOBE_TINT.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(MARKER_TINT[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    // markers float above the surface and stay inside the closest zoom
    assert!(MARKER_RADIUS > GLOBE_RADIUS);
    assert!(ORBIT_MIN_DISTANCE > MARKER_RADIUS);
    assert!(ORBIT_MAX_DISTANCE > CAMERA_START[2]);
    assert!(CAMERA_START[2] > ORBIT_MIN_DISTANCE);

    // wobble is decorative, much smaller than a marker
    assert!(BOB_AMPLITUDE < MARKER_SIZE);
    assert!(TILT_AMPLITUDE < 0.01);

    assert!(ORBIT_ZOOM_SCALE > 0.0 && ORBIT_ZOOM_SCALE < 1.0);
    assert!(AMBIENT_INTENSITY + DIRECTIONAL_INTENSITY > 1.0);
    assert_eq!(SPLASH_DURATION.as_millis(), 4000);
}
