// Host-side tests for the pure layout helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn visible_label_is_centred_on_point() {
    let css = label_css(120.25, 48.0, true);
    assert!(css.contains("left: 120.2px") || css.contains("left: 120.3px"));
    assert!(css.contains("top: 48.0px"));
    assert!(css.contains("translate(-50%, -50%)"));
    assert!(!css.contains("display: none"));
}

#[test]
fn hidden_label_is_not_displayed() {
    assert_eq!(label_css(10.0, 10.0, false), "display: none;");
}

#[test]
fn frame_dt_is_clamped() {
    assert_eq!(clamp_frame_dt(0.016, 0.1), 0.016);
    assert_eq!(clamp_frame_dt(3.0, 0.1), 0.1);
    assert_eq!(clamp_frame_dt(-1.0, 0.1), 0.0);
    assert_eq!(clamp_frame_dt(f32::NAN, 0.1), 0.0);
}

#[test]
fn splash_markup_carries_copy_and_particle_host() {
    let html = splash_markup("BEEBA", "BOYS", "Beeba Boys", "PREMIUM BARBER EXPERIENCE", "particles");
    assert!(html.contains(">BEEBA<"));
    assert!(html.contains(">BOYS<"));
    assert!(html.contains("class=\"reveal-text\">Beeba Boys<"));
    assert!(html.contains("id=\"particles\""));
    assert!(html.contains("loading-progress"));
    assert!(html.contains(">PREMIUM BARBER EXPERIENCE<"));
    // left half comes before right half
    assert!(html.find("BEEBA") < html.find("BOYS"));
}
