// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn move_to_reports_delta_and_updates_position() {
    let mut ms = MouseState::default();
    let d0 = ms.move_to(Vec2::new(10.0, 20.0));
    assert_eq!(d0, Vec2::new(10.0, 20.0));
    let d1 = ms.move_to(Vec2::new(4.0, 25.0));
    assert_eq!(d1, Vec2::new(-6.0, 5.0));
    assert_eq!((ms.x, ms.y), (4.0, 25.0));
    assert!(!ms.down);
}

#[test]
fn wheel_direction_keeps_only_sign() {
    assert_eq!(wheel_direction(120.0), 1.0);
    assert_eq!(wheel_direction(0.5), 1.0);
    assert_eq!(wheel_direction(-3.0), -1.0);
    assert_eq!(wheel_direction(0.0), 0.0);
}
