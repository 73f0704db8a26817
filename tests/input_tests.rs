// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn normalize_maps_rect_corners() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(400.0, 200.0);
    assert_eq!(normalize_point(origin, origin, size), Vec2::ZERO);
    assert_eq!(normalize_point(origin + size, origin, size), Vec2::ONE);
    assert_eq!(
        normalize_point(Vec2::new(300.0, 150.0), origin, size),
        Vec2::splat(0.5)
    );
}

#[test]
fn normalize_clamps_outside_points() {
    let origin = Vec2::ZERO;
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(
        normalize_point(Vec2::new(-40.0, 900.0), origin, size),
        Vec2::new(0.0, 1.0)
    );
    assert_eq!(
        normalize_point(Vec2::new(1600.0, -1.0), origin, size),
        Vec2::new(1.0, 0.0)
    );
}

#[test]
fn degenerate_rect_yields_centre() {
    let client = Vec2::new(42.0, 17.0);
    assert_eq!(
        normalize_point(client, Vec2::ZERO, Vec2::ZERO),
        Vec2::splat(0.5)
    );
    assert_eq!(
        normalize_point(client, Vec2::ZERO, Vec2::new(300.0, 0.0)),
        Vec2::splat(0.5)
    );
    assert_eq!(
        normalize_point(client, Vec2::ZERO, Vec2::new(f32::NAN, 10.0)),
        Vec2::splat(0.5)
    );
}

#[test]
fn non_finite_client_yields_centre() {
    let size = Vec2::new(640.0, 480.0);
    assert_eq!(
        normalize_point(Vec2::new(f32::NAN, 10.0), Vec2::ZERO, size),
        Vec2::splat(0.5)
    );
    assert_eq!(
        normalize_point(Vec2::new(10.0, f32::INFINITY), Vec2::ZERO, size),
        Vec2::splat(0.5)
    );
}

#[test]
fn normalized_points_stay_in_unit_square() {
    let origin = Vec2::new(-20.0, 35.0);
    let size = Vec2::new(375.0, 812.0);
    for i in -10..=30 {
        for j in -10..=30 {
            let client = Vec2::new(i as f32 * 20.0, j as f32 * 40.0);
            let uv = normalize_point(client, origin, size);
            assert!((0.0..=1.0).contains(&uv.x), "{uv:?}");
            assert!((0.0..=1.0).contains(&uv.y), "{uv:?}");
        }
    }
}
