// Host-side tests for the wave field generator.

use backdrop_core::constants::*;
use backdrop_core::*;
use glam::Vec2;

fn desktop() -> Viewport {
    Viewport::new(1200.0, 1000.0, 1.0).unwrap()
}

// Harmonic displacement written out longhand, for comparison.
fn expected_harmonics(f: &FiberConfig, x: f32, t: f32, third: bool) -> f32 {
    let a = f.amplitude;
    let mut y = (x * f.frequency + t * f.speed + f.phase).sin() * a;
    y += (x * f.frequency * PHI + t * f.speed * 0.7 + 2.0 * f.phase).sin() * a * 0.3;
    if third {
        y += (x * f.frequency / PHI + t * f.speed * 1.3 + 3.0 * f.phase).sin() * a * 0.18;
    }
    y
}

#[test]
fn generate_path_is_deterministic() {
    let vp = desktop();
    let fiber = &DESKTOP_PROFILE.fibers[2];
    let pointer = Vec2::new(0.3, 0.4);
    let a = generate_path(fiber, 7.25, pointer, &vp, &DESKTOP_PROFILE);
    let b = generate_path(fiber, 7.25, pointer, &vp, &DESKTOP_PROFILE);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn samples_span_width_at_tier_step() {
    let vp = desktop();
    let path = generate_path(
        &DESKTOP_PROFILE.fibers[0],
        0.0,
        Vec2::splat(0.5),
        &vp,
        &DESKTOP_PROFILE,
    );
    assert_eq!(path.len(), 401);
    assert_eq!(path[0].x, 0.0);
    assert_eq!(path[1].x, 3.0);
    assert_eq!(path.last().unwrap().x, 1200.0);

    let mobile = Viewport::new(375.0, 700.0, 2.0).unwrap();
    let path = generate_path(
        &MOBILE_PROFILE.fibers[0],
        0.0,
        Vec2::splat(0.5),
        &mobile,
        &MOBILE_PROFILE,
    );
    // 0, 6, ..., 372
    assert_eq!(path.len(), 63);
    assert!(path.last().unwrap().x <= 375.0);
}

#[test]
fn zero_size_viewport_yields_empty_path() {
    let fiber = &DESKTOP_PROFILE.fibers[0];
    for vp in [
        Viewport::new(0.0, 500.0, 1.0).unwrap(),
        Viewport::new(500.0, 0.0, 1.0).unwrap(),
    ] {
        assert!(generate_path(fiber, 1.0, Vec2::splat(0.5), &vp, &DESKTOP_PROFILE).is_empty());
    }
}

#[test]
fn ripple_influence_boundaries() {
    assert_eq!(ripple_influence(0.0, 480.0, 2.0), 1.0);
    assert_eq!(ripple_influence(0.0, 480.0, 1.5), 1.0);
    let near_edge = ripple_influence(479.0, 480.0, 2.0);
    assert!(near_edge > 0.0 && near_edge < 1e-5);
    assert_eq!(ripple_influence(480.0, 480.0, 2.0), 0.0);
    assert_eq!(ripple_influence(1000.0, 480.0, 2.0), 0.0);
    assert_eq!(ripple_influence(10.0, 0.0, 2.0), 0.0);
    // monotone falloff
    let mut prev = 1.0;
    for d in (0..480).step_by(20) {
        let v = ripple_influence(d as f32, 480.0, 2.0);
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn far_samples_follow_harmonics_only() {
    let vp = desktop();
    let fiber = DESKTOP_PROFILE.fibers[0];
    let t = 3.5;
    // pointer in the far corner; sample at x = 0 is outside the ripple radius
    let path = generate_path(&fiber, t, Vec2::ONE, &vp, &DESKTOP_PROFILE);
    let base_y = 1000.0 * fiber.y_offset;
    let expected = base_y + expected_harmonics(&fiber, 0.0, t, true);
    assert!((path[0].y - expected).abs() < 1e-2, "{} vs {}", path[0].y, expected);
}

#[test]
fn third_harmonic_only_on_desktop() {
    let vp = Viewport::new(800.0, 1000.0, 1.0).unwrap();
    let fiber = TABLET_PROFILE.fibers[1];
    let t = 2.0;
    let path = generate_path(&fiber, t, Vec2::ONE, &vp, &TABLET_PROFILE);
    let expected = 1000.0 * fiber.y_offset + expected_harmonics(&fiber, 0.0, t, false);
    assert!((path[0].y - expected).abs() < 1e-2);
}

#[test]
fn ripple_is_full_strength_under_the_pointer() {
    let vp = desktop();
    let fiber = DESKTOP_PROFILE.fibers[0];
    let t = 1.0;
    let base_y = 1000.0 * fiber.y_offset;
    // pointer exactly on the sample at x = 600 on this fiber's baseline
    let pointer = Vec2::new(0.5, fiber.y_offset);
    let path = generate_path(&fiber, t, pointer, &vp, &DESKTOP_PROFILE);
    let sample = path[200];
    assert_eq!(sample.x, 600.0);
    let ripple = sample.y - base_y - expected_harmonics(&fiber, 600.0, t, true);
    let expected = (-t * 2.5_f32).sin() * 35.0;
    assert!((ripple - expected).abs() < 1e-2, "{} vs {}", ripple, expected);
}

#[test]
fn wave_field_renders_every_fiber() {
    let mut field = WaveField::new(desktop());
    let mut surface = NullSurface::default();
    field.step(0.0);
    field.render(&mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.polylines, DESKTOP_PROFILE.fibers.len());
    assert!((field.clock().time() - CLOCK_STEP).abs() < 1e-6);
}

#[test]
fn wave_field_skips_drawing_when_empty() {
    let mut field = WaveField::new(Viewport::default());
    let mut surface = NullSurface::default();
    field.step(0.0);
    field.render(&mut surface);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.polylines, 0);
}

#[test]
fn wave_field_switches_profile_on_resize() {
    let mut field = WaveField::new(desktop());
    assert_eq!(field.profile().tier, DeviceTier::Desktop);
    field.resize(Viewport::new(390.0, 800.0, 3.0).unwrap());
    assert_eq!(field.profile().tier, DeviceTier::Mobile);
    assert_eq!(field.paths().len(), MOBILE_PROFILE.fibers.len());
    assert_eq!(field.viewport().width, 390.0);
}

#[test]
fn wave_field_pointer_eases_toward_target() {
    let mut field = WaveField::new(desktop());
    field.pointer_moved(Vec2::new(1.0, 0.5), 0.0);
    field.step(0.0);
    let x1 = field.pointer().current().x;
    assert!((x1 - (0.5 + 0.5 * DESKTOP_PROFILE.pointer_smoothing)).abs() < 1e-6);
    field.step(16.0);
    assert!(field.pointer().current().x > x1);
    assert!(field.pointer().current().x < 1.0);
}

#[test]
fn fiber_stroke_uses_tier_width() {
    let style = fiber_stroke(&MOBILE_PROFILE.fibers[0], &MOBILE_PROFILE);
    assert_eq!(style.width, 2.5);
    assert_eq!(style.color.saturation, 70.0);
    assert_eq!(style.color.alpha, MOBILE_PROFILE.fibers[0].opacity);
}
