// Host-side tests for SVG output of both scenes.

use backdrop_core::*;
use glam::Vec2;

#[test]
fn path_data_formats_move_then_lines() {
    let points = [Vec2::new(0.0, 0.0), Vec2::new(1.5, 2.25), Vec2::new(3.0, -4.126)];
    assert_eq!(path_data(&points), "M 0.00 0.00 L 1.50 2.25 L 3.00 -4.13");
}

#[test]
fn path_data_single_point_and_empty() {
    assert_eq!(path_data(&[Vec2::new(10.0, 20.0)]), "M 10.00 20.00");
    assert_eq!(path_data(&[]), "");
}

#[test]
fn path_data_matches_generated_fiber() {
    let viewport = Viewport::new(1280.0, 720.0, 1.0).unwrap();
    let profile = &DESKTOP_PROFILE;
    let path = generate_path(&profile.fibers[0], 1.0, Vec2::splat(0.5), &viewport, profile);
    let d = path_data(&path);
    assert!(d.starts_with("M 0.00 "));
    assert_eq!(d.matches(" L ").count(), path.len() - 1);
}

#[test]
fn wave_field_document_has_one_path_per_fiber() {
    let viewport = Viewport::new(800.0, 400.0, 2.0).unwrap();
    let mut field = WaveField::new(viewport);
    field.step(0.0);
    let mut svg = SvgSurface::new();
    field.render(&mut svg);
    let doc = svg.document();

    assert!(doc.starts_with("<svg "));
    assert!(doc.ends_with("</svg>"));
    assert!(doc.contains(r#"viewBox="0 0 800 400""#));
    assert_eq!(doc.matches("<path ").count(), TABLET_PROFILE.fibers.len());
    assert!(doc.contains("stroke=\"hsla("));
    // no bars, so no gradient definitions
    assert!(!doc.contains("<defs>"));
}

#[test]
fn spectrum_document_has_gradient_per_bar() {
    let viewport = Viewport::new(375.0, 80.0, 3.0).unwrap();
    let mut bars = SpectrumBars::new(viewport);
    bars.step(0.0);
    let mut svg = SvgSurface::new();
    bars.render(&mut svg);
    let doc = svg.document();

    let count = MOBILE_PROFILE.bar_count;
    assert_eq!(doc.matches("<linearGradient ").count(), count);
    assert_eq!(doc.matches("<rect ").count(), count);
    assert!(doc.contains(r#"fill="url(#bar0)""#));
    assert!(doc.contains(&format!(r#"fill="url(#bar{})""#, count - 1)));
}

#[test]
fn clear_starts_a_fresh_document() {
    let viewport = Viewport::new(800.0, 100.0, 1.0).unwrap();
    let mut bars = SpectrumBars::new(viewport);
    let mut svg = SvgSurface::new();
    bars.render(&mut svg);
    bars.render(&mut svg);
    let doc = svg.document();
    assert_eq!(doc.matches("<linearGradient ").count(), TABLET_PROFILE.bar_count);
}

#[test]
fn peak_marker_emitted_above_falling_bar() {
    let viewport = Viewport::new(1280.0, 100.0, 1.0).unwrap();
    let mut bars = SpectrumBars::new(viewport);
    let mut now = 0.0;
    for _ in 0..40 {
        bars.pointer_moved(Vec2::new(0.5, 0.5), now);
        bars.step(now);
        now += 16.0;
    }
    // pull the pointer away so the middle bars fall under their held peaks
    for _ in 0..10 {
        bars.pointer_moved(Vec2::new(0.0, 0.5), now);
        bars.step(now);
        now += 16.0;
    }
    let mut svg = SvgSurface::new();
    bars.render(&mut svg);
    let doc = svg.document();
    let with_peak = (0..bars.bars().len())
        .filter(|&i| bars.bar_geometry(i).and_then(|g| g.peak).is_some())
        .count();
    assert!(with_peak > 0);
    assert_eq!(doc.matches("<rect ").count(), bars.bars().len() + with_peak);
}
