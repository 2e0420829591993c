//! Geometry, color and display resolution through the public API.

use eno_cursor::color::hex_to_rgba;
use eno_cursor::geometry::{compute_rects, inner_offset, outer_offset};
use eno_cursor::model::{descriptors_from_bounds, Bounds, CircleSpec, Point, CIRCLE_OPACITY};
use eno_cursor::tracking::{resolve, to_global, to_local};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn dual_hd() -> Vec<eno_cursor::DisplayDescriptor> {
    descriptors_from_bounds([
        Bounds::new(0.0, 0.0, 1920.0, 1080.0),
        Bounds::new(1920.0, 0.0, 1920.0, 1080.0),
    ])
}

// === Geometry ===

#[test]
fn default_circles_on_single_display() {
    let displays = descriptors_from_bounds([Bounds::new(0.0, 0.0, 1920.0, 1080.0)]);
    let cursor = Point::new(500.0, 300.0);
    let display = resolve(cursor, &displays).expect("cursor is on the display");
    let rects = compute_rects(to_local(cursor, display), &CircleSpec::default());

    assert!(approx_eq(rects.outer.left, 0.0));
    assert!(approx_eq(rects.outer.top, -230.0));
    assert!(approx_eq(rects.outer.width, 1000.0));
    assert!(approx_eq(rects.inner.left, 175.0));
    assert!(approx_eq(rects.inner.top, -55.0));
    assert!(approx_eq(rects.inner.height, 650.0));
}

#[test]
fn rect_center_includes_compensation() {
    let spec = CircleSpec {
        inner_diameter: 200.0,
        outer_diameter: 300.0,
        ..CircleSpec::default()
    };
    let p = Point::new(640.0, 480.0);
    let rects = compute_rects(p, &spec);

    let outer = outer_offset(300.0);
    assert!(approx_eq(outer.x, 2.5));
    assert!(approx_eq(rects.outer.center().x, p.x + outer.x));
    assert!(approx_eq(rects.outer.center().y, p.y + outer.y));

    let inner = inner_offset(200.0);
    assert!(approx_eq(inner.x, 1.5));
    assert!(approx_eq(inner.y, -28.5));
    assert!(approx_eq(rects.inner.center().y, p.y + inner.y));
}

#[test]
fn same_input_same_rects() {
    let spec = CircleSpec::default().with_inner_size(123.0);
    let p = Point::new(17.0, 42.0);
    assert_eq!(compute_rects(p, &spec), compute_rects(p, &spec));
}

// === Color ===

#[test]
fn default_colors_convert_with_fixed_alpha() {
    let spec = CircleSpec::default();
    assert_eq!(
        hex_to_rgba(&spec.inner_color, CIRCLE_OPACITY).to_css(),
        "rgba(208, 114, 59, 0.6)"
    );
    assert_eq!(
        hex_to_rgba(&spec.outer_color, CIRCLE_OPACITY).to_css(),
        "rgba(231, 75, 75, 0.6)"
    );
}

#[test]
fn malformed_color_degrades_without_panicking() {
    let color = hex_to_rgba("oops", CIRCLE_OPACITY);
    assert!(!color.is_complete());
    assert!(color.to_unit().is_none());
    assert!(color.to_css().contains("NaN"));
}

// === Resolution and mapping ===

#[test]
fn cursor_on_second_display() {
    let displays = dual_hd();
    let cursor = Point::new(2000.0, 50.0);
    let display = resolve(cursor, &displays).expect("cursor is on display B");
    assert_eq!(display.index, 1);
    assert_eq!(to_local(cursor, display), Point::new(80.0, 50.0));
}

#[test]
fn right_edge_belongs_to_next_display() {
    let displays = dual_hd();
    assert_eq!(resolve(Point::new(1919.0, 0.0), &displays).map(|d| d.index), Some(0));
    assert_eq!(resolve(Point::new(1920.0, 0.0), &displays).map(|d| d.index), Some(1));
    assert!(resolve(Point::new(3840.0, 0.0), &displays).is_none());
    assert!(resolve(Point::new(100.0, 1080.0), &displays).is_none());
}

#[test]
fn local_mapping_round_trips() {
    let displays = descriptors_from_bounds([Bounds::new(-1280.0, -200.0, 1280.0, 1024.0)]);
    let d = &displays[0];
    for p in [Point::new(-1000.5, 12.25), Point::new(0.0, 0.0), Point::new(5000.0, -7.0)] {
        assert_eq!(to_global(to_local(p, d), d), p);
    }
}
