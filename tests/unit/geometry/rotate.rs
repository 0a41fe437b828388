use std::f64::consts::PI;

use super::*;
use crate::foundation::core::Rgb565;
use crate::testkit::{Recorder, SketchOp};

fn assert_point_near(actual: Point, expected: Point, tol: f64) {
    assert!(
        (actual.x - expected.x).abs() < tol && (actual.y - expected.y).abs() < tol,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn identity_rotation_returns_input() {
    for p in [
        Point::new(0.0, 0.0),
        Point::new(3.5, -2.0),
        Point::new(-100.0, 40.0),
    ] {
        assert_eq!(rotate_point_around(p, 0.0, Point::new(7.0, 9.0)), p);
    }
}

#[test]
fn quarter_turn_about_origin() {
    let p = rotate_point(Point::new(1.0, 0.0), PI / 2.0);
    assert_point_near(p, Point::new(0.0, 1.0), 1e-9);
}

#[test]
fn rotation_roundtrips_within_tolerance() {
    let p = Point::new(12.0, -5.0);
    let pivot = Point::new(3.0, 4.0);
    let angle = 0.7;
    let back = rotate_point_around(rotate_point_around(p, angle, pivot), -angle, pivot);
    assert_point_near(back, p, 1e-9);
}

#[test]
fn pivot_rotation_matches_translate_rotate_translate() {
    let p = Point::new(5.0, 2.0);
    let pivot = Point::new(1.0, 1.0);
    let angle = 1.2;
    let local = rotate_point(Point::new(p.x - pivot.x, p.y - pivot.y), angle);
    let expected = Point::new(local.x + pivot.x, local.y + pivot.y);
    assert_eq!(rotate_point_around(p, angle, pivot), expected);
}

#[test]
fn unrotated_rect_fills_two_triangles_on_corners() {
    let mut sketch = Recorder::new();
    fill_rotated_rect(
        &mut sketch,
        Point::new(10.0, 10.0),
        4.0,
        2.0,
        0.0,
        Rgb565::WHITE,
    );

    assert_eq!(
        sketch.ops,
        vec![
            SketchOp::FillTriangle {
                a: Point::new(8.0, 9.0),
                b: Point::new(12.0, 9.0),
                c: Point::new(12.0, 11.0),
                color: Rgb565::WHITE,
            },
            SketchOp::FillTriangle {
                a: Point::new(8.0, 9.0),
                b: Point::new(12.0, 11.0),
                c: Point::new(8.0, 11.0),
                color: Rgb565::WHITE,
            },
        ]
    );
}

#[test]
fn rotated_corner_box_rotates_all_corners_around_pivot() {
    let top_left = Point::new(0.0, 0.0);
    let bottom_right = Point::new(4.0, 2.0);
    let pivot = Point::new(2.0, 1.0);
    let angle = 0.5;

    let mut sketch = Recorder::new();
    fill_rect_rotated_around(&mut sketch, top_left, bottom_right, angle, pivot, Rgb565::RED);

    let tl = rotate_point_around(top_left, angle, pivot);
    let tr = rotate_point_around(Point::new(4.0, 0.0), angle, pivot);
    let bl = rotate_point_around(Point::new(0.0, 2.0), angle, pivot);
    let br = rotate_point_around(bottom_right, angle, pivot);

    assert_eq!(
        sketch.ops,
        vec![
            SketchOp::FillTriangle {
                a: tl,
                b: tr,
                c: br,
                color: Rgb565::RED,
            },
            SketchOp::FillTriangle {
                a: tl,
                b: br,
                c: bl,
                color: Rgb565::RED,
            },
        ]
    );
}
