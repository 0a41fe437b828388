use super::*;

use crate::foundation::core::{ColorDepth, Gaze};
use crate::palette::{ColorPalette, MONO_INK};
use crate::state::FaceState;
use crate::testkit::{Recorder, SketchOp};

fn eye_rect() -> Rect {
    Rect::from_center_size((100.0, 100.0), (36.0, 70.0))
}

#[test]
fn closed_eye_draws_only_the_thin_bar() {
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        left_eye_open: 0.0,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(
        sketch.ops,
        vec![SketchOp::FillRect {
            left: 82.0,
            top: 115.5,
            width: 36.0,
            height: 4.0,
            color: Rgb565::WHITE,
        }]
    );
}

#[test]
fn sleepy_expression_forces_the_closed_fast_path() {
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        expression: Expression::Sleepy,
        left_eye_open: 1.0,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(sketch.fill_rects().len(), 1);
    assert!(sketch.fill_ellipses().is_empty());
}

#[test]
fn neutral_eye_with_empty_palette_falls_back_to_black() {
    // empty palette, full color depth, neutral, fully open: a single sclera
    // ellipse at the rect center with the black fallback, no crash
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        palette: ColorPalette::empty(),
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(
        sketch.ops,
        vec![SketchOp::FillEllipse {
            cx: 100.0,
            cy: 100.0,
            rx: 18.0,
            ry: 35.0,
            color: Rgb565::BLACK,
        }]
    );
}

#[test]
fn gaze_offsets_the_iris() {
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        left_gaze: Gaze::new(1.0, -1.0),
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    let SketchOp::FillEllipse { cx, cy, .. } = sketch.ops[0] else {
        panic!("expected the sclera ellipse first, got {:?}", sketch.ops[0]);
    };
    assert_eq!(cx, 104.0); // 4 px per unit of horizontal gaze
    assert_eq!(cy, 98.0); // 2 px per unit of vertical gaze
}

#[test]
fn angry_and_sad_masks_mirror_by_side() {
    for (expression, side, expected_corner_x) in [
        (Expression::Angry, Side::Left, 82.0),
        (Expression::Angry, Side::Right, 118.0),
        (Expression::Sad, Side::Left, 118.0),
        (Expression::Sad, Side::Right, 82.0),
    ] {
        let eye = EllipseEye::new(side);
        let state = FaceState {
            expression,
            ..FaceState::default()
        };

        let mut sketch = Recorder::new();
        eye.draw(&mut sketch, eye_rect(), &state);

        let triangles = sketch.fill_triangles();
        assert_eq!(triangles.len(), 1, "{expression:?} {side:?}");
        let SketchOp::FillTriangle { c, color, .. } = triangles[0] else {
            unreachable!();
        };
        assert_eq!(c.x, expected_corner_x, "{expression:?} {side:?}");
        assert_eq!(c.y, 82.5);
        assert_eq!(color, Rgb565::BLACK); // skin
    }
}

#[test]
fn doubt_masks_the_upper_quarter() {
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        expression: Expression::Doubt,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(
        sketch.fill_rects(),
        vec![SketchOp::FillRect {
            left: 82.0,
            top: 65.0,
            width: 36.0,
            height: 17.5,
            color: Rgb565::BLACK,
        }]
    );
}

#[test]
fn zero_size_eye_draws_nothing() {
    let eye = EllipseEye::with_size(0.0, 0.0, Side::Left);
    let state = FaceState::default();
    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);
    assert!(sketch.ops.is_empty());
}

#[test]
fn monochrome_depth_forces_ink_values() {
    let eye = EllipseEye::new(Side::Left);
    let state = FaceState {
        color_depth: ColorDepth::Monochrome,
        left_eye_open: 0.0,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    let SketchOp::FillRect { color, .. } = sketch.ops[0] else {
        unreachable!();
    };
    assert_eq!(color, MONO_INK);
}

#[test]
fn toon_open_ratio_overrides_follow_expression() {
    assert_eq!(
        ToonEye::overwritten_open_ratio(Expression::Doubt, 1.0),
        0.6
    );
    assert_eq!(
        ToonEye::overwritten_open_ratio(Expression::Doubt, 0.3),
        0.3
    );
    assert_eq!(ToonEye::overwritten_open_ratio(Expression::Sleepy, 1.0), 0.0);
    assert_eq!(ToonEye::overwritten_open_ratio(Expression::Happy, 1.0), 0.0);
    assert_eq!(
        ToonEye::overwritten_open_ratio(Expression::Neutral, 0.8),
        0.8
    );
}

#[test]
fn toon_eye_below_threshold_skips_the_iris_stack() {
    let eye = ToonEye::new(Side::Left);
    let state = FaceState {
        left_eye_open: 0.05,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    // no eyelid slot either, so nothing at all is drawn
    assert!(sketch.ops.is_empty());
}

#[test]
fn toon_eye_layers_are_gated_by_palette_slots() {
    let state = FaceState::default();
    let eye = ToonEye::new(Side::Left);

    let mut bare = Recorder::new();
    eye.draw(&mut bare, eye_rect(), &state);
    // sclera only
    assert_eq!(bare.fill_ellipses().len(), 1);
    assert!(bare.fill_arcs().is_empty());

    let mut palette = ColorPalette::default();
    palette.set(DrawingLocation::Iris1, Rgb565(0x1111));
    palette.set(DrawingLocation::Pupil, Rgb565(0x2222));
    let state = FaceState {
        palette,
        ..FaceState::default()
    };
    let mut layered = Recorder::new();
    eye.draw(&mut layered, eye_rect(), &state);
    // sclera + iris ring + pupil
    assert_eq!(layered.fill_ellipses().len(), 3);
}

#[test]
fn toon_eye_draws_lid_arcs_when_the_slot_is_present() {
    let mut palette = ColorPalette::default();
    palette.set(DrawingLocation::Eyelid, Rgb565(0x3333));
    let eye = ToonEye::new(Side::Left);
    let state = FaceState {
        expression: Expression::Sleepy,
        palette,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    // mask band plus lid arc, no iris stack while sleeping
    assert!(sketch.fill_ellipses().is_empty());
    assert_eq!(sketch.fill_arcs().len(), 2);
}

#[test]
fn toon_eyelash_needs_both_slots() {
    let mut palette = ColorPalette::default();
    palette.set(DrawingLocation::Eyelid, Rgb565(0x3333));
    let eye = ToonEye::new(Side::Left);
    let state = FaceState {
        palette: palette.clone(),
        ..FaceState::default()
    };

    let mut without_lash = Recorder::new();
    eye.draw(&mut without_lash, eye_rect(), &state);
    assert!(without_lash.fill_triangles().is_empty());

    palette.set(DrawingLocation::Eyelash, Rgb565(0x4444));
    let state = FaceState {
        palette,
        ..FaceState::default()
    };
    let mut with_lash = Recorder::new();
    eye.draw(&mut with_lash, eye_rect(), &state);
    assert_eq!(with_lash.fill_triangles().len(), 1);
}

#[test]
fn eyelid_tilt_mirrors_angry_and_sad() {
    let reference = std::f64::consts::PI / 12.0;
    assert_eq!(
        eyelid_tilt(Expression::Angry, Side::Left, 1.0, reference),
        -reference
    );
    assert_eq!(
        eyelid_tilt(Expression::Angry, Side::Right, 1.0, reference),
        reference
    );
    assert_eq!(
        eyelid_tilt(Expression::Sad, Side::Left, 1.0, reference),
        reference
    );
    assert_eq!(
        eyelid_tilt(Expression::Neutral, Side::Left, 1.0, reference),
        0.0
    );
    // tilt fades out as the eye closes
    assert_eq!(
        eyelid_tilt(Expression::Angry, Side::Left, 0.0, reference),
        0.0
    );
}

#[test]
fn pink_demon_doubt_forces_a_fixed_aperture() {
    assert_eq!(
        PinkDemonEye::overwritten_open_ratio(Expression::Doubt, 1.0),
        0.6
    );
    assert_eq!(
        PinkDemonEye::overwritten_open_ratio(Expression::Sleepy, 1.0),
        0.0
    );
}

#[test]
fn pink_demon_draws_iris_stack_and_lid_masks() {
    let eye = PinkDemonEye::new(Side::Left);
    let state = FaceState {
        expression: Expression::Doubt,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    // sclera + accent + upper lobe + highlight
    assert_eq!(sketch.fill_ellipses().len(), 4);
    // two rotated rects (mask + lid band), two triangles each
    assert_eq!(sketch.fill_triangles().len(), 4);
}

#[test]
fn fully_open_pink_demon_skips_the_lid() {
    let eye = PinkDemonEye::new(Side::Left);
    let state = FaceState::default();

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(sketch.fill_ellipses().len(), 4);
    assert!(sketch.fill_triangles().is_empty());
}

#[test]
fn doggy_eye_closed_bar_is_fixed_size() {
    let eye = DoggyEye::new(Side::Left);
    let state = FaceState {
        left_eye_open: 0.0,
        ..FaceState::default()
    };

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(
        sketch.ops,
        vec![SketchOp::FillRect {
            left: 85.0,
            top: 98.0,
            width: 30.0,
            height: 4.0,
            color: Rgb565::WHITE,
        }]
    );
}

#[test]
fn doggy_eye_open_draws_outline_and_iris() {
    let eye = DoggyEye::new(Side::Left);
    let state = FaceState::default();

    let mut sketch = Recorder::new();
    eye.draw(&mut sketch, eye_rect(), &state);

    assert_eq!(sketch.fill_ellipses().len(), 4);
}
