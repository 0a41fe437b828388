use crate::foundation::core::{ColorDepth, Expression, Gaze, Side};
use crate::palette::{ColorPalette, Paint};

/// Per-frame state source for the face.
///
/// The compositor hands each part renderer the same context for one draw
/// pass; every query is read once per renderer per frame and the snapshot
/// must not change for the duration of the pass.
pub trait FaceContext {
    /// Current facial expression.
    fn expression(&self) -> Expression;

    /// Gaze direction for the eye on `side`.
    fn gaze(&self, side: Side) -> Gaze;

    /// Eye open ratio in `[0, 1]` for `side` (0 = closed).
    fn eye_open_ratio(&self, side: Side) -> f64;

    /// Mouth open ratio in `[0, 1]` (0 = closed).
    fn mouth_open_ratio(&self) -> f64;

    /// Breathing phase in `[0, 1]`, used for idle bobbing.
    fn breath(&self) -> f64;

    /// Active color palette.
    fn palette(&self) -> &ColorPalette;

    /// Color depth of the target surface.
    fn color_depth(&self) -> ColorDepth;

    /// Depth-aware palette view for this frame.
    fn paint(&self) -> Paint<'_> {
        Paint::new(self.palette(), self.color_depth())
    }
}

/// Plain-value [`FaceContext`] implementation for hosts that own their state
/// as data (and for tests).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FaceState {
    /// Current facial expression.
    pub expression: Expression,
    /// Gaze direction of the left eye.
    pub left_gaze: Gaze,
    /// Gaze direction of the right eye.
    pub right_gaze: Gaze,
    /// Left eye open ratio in `[0, 1]`.
    pub left_eye_open: f64,
    /// Right eye open ratio in `[0, 1]`.
    pub right_eye_open: f64,
    /// Mouth open ratio in `[0, 1]`.
    pub mouth_open: f64,
    /// Breathing phase in `[0, 1]`.
    pub breath: f64,
    /// Active color palette.
    pub palette: ColorPalette,
    /// Color depth of the target surface.
    pub color_depth: ColorDepth,
}

impl Default for FaceState {
    fn default() -> Self {
        Self {
            expression: Expression::Neutral,
            left_gaze: Gaze::default(),
            right_gaze: Gaze::default(),
            left_eye_open: 1.0,
            right_eye_open: 1.0,
            mouth_open: 0.0,
            breath: 0.0,
            palette: ColorPalette::default(),
            color_depth: ColorDepth::Color,
        }
    }
}

impl FaceContext for FaceState {
    fn expression(&self) -> Expression {
        self.expression
    }

    fn gaze(&self, side: Side) -> Gaze {
        match side {
            Side::Left => self.left_gaze,
            Side::Right => self.right_gaze,
        }
    }

    fn eye_open_ratio(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left_eye_open,
            Side::Right => self.right_eye_open,
        }
    }

    fn mouth_open_ratio(&self) -> f64 {
        self.mouth_open
    }

    fn breath(&self) -> f64 {
        self.breath
    }

    fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    fn color_depth(&self) -> ColorDepth {
        self.color_depth
    }
}
