pub mod eyebrows;
pub mod eyes;
pub mod mouths;

use kurbo::Rect;

use crate::foundation::core::Side;
use crate::sketch::Sketch;
use crate::state::FaceContext;

/// One drawable anatomical part of the face.
///
/// The compositor owns the ordered part list and their rectangles and calls
/// `draw` once per part per frame, back to front. Implementations never fail:
/// degenerate input draws nothing and unhandled expressions fall back to the
/// neutral shape.
pub trait FacePart {
    /// Render this part into `rect` using the per-frame state in `ctx`.
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext);
}

/// Eye renderer variants.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum EyeKind {
    /// Simple filled ellipse with expression masks.
    #[default]
    Ellipse,
    /// Eyelid arc, eyelash and layered iris rings.
    Toon,
    /// Rect-masked eyelid with tilt and fixed accent layers.
    PinkDemon,
    /// Fixed-size simplified eye.
    Doggy,
}

/// Eyebrow renderer variants.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum EyebrowKind {
    /// Simple filled ellipse.
    #[default]
    Ellipse,
    /// Fixed arc through three waypoints.
    Bow,
    /// Rotated rectangle tilted by expression.
    Rect,
}

/// Mouth renderer variants.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum MouthKind {
    /// Simple open/close width-height interpolation.
    #[default]
    Rect,
    /// Layered ellipses forming an omega shape.
    Omega,
    /// Expression-branched lip-outline arcs with filled interior.
    Toon,
    /// Single sagging arc.
    UShape,
    /// Fixed muzzle ellipses with tongue.
    Doggy,
}

/// Build the eye variant selected at configuration time.
pub fn build_eye(kind: EyeKind, side: Side) -> Box<dyn FacePart> {
    match kind {
        EyeKind::Ellipse => Box::new(eyes::EllipseEye::new(side)),
        EyeKind::Toon => Box::new(eyes::ToonEye::new(side)),
        EyeKind::PinkDemon => Box::new(eyes::PinkDemonEye::new(side)),
        EyeKind::Doggy => Box::new(eyes::DoggyEye::new(side)),
    }
}

/// Build the eyebrow variant selected at configuration time.
pub fn build_eyebrow(kind: EyebrowKind, side: Side) -> Box<dyn FacePart> {
    match kind {
        EyebrowKind::Ellipse => Box::new(eyebrows::EllipseEyebrow::new()),
        EyebrowKind::Bow => Box::new(eyebrows::BowEyebrow::new()),
        EyebrowKind::Rect => Box::new(eyebrows::RectEyebrow::new(side)),
    }
}

/// Build the mouth variant selected at configuration time.
pub fn build_mouth(kind: MouthKind) -> Box<dyn FacePart> {
    match kind {
        MouthKind::Rect => Box::new(mouths::RectMouth::default()),
        MouthKind::Omega => Box::new(mouths::OmegaMouth::default()),
        MouthKind::Toon => Box::new(mouths::ToonMouth::default()),
        MouthKind::UShape => Box::new(mouths::UShapeMouth::default()),
        MouthKind::Doggy => Box::new(mouths::DoggyMouth::default()),
    }
}
