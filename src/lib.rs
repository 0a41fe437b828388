//! Visage renders an animated cartoon face onto a 2D pixel canvas.
//!
//! The crate turns a small set of expressive state variables (facial
//! expression, gaze direction, eye/mouth open ratios, breathing phase) into
//! filled primitives on a host-supplied canvas, once per frame. It targets
//! constrained display hardware: the draw path is allocation-free, cheap per
//! frame, and works on both 1-bit and 16-bit color surfaces.
//!
//! # Pipeline overview
//!
//! 1. **Snapshot**: the host exposes per-frame state through [`FaceContext`]
//! 2. **Resolve**: each face part computes a local frame value (center, iris
//!    position, resolved colors) from its bounding [`Rect`] and the snapshot
//! 3. **Draw**: the part issues primitives on the [`Sketch`] canvas through
//!    the geometry kernel (circumcircles, via-point arcs, rotated rects)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never fail on the draw path**: degenerate geometry and missing palette
//!   entries degrade visually (default color, skipped layer, empty shape);
//!   they never panic or abort the frame.
//! - **No retained draw state**: per-frame intermediates live on the stack of
//!   each `draw` call; nothing is cached across frames.
//! - **External collaborators stay external**: the canvas driver, layout
//!   system, compositor and state source are consumed only through the
//!   [`Sketch`] and [`FaceContext`] traits.
//!
//! # Getting started
//!
//! ```
//! use visage::{ColorPalette, DrawingLocation, Rgb565};
//!
//! let mut palette = ColorPalette::default();
//! palette.set(DrawingLocation::Pupil, Rgb565::from_rgb888(0x30, 0x30, 0x30));
//! assert!(palette.contains(DrawingLocation::Pupil));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod palette;
mod parts;
mod sketch;
mod state;


pub use foundation::core::{ColorDepth, Expression, Gaze, Point, Rect, Rgb565, Side, Vec2};
pub use foundation::error::{VisageError, VisageResult};
pub use geometry::arc::{
    ArcAngles, arc_angles, circumcircle, draw_arc_through, draw_circle_through, fill_arc_through,
};
pub use geometry::rotate::{
    fill_rect_rotated_around, fill_rotated_rect, rotate_point, rotate_point_around,
};
pub use palette::{ColorPalette, DrawingLocation, MONO_ERASER, MONO_INK, Paint};
pub use parts::eyebrows::{BowEyebrow, EllipseEyebrow, RectEyebrow};
pub use parts::eyes::{DoggyEye, EllipseEye, OPEN_EYE_THRESHOLD, PinkDemonEye, ToonEye};
pub use parts::mouths::{DoggyMouth, MouthSize, OmegaMouth, RectMouth, ToonMouth, UShapeMouth};
pub use parts::{EyeKind, EyebrowKind, FacePart, MouthKind, build_eye, build_eyebrow, build_mouth};
pub use sketch::Sketch;
pub use state::{FaceContext, FaceState};
