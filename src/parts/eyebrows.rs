use std::f64::consts::PI;

use kurbo::{Point, Rect};

use crate::foundation::core::{Expression, Rgb565, Side};
use crate::geometry::arc::fill_arc_through;
use crate::geometry::rotate::fill_rotated_rect;
use crate::palette::DrawingLocation;
use crate::parts::FacePart;
use crate::sketch::Sketch;
use crate::state::FaceContext;

/// Per-draw-call intermediates shared by the eyebrow variants.
struct BrowFrame {
    center: Point,
    expression: Expression,
    color: Rgb565,
}

impl BrowFrame {
    fn compute(rect: Rect, ctx: &dyn FaceContext) -> Self {
        Self {
            center: rect.center(),
            expression: ctx.expression(),
            color: ctx.paint().foreground(DrawingLocation::Eyebrow),
        }
    }
}

/// Rotation applied to a tiltable eyebrow for the current expression,
/// mirrored by side.
pub(crate) fn brow_tilt(expression: Expression, side: Side) -> f64 {
    match expression {
        Expression::Angry => -side.sign() * PI / 6.0,
        Expression::Sad => side.sign() * PI / 6.0,
        _ => 0.0,
    }
}

/// Simple filled-ellipse eyebrow. The shape is symmetric, so one renderer
/// serves both sides.
#[derive(Clone, Copy, Debug)]
pub struct EllipseEyebrow {
    width: f64,
    height: f64,
}

impl Default for EllipseEyebrow {
    fn default() -> Self {
        Self::new()
    }
}

impl EllipseEyebrow {
    /// Eyebrow with the standard 30x20 size.
    pub fn new() -> Self {
        Self::with_size(30.0, 20.0)
    }

    /// Eyebrow with an explicit size.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl FacePart for EllipseEyebrow {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let f = BrowFrame::compute(rect, ctx);
        sketch.fill_ellipse(
            f.center.x,
            f.center.y,
            self.width / 2.0,
            self.height / 2.0,
            f.color,
        );
    }
}

/// Arched eyebrow drawn as an arc through three waypoints, symmetric across
/// sides.
///
/// Gated on the [`DrawingLocation::Eyebrow`] slot: a face style without the
/// slot draws no bow at all.
#[derive(Clone, Copy, Debug)]
pub struct BowEyebrow {
    width: f64,
    height: f64,
}

impl Default for BowEyebrow {
    fn default() -> Self {
        Self::new()
    }
}

impl BowEyebrow {
    /// Eyebrow with the standard 30x20 size.
    pub fn new() -> Self {
        Self::with_size(30.0, 20.0)
    }

    /// Eyebrow with an explicit size.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl FacePart for BowEyebrow {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let paint = ctx.paint();
        let Some(color) = paint.layer(DrawingLocation::Eyebrow) else {
            return;
        };
        let f = BrowFrame::compute(rect, ctx);

        // TODO: expression-driven tilt like RectEyebrow
        let thickness = 4.0;
        fill_arc_through(
            sketch,
            Point::new(f.center.x - self.width / 2.0, f.center.y + self.height / 2.0),
            Point::new(f.center.x + self.width / 2.0, f.center.y + self.height / 2.0),
            Point::new(f.center.x, f.center.y - self.height / 2.0),
            thickness,
            color,
            0.0,
        );
    }
}

/// Rotated-rectangle eyebrow tilted by expression (Angry and Sad tilt in
/// opposite directions, mirrored by side).
#[derive(Clone, Copy, Debug)]
pub struct RectEyebrow {
    width: f64,
    height: f64,
    side: Side,
}

impl RectEyebrow {
    /// Eyebrow with the standard 30x20 size.
    pub fn new(side: Side) -> Self {
        Self::with_size(30.0, 20.0, side)
    }

    /// Eyebrow with an explicit size.
    pub fn with_size(width: f64, height: f64, side: Side) -> Self {
        Self {
            width,
            height,
            side,
        }
    }
}

impl FacePart for RectEyebrow {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let f = BrowFrame::compute(rect, ctx);
        let angle = brow_tilt(f.expression, self.side);
        fill_rotated_rect(sketch, f.center, self.width, self.height, angle, f.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/eyebrows.rs"]
mod tests;
