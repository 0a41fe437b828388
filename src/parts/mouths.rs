use kurbo::{Point, Rect};

use crate::foundation::core::{Expression, Rgb565, clamp01};
use crate::geometry::arc::fill_arc_through;
use crate::palette::{DrawingLocation, Paint};
use crate::parts::FacePart;
use crate::sketch::Sketch;
use crate::state::FaceContext;

/// Size envelope every mouth variant interpolates within.
///
/// Closed mouths sit at `min_height`/`max_width`, fully open mouths at
/// `max_height`/`min_width` (mouths narrow as they open).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MouthSize {
    /// Width at full aperture.
    pub min_width: f64,
    /// Width when closed.
    pub max_width: f64,
    /// Height when closed.
    pub min_height: f64,
    /// Height at full aperture.
    pub max_height: f64,
}

impl Default for MouthSize {
    fn default() -> Self {
        Self {
            min_width: 80.0,
            max_width: 80.0,
            min_height: 15.0,
            max_height: 30.0,
        }
    }
}

impl MouthSize {
    fn height_at(&self, open_ratio: f64) -> f64 {
        self.min_height + (self.max_height - self.min_height) * open_ratio
    }

    fn width_at(&self, open_ratio: f64) -> f64 {
        self.min_width + (self.max_width - self.min_width) * (1.0 - open_ratio)
    }
}

/// Per-draw-call intermediates shared by every mouth variant.
struct MouthFrame {
    center: Point,
    open_ratio: f64,
    breath: f64,
    expression: Expression,
    color: Rgb565,
    skin: Rgb565,
}

impl MouthFrame {
    fn compute(rect: Rect, ctx: &dyn FaceContext) -> Self {
        let paint = ctx.paint();
        Self {
            center: rect.center(),
            open_ratio: clamp01(ctx.mouth_open_ratio()),
            breath: ctx.breath().min(1.0),
            expression: ctx.expression(),
            color: paint.foreground(DrawingLocation::MouthBackground),
            skin: paint.background(DrawingLocation::Skin),
        }
    }
}

fn draw_cheeks(sketch: &mut dyn Sketch, center: Point, paint: &Paint<'_>) {
    if let Some(color) = paint.layer(DrawingLocation::Cheek1) {
        sketch.fill_ellipse(center.x - 132.0, center.y - 23.0, 24.0, 10.0, color);
        sketch.fill_ellipse(center.x + 132.0, center.y - 23.0, 24.0, 10.0, color);
    }
}

/// Simple rectangular mouth: height grows and width shrinks with the open
/// ratio, with a small breathing bob.
#[derive(Clone, Copy, Debug, Default)]
pub struct RectMouth {
    size: MouthSize,
}

impl RectMouth {
    /// Mouth with an explicit size envelope.
    pub fn with_size(size: MouthSize) -> Self {
        Self { size }
    }
}

impl FacePart for RectMouth {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let f = MouthFrame::compute(rect, ctx);
        let h = self.size.height_at(f.open_ratio);
        let w = self.size.width_at(f.open_ratio);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        sketch.fill_rect(
            f.center.x - w / 2.0,
            f.center.y - h / 2.0 + f.breath * 2.0,
            w,
            h,
            f.color,
        );
    }
}

/// Omega-shaped mouth built from layered ellipses, with optional inner-mouth
/// fill and cheek blush.
#[derive(Clone, Copy, Debug, Default)]
pub struct OmegaMouth {
    size: MouthSize,
}

impl OmegaMouth {
    /// Mouth with an explicit size envelope.
    pub fn with_size(size: MouthSize) -> Self {
        Self { size }
    }
}

impl FacePart for OmegaMouth {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let paint = ctx.paint();
        let f = MouthFrame::compute(rect, ctx);
        let outline_thickness = 2.0;
        let max_w = self.size.max_width;
        let max_h = self.size.max_height;
        let h = max_h * f.open_ratio;
        let lobe_y = f.center.y - max_h / 2.0;

        if f.open_ratio > 0.01 {
            tracing::trace!(open_ratio = f.open_ratio, "omega mouth open");
            sketch.fill_ellipse(f.center.x, lobe_y, max_w / 4.0, h, f.color);
            if h > outline_thickness * 2.0
                && let Some(inner) = paint.layer(DrawingLocation::InnerMouth)
            {
                sketch.fill_ellipse(
                    f.center.x,
                    lobe_y,
                    max_w / 4.0 - 4.0,
                    h - outline_thickness * 2.0,
                    inner,
                );
            }
        }

        // the two omega lobes, outline then inner fill
        sketch.fill_ellipse(f.center.x - 16.0, lobe_y, 20.0, 15.0, f.color);
        sketch.fill_ellipse(f.center.x + 16.0, lobe_y, 20.0, 15.0, f.color);
        sketch.fill_ellipse(f.center.x - 16.0, lobe_y, 18.0, 13.0, f.skin);
        sketch.fill_ellipse(f.center.x + 16.0, lobe_y, 18.0, 13.0, f.skin);

        // mask the upper halves of the lobes
        sketch.fill_rect(
            f.center.x - max_w / 2.0,
            f.center.y - max_h * 1.5,
            max_w,
            max_h,
            f.skin,
        );

        draw_cheeks(sketch, f.center, &paint);
    }
}

/// Lip-outline targets for one toon-mouth frame, keyed off the expression.
#[derive(Clone, Copy, Debug, PartialEq)]
struct LipShape {
    width: f64,
    upper_lip_y: f64,
    lower_lip_y: f64,
}

impl LipShape {
    /// Map the expression to lip targets. Happy and Smile force the mouth to
    /// its full width regardless of the open ratio; Angry lifts both lips;
    /// Doubt pinches to the minimum width; Sad halves the widening and drops
    /// the lower lip short.
    fn for_expression(expression: Expression, size: &MouthSize, baseline_y: f64, open_ratio: f64) -> Self {
        let neutral_w = 0.8 * size.max_width;
        let h = size.min_height + (size.max_height - size.min_height) * open_ratio;
        let w = size.min_width + (neutral_w - size.min_width) * (1.0 - open_ratio);
        let lip_ratio = 0.5; // upper lip height / lower lip height

        match expression {
            Expression::Happy | Expression::Smile => Self {
                width: size.max_width,
                upper_lip_y: baseline_y + size.max_height,
                lower_lip_y: baseline_y + size.max_height,
            },
            Expression::Angry => Self {
                width: w,
                upper_lip_y: baseline_y - size.min_height,
                lower_lip_y: baseline_y - size.min_height,
            },
            Expression::Doubt => Self {
                width: size.min_width,
                upper_lip_y: baseline_y - size.min_height / 2.0,
                lower_lip_y: baseline_y + size.min_height / 2.0,
            },
            Expression::Sad => Self {
                width: size.min_width + (neutral_w - size.min_width) * 0.5,
                upper_lip_y: baseline_y - size.min_height / 2.0,
                lower_lip_y: baseline_y + size.min_height / (1.0 + lip_ratio),
            },
            _ => Self {
                width: w,
                upper_lip_y: baseline_y + size.min_height,
                lower_lip_y: baseline_y + h,
            },
        }
    }
}

/// Toon mouth: upper and lower lip outlines drawn as arcs through three
/// waypoints, interior flood-filled when the inner-mouth layer is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToonMouth {
    size: MouthSize,
}

impl ToonMouth {
    /// Mouth with an explicit size envelope.
    pub fn with_size(size: MouthSize) -> Self {
        Self { size }
    }
}

impl FacePart for ToonMouth {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let paint = ctx.paint();
        let f = MouthFrame::compute(rect, ctx);
        let thickness = 4.0;
        let baseline_y = f.center.y - self.size.min_height / 2.0;
        let shape = LipShape::for_expression(f.expression, &self.size, baseline_y, f.open_ratio);
        if shape.width <= 0.0 {
            return;
        }

        let left = Point::new(f.center.x - shape.width / 2.0, baseline_y);
        let right = Point::new(f.center.x + shape.width / 2.0, baseline_y);

        fill_arc_through(
            sketch,
            left,
            right,
            Point::new(f.center.x, shape.upper_lip_y),
            thickness,
            f.color,
            0.0,
        );
        fill_arc_through(
            sketch,
            left,
            right,
            Point::new(f.center.x, shape.lower_lip_y),
            thickness,
            f.color,
            0.0,
        );

        // fill between the lips once they separate far enough to leave an
        // enclosed region
        if shape.lower_lip_y - shape.upper_lip_y > thickness + 2.0
            && let Some(inner) = paint.layer(DrawingLocation::InnerMouth)
        {
            sketch.flood_fill(
                f.center.x,
                0.5 * shape.upper_lip_y + 0.5 * shape.lower_lip_y,
                inner,
            );
        }

        draw_cheeks(sketch, f.center, &paint);
    }
}

/// Single sagging arc whose depth follows the open ratio.
#[derive(Clone, Copy, Debug, Default)]
pub struct UShapeMouth {
    size: MouthSize,
}

impl UShapeMouth {
    /// Mouth with an explicit size envelope.
    pub fn with_size(size: MouthSize) -> Self {
        Self { size }
    }
}

impl FacePart for UShapeMouth {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let f = MouthFrame::compute(rect, ctx);
        if self.size.max_width <= 0.0 {
            return;
        }
        let depth = self.size.height_at(f.open_ratio);
        let baseline_y = f.center.y - self.size.min_height / 2.0 + f.breath * 2.0;
        fill_arc_through(
            sketch,
            Point::new(f.center.x - self.size.max_width / 2.0, baseline_y),
            Point::new(f.center.x + self.size.max_width / 2.0, baseline_y),
            Point::new(f.center.x, baseline_y + depth),
            4.0,
            f.color,
            0.0,
        );
    }
}

/// Fixed doggy muzzle: nose dot, two jowl ellipses and a tongue-colored
/// aperture when open.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoggyMouth {
    size: MouthSize,
}

impl DoggyMouth {
    /// Mouth with an explicit size envelope.
    pub fn with_size(size: MouthSize) -> Self {
        Self { size }
    }
}

impl FacePart for DoggyMouth {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let paint = ctx.paint();
        let f = MouthFrame::compute(rect, ctx);
        let h = self.size.height_at(f.open_ratio);
        let w = self.size.width_at(f.open_ratio);

        if h > self.size.min_height {
            sketch.fill_ellipse(f.center.x, f.center.y, w / 2.0, h / 2.0, f.color);
            let tongue = paint
                .layer(DrawingLocation::Tongue)
                .unwrap_or(Rgb565::RED);
            sketch.fill_ellipse(f.center.x, f.center.y, w / 2.0 - 4.0, h / 2.0 - 4.0, tongue);
            sketch.fill_rect(f.center.x - w / 2.0, f.center.y - h / 2.0, w, h / 2.0, f.skin);
        }

        sketch.fill_ellipse(f.center.x, f.center.y - 15.0, 10.0, 6.0, f.color);
        sketch.fill_ellipse(f.center.x - 28.0, f.center.y, 30.0, 15.0, f.color);
        sketch.fill_ellipse(f.center.x + 28.0, f.center.y, 30.0, 15.0, f.color);
        sketch.fill_ellipse(f.center.x - 29.0, f.center.y - 4.0, 27.0, 15.0, f.skin);
        sketch.fill_ellipse(f.center.x + 29.0, f.center.y - 4.0, 27.0, 15.0, f.skin);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/mouths.rs"]
mod tests;
