use std::f64::consts::PI;

use kurbo::{Point, Rect};

use crate::foundation::core::{Expression, Rgb565, Side, clamp01};
use crate::geometry::arc::fill_arc_through;
use crate::geometry::rotate::{fill_rect_rotated_around, rotate_point_around};
use crate::palette::{DrawingLocation, Paint};
use crate::parts::FacePart;
use crate::sketch::Sketch;
use crate::state::FaceContext;

/// Open ratio below which the iris stack is skipped and only the closed-eye
/// fast path draws.
pub const OPEN_EYE_THRESHOLD: f64 = 0.1;

/// Iris offset in pixels per unit of horizontal gaze.
const GAZE_OFFSET_X: f64 = 4.0;
/// Iris offset in pixels per unit of vertical gaze.
const GAZE_OFFSET_Y: f64 = 2.0;

/// Per-draw-call intermediates shared by every eye variant.
///
/// Recomputed from the bounding rect and context at the top of each draw
/// call; never stored on a renderer.
struct EyeFrame {
    center: Point,
    iris: Point,
    open_ratio: f64,
    expression: Expression,
    sclera: Rgb565,
    skin: Rgb565,
}

impl EyeFrame {
    fn compute(side: Side, rect: Rect, ctx: &dyn FaceContext) -> Self {
        let paint = ctx.paint();
        let center = rect.center();
        let gaze = ctx.gaze(side);
        Self {
            center,
            iris: Point::new(
                center.x + gaze.horizontal * GAZE_OFFSET_X,
                center.y + gaze.vertical * GAZE_OFFSET_Y,
            ),
            open_ratio: clamp01(ctx.eye_open_ratio(side)),
            expression: ctx.expression(),
            sclera: paint.foreground(DrawingLocation::Sclera),
            skin: paint.background(DrawingLocation::Skin),
        }
    }
}

/// Upper-eyelid tilt for the current expression, mirrored by side.
///
/// `reference` is the full-open tilt magnitude; the tilt fades out as the eye
/// closes.
fn eyelid_tilt(expression: Expression, side: Side, open_ratio: f64, reference: f64) -> f64 {
    let tilt = open_ratio * reference;
    match expression {
        Expression::Angry => -side.sign() * tilt,
        Expression::Sad => side.sign() * tilt,
        _ => 0.0,
    }
}

/// Simple elliptic eye: filled sclera ellipse with triangle/rect expression
/// masks, a thin bar when closed and a wink arc for [`Expression::Happy`].
#[derive(Clone, Copy, Debug)]
pub struct EllipseEye {
    width: f64,
    height: f64,
    side: Side,
}

impl EllipseEye {
    /// Eye with the standard 36x70 size.
    pub fn new(side: Side) -> Self {
        Self::with_size(36.0, 70.0, side)
    }

    /// Eye with an explicit size.
    pub fn with_size(width: f64, height: f64, side: Side) -> Self {
        Self {
            width,
            height,
            side,
        }
    }
}

impl FacePart for EllipseEye {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let f = EyeFrame::compute(self.side, rect, ctx);
        let (w, h) = (self.width, self.height);

        if f.open_ratio == 0.0 || f.expression == Expression::Sleepy {
            // the center of a closed eye sits below the bbox center
            sketch.fill_rect(f.iris.x - w / 2.0, f.iris.y - 2.0 + h / 4.0, w, 4.0, f.sclera);
            return;
        }

        if f.expression == Expression::Happy {
            let wink_base_y = f.iris.y + h / 4.0;
            let thickness = 4.0;
            sketch.fill_ellipse(
                f.iris.x,
                wink_base_y + h / 8.0,
                w / 2.0,
                h / 4.0 + thickness,
                f.sclera,
            );
            // mask the lower lobe so only the upper wink arc stays
            sketch.fill_ellipse(
                f.iris.x,
                wink_base_y + h / 8.0 + thickness,
                w / 2.0 - thickness,
                h / 4.0 + thickness,
                f.skin,
            );
            sketch.fill_rect(
                f.iris.x - w / 2.0,
                wink_base_y + thickness / 2.0,
                w + 1.0,
                h / 4.0 + 1.0,
                f.skin,
            );
            return;
        }

        sketch.fill_ellipse(f.iris.x, f.iris.y, w / 2.0, h / 2.0, f.sclera);

        match f.expression {
            Expression::Angry => {
                let a = Point::new(f.iris.x - w / 2.0, f.iris.y - h / 2.0);
                let b = Point::new(f.iris.x + w / 2.0, f.iris.y - h / 2.0);
                // the mask cuts down toward the nose side
                let c = Point::new(f.iris.x - self.side.sign() * w / 2.0, f.iris.y - h / 4.0);
                sketch.fill_triangle(a, b, c, f.skin);
            }
            Expression::Sad => {
                let a = Point::new(f.iris.x - w / 2.0, f.iris.y - h / 2.0);
                let b = Point::new(f.iris.x + w / 2.0, f.iris.y - h / 2.0);
                let c = Point::new(f.iris.x + self.side.sign() * w / 2.0, f.iris.y - h / 4.0);
                sketch.fill_triangle(a, b, c, f.skin);
            }
            Expression::Doubt => {
                sketch.fill_rect(
                    f.iris.x - w / 2.0,
                    f.iris.y - h / 2.0,
                    w,
                    h / 4.0,
                    f.skin,
                );
            }
            _ => {}
        }
    }
}

/// Toon-styled eye: layered iris rings, pupil and highlight under an eyelid
/// arc with an eyelash triangle, both computed from rotated waypoints.
#[derive(Clone, Copy, Debug)]
pub struct ToonEye {
    width: f64,
    height: f64,
    side: Side,
}

struct EyelidWaypoints {
    medial: Point,
    peak: Point,
    lateral: Point,
}

struct EyelashWaypoints {
    tip: Point,
    bottom: Point,
    medial: Point,
}

impl ToonEye {
    /// Eye with the standard 36x70 size.
    pub fn new(side: Side) -> Self {
        Self::with_size(36.0, 70.0, side)
    }

    /// Eye with an explicit size.
    pub fn with_size(width: f64, height: f64, side: Side) -> Self {
        Self {
            width,
            height,
            side,
        }
    }

    /// Expression override applied before drawing: Doubt caps the aperture,
    /// Sleepy and Happy close the eye entirely.
    fn overwritten_open_ratio(expression: Expression, open_ratio: f64) -> f64 {
        match expression {
            Expression::Doubt => open_ratio.min(0.6),
            Expression::Sleepy => 0.0,
            Expression::Happy => 0.0, // close strongly
            _ => open_ratio,
        }
    }

    fn eyelid_waypoints(&self, center_x: f64, width: f64, height: f64, bottom_y: f64) -> EyelidWaypoints {
        let sign = self.side.sign();
        EyelidWaypoints {
            medial: Point::new(center_x - sign * width / 2.0, bottom_y),
            peak: Point::new(center_x, bottom_y - height),
            lateral: Point::new(center_x + sign * width / 2.0, bottom_y),
        }
    }

    fn eyelash_waypoints(
        &self,
        lash_width: f64,
        lash_height: f64,
        eyelid_lateral_x: f64,
        eyelid_bottom_y: f64,
        eyelid_width: f64,
        eyelid_height: f64,
    ) -> EyelashWaypoints {
        let sign = self.side.sign();
        // slope of the lid arc near its lateral end
        let grad = eyelid_height / (eyelid_width / 2.0);

        let bottom = Point::new(
            eyelid_lateral_x - sign * (lash_width * 0.25),
            eyelid_bottom_y - grad * (lash_width * 0.255),
        );
        let tip = Point::new(
            eyelid_lateral_x - sign * (self.width * 0.05),
            bottom.y - lash_height,
        );
        let medial = Point::new(
            tip.x - sign * lash_width,
            bottom.y - grad * (lash_width * 1.05),
        );
        EyelashWaypoints {
            tip,
            bottom,
            medial,
        }
    }

    fn draw_eyelid(&self, sketch: &mut dyn Sketch, f: &EyeFrame, paint: &Paint<'_>) {
        let Some(eyelid_color) = paint.layer(DrawingLocation::Eyelid) else {
            return;
        };
        let thickness = 4.0;

        let eyelid_bottom_y =
            f.center.y - 0.65 * self.height / 2.0 + (1.0 - f.open_ratio) * self.height * 0.6;
        let eyelid_width = self.width;
        let mut eyelid_height = 0.1 * self.height * f.open_ratio + 1.0; // must stay > 0
        if f.expression == Expression::Happy {
            eyelid_height += self.height / 8.0;
        }

        let lid = self.eyelid_waypoints(f.center.x, eyelid_width, eyelid_height, eyelid_bottom_y);

        let lash_width = 0.25 * self.width;
        let lash_height = lash_width;
        let lash = self.eyelash_waypoints(
            lash_width,
            lash_height,
            lid.lateral.x,
            eyelid_bottom_y,
            eyelid_width,
            eyelid_height,
        );

        let tilt = eyelid_tilt(f.expression, self.side, f.open_ratio, PI / 12.0);
        let pivot = Point::new(f.center.x, eyelid_bottom_y);

        let medial = rotate_point_around(lid.medial, tilt, pivot);
        let peak = rotate_point_around(lid.peak, tilt, pivot);
        let lateral = rotate_point_around(lid.lateral, tilt, pivot);

        // erase the band above the lid, clamped to the headroom left inside
        // the bounding box
        let headroom = eyelid_bottom_y - (f.center.y - self.height / 2.0);
        let mask_height = lash_height.min(headroom).max(0.0);
        let mask_offset = mask_height / 2.0;
        fill_arc_through(sketch, medial, lateral, peak, mask_height, f.skin, mask_offset);

        // lid arc itself
        fill_arc_through(sketch, medial, lateral, peak, thickness, eyelid_color, 0.0);

        let Some(lash_color) = paint.layer(DrawingLocation::Eyelash) else {
            return;
        };
        let tip = rotate_point_around(lash.tip, tilt, pivot);
        let lash_medial = rotate_point_around(lash.medial, tilt, pivot);
        let bottom = rotate_point_around(lash.bottom, tilt, pivot);
        sketch.fill_triangle(tip, lash_medial, bottom, lash_color);
    }
}

impl FacePart for ToonEye {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let paint = ctx.paint();
        let mut f = EyeFrame::compute(self.side, rect, ctx);
        f.open_ratio = Self::overwritten_open_ratio(f.expression, f.open_ratio);

        let (w, h) = (self.width, self.height);
        let thickness = 4.0;

        if f.open_ratio > OPEN_EYE_THRESHOLD {
            sketch.fill_ellipse(f.iris.x, f.iris.y, w / 2.0, h / 2.0, f.sclera);

            if let Some(color) = paint.layer(DrawingLocation::Iris1) {
                sketch.fill_ellipse(
                    f.iris.x,
                    f.iris.y,
                    w / 2.0 - thickness,
                    h / 2.0 - thickness,
                    color,
                );
            }
            if let Some(color) = paint.layer(DrawingLocation::Iris2) {
                // seed a one-pixel line across the equator, then fill the
                // lower half moon from just below it
                sketch.fill_rect(
                    f.iris.x - w / 2.0 + thickness,
                    f.iris.y,
                    w - 2.0 * thickness + 1.0,
                    1.0,
                    color,
                );
                sketch.flood_fill(f.iris.x, f.iris.y + 2.0, color);
            }
            if let Some(color) = paint.layer(DrawingLocation::Pupil) {
                sketch.fill_ellipse(f.iris.x, f.iris.y, w / 4.0, h / 4.0, color);
            }
            if let Some(color) = paint.layer(DrawingLocation::EyeHighlight) {
                sketch.fill_circle(
                    f.iris.x - w / 6.0,
                    f.iris.y - h / 6.0,
                    (w / 8.0).min(h / 8.0),
                    color,
                );
            }
        }

        self.draw_eyelid(sketch, &f, &paint);
    }
}

/// Glossy accent-colored eye with a straight, tiltable rect eyelid.
#[derive(Clone, Copy, Debug)]
pub struct PinkDemonEye {
    width: f64,
    height: f64,
    side: Side,
}

impl PinkDemonEye {
    /// Eye with the standard 36x70 size.
    pub fn new(side: Side) -> Self {
        Self::with_size(36.0, 70.0, side)
    }

    /// Eye with an explicit size.
    pub fn with_size(width: f64, height: f64, side: Side) -> Self {
        Self {
            width,
            height,
            side,
        }
    }

    fn overwritten_open_ratio(expression: Expression, open_ratio: f64) -> f64 {
        match expression {
            Expression::Doubt => 0.6,
            Expression::Sleepy => 0.0,
            _ => open_ratio,
        }
    }

    fn draw_eyelid(&self, sketch: &mut dyn Sketch, f: &EyeFrame, paint: &Paint<'_>) {
        let (w, h) = (self.width, self.height);
        let upper_eyelid_y = f.iris.y - 0.8 * h / 2.0 + (1.0 - f.open_ratio) * h * 0.6;
        let sign = self.side.sign();

        let tilt = eyelid_tilt(f.expression, self.side, f.open_ratio, PI / 6.0);
        let pivot = Point::new(f.iris.x, upper_eyelid_y);

        if f.open_ratio < 0.99 || tilt.abs() > 0.1 {
            // erase everything above the lid line
            fill_rect_rotated_around(
                sketch,
                Point::new(f.iris.x - w / 2.0, f.iris.y - 0.75 * h),
                Point::new(f.iris.x + w / 2.0, upper_eyelid_y),
                tilt,
                pivot,
                f.skin,
            );
            // the lid band itself
            fill_rect_rotated_around(
                sketch,
                Point::new(f.iris.x - w / 2.0, upper_eyelid_y - 4.0),
                Point::new(f.iris.x + w / 2.0, upper_eyelid_y),
                tilt,
                pivot,
                f.sclera,
            );
        }

        if let Some(lash_color) = paint.layer(DrawingLocation::Eyelash) {
            let tip = rotate_point_around(
                Point::new(f.iris.x + sign * 22.0, upper_eyelid_y - 27.0),
                tilt,
                pivot,
            );
            let lateral = rotate_point_around(
                Point::new(f.iris.x + sign * 26.0, upper_eyelid_y),
                tilt,
                pivot,
            );
            let medial = rotate_point_around(
                Point::new(f.iris.x - sign * 10.0, upper_eyelid_y),
                tilt,
                pivot,
            );
            sketch.fill_triangle(tip, lateral, medial, lash_color);
        }
    }
}

impl FacePart for PinkDemonEye {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let paint = ctx.paint();
        let mut f = EyeFrame::compute(self.side, rect, ctx);
        f.open_ratio = Self::overwritten_open_ratio(f.expression, f.open_ratio);

        let (w, h) = (self.width, self.height);
        let thickness = 8.0;

        if f.open_ratio > OPEN_EYE_THRESHOLD {
            sketch.fill_ellipse(f.iris.x, f.iris.y, w / 2.0, h / 2.0, f.sclera);
            let accent = Rgb565::from_rgb888(0x00, 0xA1, 0xFF);
            sketch.fill_ellipse(
                f.iris.x,
                f.iris.y,
                w / 2.0 - thickness,
                h / 2.0 - thickness,
                accent,
            );
            // upper lobe
            let (w1, h1) = (w * 0.92, h * 0.69);
            sketch.fill_ellipse(
                f.iris.x,
                f.iris.y - h / 2.0 + h1 / 2.0,
                w1 / 2.0,
                h1 / 2.0,
                f.sclera,
            );
            // highlight
            let (w2, h2) = (w * 0.577, h * 0.4);
            sketch.fill_ellipse(
                f.iris.x,
                f.iris.y - h / 2.0 + thickness + h2 / 2.0,
                w2 / 2.0,
                h2 / 2.0,
                Rgb565::WHITE,
            );
        }

        self.draw_eyelid(sketch, &f, &paint);
    }
}

/// Fixed-size simplified doggy eye.
#[derive(Clone, Copy, Debug)]
pub struct DoggyEye {
    side: Side,
}

impl DoggyEye {
    /// Doggy eye for `side`.
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl FacePart for DoggyEye {
    fn draw(&self, sketch: &mut dyn Sketch, rect: Rect, ctx: &dyn FaceContext) {
        let f = EyeFrame::compute(self.side, rect, ctx);

        if f.open_ratio == 0.0 {
            sketch.fill_rect(f.center.x - 15.0, f.center.y - 2.0, 30.0, 4.0, f.sclera);
            return;
        }
        sketch.fill_ellipse(f.center.x, f.center.y, 30.0, 25.0, f.sclera);
        sketch.fill_ellipse(f.center.x, f.center.y, 28.0, 23.0, f.skin);

        sketch.fill_ellipse(f.iris.x, f.iris.y, 18.0, 18.0, f.sclera);
        sketch.fill_ellipse(f.iris.x - 3.0, f.iris.y - 3.0, 3.0, 3.0, f.skin);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parts/eyes.rs"]
mod tests;
