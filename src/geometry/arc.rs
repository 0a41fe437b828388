use std::f64::consts::PI;

use kurbo::Point;

use crate::foundation::core::Rgb565;
use crate::sketch::Sketch;

/// Guard added to the shared circumcircle denominator so near-collinear
/// waypoints divide by a tiny value instead of zero.
const DENOMINATOR_EPSILON: f64 = 1.0e-9;

/// Compute the circle passing through three waypoints, returning
/// `(radius, center)`.
///
/// Closed-form determinant solution. The shared denominator is guarded with a
/// small epsilon, so collinear input does not divide by zero; near-collinear
/// waypoints still produce a huge, numerically unstable radius. The radius is
/// always returned non-negative.
pub fn circumcircle(p1: Point, p2: Point, p3: Point) -> (f64, Point) {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);

    let denom =
        2.0 * (x1 * y2 - x1 * y3 - x2 * y1 + x2 * y3 + x3 * y1 - x3 * y2) + DENOMINATOR_EPSILON;

    let d12 = (x1 - x2).powi(2) + (y1 - y2).powi(2);
    let d13 = (x1 - x3).powi(2) + (y1 - y3).powi(2);
    let d23 = (x2 - x3).powi(2) + (y2 - y3).powi(2);
    let r = (d12 * d13 * d23).sqrt() / denom;

    let cx = (x1 * x1 * y2 - x1 * x1 * y3 - x2 * x2 * y1 + x2 * x2 * y3 + x3 * x3 * y1
        - x3 * x3 * y2
        + y1 * y1 * y2
        - y1 * y1 * y3
        - y1 * y2 * y2
        + y1 * y3 * y3
        + y2 * y2 * y3
        - y2 * y3 * y3)
        / denom;

    let cy = -(x1 * x1 * x2 - x1 * x1 * x3 - x1 * x2 * x2 + x1 * x3 * x3 - x1 * y2 * y2
        + x1 * y3 * y3
        + x2 * x2 * x3
        - x2 * x3 * x3
        + x2 * y1 * y1
        - x2 * y3 * y3
        - x3 * y1 * y1
        + x3 * y2 * y2)
        / denom;

    (r.abs(), Point::new(cx, cy))
}

/// Polar angles (radians, normalized to `[0, 2*pi)`) of two arc endpoints and
/// the via-point, measured from the circle center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcAngles {
    /// Smaller of the two endpoint angles.
    pub min: f64,
    /// Larger of the two endpoint angles.
    pub max: f64,
    /// Angle of the via-point the arc must pass through.
    pub via: f64,
}

impl ArcAngles {
    /// The `(start, end)` sweep in degrees whose range contains the
    /// via-point.
    ///
    /// Of the two arcs between the endpoints, this picks the one actually
    /// passing through the via-point: a via-angle inside `[min, max)` sweeps
    /// min to max, anything else sweeps max around through zero back to min.
    pub fn span_deg(self) -> (f64, f64) {
        if self.min <= self.via && self.via < self.max {
            (self.min.to_degrees(), self.max.to_degrees())
        } else {
            (self.max.to_degrees(), self.min.to_degrees())
        }
    }
}

/// Angle of `p` around `center`, normalized to `[0, 2*pi)`.
fn polar_angle(p: Point, center: Point) -> f64 {
    let a = (p.y - center.y).atan2(p.x - center.x);
    if a < 0.0 { 2.0 * PI + a } else { a }
}

/// Compute the normalized polar angles of two arc endpoints and a via-point
/// relative to the circle `center`.
pub fn arc_angles(p1: Point, p2: Point, via: Point, center: Point) -> ArcAngles {
    let a1 = polar_angle(p1, center);
    let a2 = polar_angle(p2, center);
    ArcAngles {
        min: a1.min(a2),
        max: a1.max(a2),
        via: polar_angle(via, center),
    }
}

/// Outline the full circle passing through three waypoints.
pub fn draw_circle_through(sketch: &mut dyn Sketch, p1: Point, p2: Point, p3: Point, color: Rgb565) {
    let (r, center) = circumcircle(p1, p2, p3);
    sketch.draw_circle(center.x, center.y, r, color);
}

/// Outline the arc from `p1` to `p2` passing through `via`.
///
/// `thickness` is applied as +/- half around the computed radius; `offset`
/// shifts the whole band radially outward.
pub fn draw_arc_through(
    sketch: &mut dyn Sketch,
    p1: Point,
    p2: Point,
    via: Point,
    thickness: f64,
    color: Rgb565,
    offset: f64,
) {
    let (r, center) = circumcircle(p1, p2, via);
    let (start, end) = arc_angles(p1, p2, via, center).span_deg();
    sketch.draw_arc(
        center.x,
        center.y,
        r + offset + thickness / 2.0,
        r + offset - thickness / 2.0,
        start,
        end,
        color,
    );
}

/// Fill the arc band from `p1` to `p2` passing through `via`.
///
/// Same radius/offset semantics as [`draw_arc_through`], with a filled arc
/// primitive.
pub fn fill_arc_through(
    sketch: &mut dyn Sketch,
    p1: Point,
    p2: Point,
    via: Point,
    thickness: f64,
    color: Rgb565,
    offset: f64,
) {
    let (r, center) = circumcircle(p1, p2, via);
    let (start, end) = arc_angles(p1, p2, via, center).span_deg();
    sketch.fill_arc(
        center.x,
        center.y,
        r + offset + thickness / 2.0,
        r + offset - thickness / 2.0,
        start,
        end,
        color,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
