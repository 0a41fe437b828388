use kurbo::Point;

use crate::foundation::core::Rgb565;
use crate::sketch::Sketch;

/// Rotate `p` about the origin by `angle` radians (standard 2D rotation
/// matrix, counter-clockwise in a y-down pixel space means visually
/// clockwise).
pub fn rotate_point(p: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Rotate `p` about `pivot`: translate to the origin, rotate, translate back.
pub fn rotate_point_around(p: Point, angle: f64, pivot: Point) -> Point {
    let local = rotate_point(Point::new(p.x - pivot.x, p.y - pivot.y), angle);
    Point::new(local.x + pivot.x, local.y + pivot.y)
}

/// Fill a `width` x `height` rectangle centered at `center`, rotated by
/// `angle` around its own center.
///
/// The canvas is not assumed to have a rotated-rect primitive: the four
/// corners are rotated individually and the quad is filled as two triangles
/// split along one diagonal. A zero-size rectangle fills zero pixels.
pub fn fill_rotated_rect(
    sketch: &mut dyn Sketch,
    center: Point,
    width: f64,
    height: f64,
    angle: f64,
    color: Rgb565,
) {
    let top_left = Point::new(center.x - width / 2.0, center.y - height / 2.0);
    let bottom_right = Point::new(center.x + width / 2.0, center.y + height / 2.0);
    fill_rect_rotated_around(sketch, top_left, bottom_right, angle, center, color);
}

/// Fill the axis-aligned box spanned by `top_left` and `bottom_right`,
/// rotated by `angle` around an arbitrary `pivot`.
pub fn fill_rect_rotated_around(
    sketch: &mut dyn Sketch,
    top_left: Point,
    bottom_right: Point,
    angle: f64,
    pivot: Point,
    color: Rgb565,
) {
    let top_right = Point::new(bottom_right.x, top_left.y);
    let bottom_left = Point::new(top_left.x, bottom_right.y);

    let tl = rotate_point_around(top_left, angle, pivot);
    let tr = rotate_point_around(top_right, angle, pivot);
    let bl = rotate_point_around(bottom_left, angle, pivot);
    let br = rotate_point_around(bottom_right, angle, pivot);

    // split along the tl-br diagonal
    sketch.fill_triangle(tl, tr, br, color);
    sketch.fill_triangle(tl, br, bl, color);
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotate.rs"]
mod tests;
