use kurbo::Point;

use crate::foundation::core::Rgb565;

/// Canvas capability set consumed by the face-part renderers.
///
/// The display driver implements this for its target surface. Coordinates are
/// pixel positions; the driver may truncate to integers. Arc angles are in
/// **degrees** (the geometry kernel converts from radians at this seam), with
/// the band between `r_inner` and `r_outer` drawn or filled.
///
/// Renderers assume exclusive access to the surface for the duration of one
/// frame's draw pass; none of the methods can fail.
pub trait Sketch {
    /// Fill the triangle `a`-`b`-`c`.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb565);

    /// Fill an axis-aligned rectangle from its top-left corner.
    fn fill_rect(&mut self, left: f64, top: f64, width: f64, height: f64, color: Rgb565);

    /// Fill an axis-aligned ellipse centered at `(cx, cy)` with radii
    /// `(rx, ry)`.
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Rgb565);

    /// Fill a circle centered at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb565);

    /// Outline a circle centered at `(cx, cy)`.
    fn draw_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb565);

    /// Outline the arc band between `r_inner` and `r_outer` sweeping from
    /// `start_deg` to `end_deg`.
    fn draw_arc(
        &mut self,
        cx: f64,
        cy: f64,
        r_outer: f64,
        r_inner: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgb565,
    );

    /// Fill the arc band between `r_inner` and `r_outer` sweeping from
    /// `start_deg` to `end_deg`.
    fn fill_arc(
        &mut self,
        cx: f64,
        cy: f64,
        r_outer: f64,
        r_inner: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgb565,
    );

    /// Flood-fill the region connected to `(x, y)` with `color`.
    fn flood_fill(&mut self, x: f64, y: f64, color: Rgb565);
}
