//! SVG path data for donut segments.

use std::fmt::Write;

use crate::polar_sector::PolarSector;

/// Builds a closed donut-segment outline between `start_angle` and
/// `end_angle` (degrees), bounded by `outer_radius` and `inner_radius`.
///
/// The outline runs along the outer arc in the positive sweep direction, drops
/// to the inner radius, returns along the inner arc in the negative direction
/// and closes back at the outer start point. A full turn is drawn as two half
/// arcs per ring, since an SVG arc whose endpoints coincide is not drawn.
pub fn build_arc_path(
    center: (f64, f64),
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let sector = PolarSector::new(start_angle, end_angle);
    let (x0, y0) = sector.start_point(center, outer_radius);
    let (x1, y1) = sector.end_point(center, outer_radius);
    let (x2, y2) = sector.end_point(center, inner_radius);
    let (x3, y3) = sector.start_point(center, inner_radius);
    let (ro, ri) = (outer_radius, inner_radius);

    let mut d = String::with_capacity(192);
    // Writing into a String cannot fail.
    if sector.is_full() {
        let mid = PolarSector::new(sector.start, sector.mid());
        let (xm, ym) = mid.end_point(center, outer_radius);
        let (xn, yn) = mid.end_point(center, inner_radius);
        let _ = write!(
            d,
            "M{x0},{y0} A{ro},{ro} 0 0 1 {xm},{ym} A{ro},{ro} 0 0 1 {x1},{y1} L{x2},{y2} \
             A{ri},{ri} 0 0 0 {xn},{yn} A{ri},{ri} 0 0 0 {x3},{y3} Z",
        );
    } else {
        let large_arc = if sector.is_large() { 1 } else { 0 };
        let _ = write!(
            d,
            "M{x0},{y0} A{ro},{ro} 0 {large_arc} 1 {x1},{y1} L{x2},{y2} A{ri},{ri} 0 {large_arc} 0 {x3},{y3} Z",
        );
    }
    d
}
