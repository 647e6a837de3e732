// Sweeps this close to a full turn are treated as one.
pub const FULL_TURN_EPS: f64 = 1e-9;

/// Represent a sector of a polar graph (start / end angle, in degrees, measured clockwise on screen from the
/// positive x axis since SVG's y axis points down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarSector {
  pub start: f64,
  pub end: f64,
}

impl PolarSector {
  /// Constructs a polar sector between two angles.
  pub fn new(start: f64, end: f64) -> PolarSector {
    PolarSector { start, end }
  }

  /// Angular extent of this sector.
  pub fn sweep(&self) -> f64 {
    self.end - self.start
  }

  /// Whether the sector covers the whole circle (within `FULL_TURN_EPS`).
  pub fn is_full(&self) -> bool {
    self.sweep() >= 360. - FULL_TURN_EPS
  }

  /// Angle halfway between start and end.
  pub fn mid(&self) -> f64 {
    self.start + self.sweep() / 2.
  }

  /// Whether an arc over this sector needs SVG's large-arc flag.
  pub fn is_large(&self) -> bool {
    self.sweep() > 180.
  }

  /// Point at `radius` from `center` on the start edge.
  pub fn start_point(&self, center: (f64, f64), radius: f64) -> (f64, f64) {
    polar_to_cartesian(center, radius, self.start)
  }

  /// Point at `radius` from `center` on the end edge.
  pub fn end_point(&self, center: (f64, f64), radius: f64) -> (f64, f64) {
    polar_to_cartesian(center, radius, self.end)
  }
}

pub fn polar_to_cartesian(center: (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
  let theta = degrees.to_radians();
  (center.0 + radius * theta.cos(), center.1 + radius * theta.sin())
}
