use std::fmt::Display;

use lazy_static::lazy_static;

lazy_static! {
  pub static ref DEFAULT_PARAMS: ChartParams = ChartParams {
    // Spacing between adjacent weeks of one course
    gap_degrees: 1.5,
    // 12 o'clock
    start_angle: -90.0,

    // Square view box, donut centered in it
    view_size: 320.0,
    center: (160.0, 160.0),
    outer_radius: 120.0,
    inner_radius: 70.0,

    stroke_color: "#22243c",
    stroke_width: 1.7,
    hole_color: "#181837",
    label_color: "#ecedfc",
    caption_color: "#cce0ff",

    // Legend sits to the right of the donut
    legend_width: 280.0,
    legend_row_height: 44.0,
    swatch_size: 18.0,

    // Mismatched week sums are rendered best-effort unless strict
    strict: false,
  };
}

/// Chart geometry and rendering parameters.
#[derive(Copy, Clone, Debug)]
pub struct ChartParams {
    /// Angular gap (degrees) inserted between consecutive week slices of the
    /// same course
    pub gap_degrees: f64,
    /// Angle (degrees) at which the first slice starts
    pub start_angle: f64,

    /// Width and height of the donut's view box
    pub view_size: f64,
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_radius: f64,

    pub stroke_color: &'static str,
    pub stroke_width: f64,
    /// Fill of the donut hole
    pub hole_color: &'static str,
    /// Colors of the total-weeks label and its caption
    pub label_color: &'static str,
    pub caption_color: &'static str,

    pub legend_width: f64,
    pub legend_row_height: f64,
    pub swatch_size: f64,

    /// Reject schedules whose week counts do not sum to the timeline total.
    pub strict: bool,
}

impl Display for ChartParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== Chart Parameters =====")?;
        writeln!(f, "\t - gap_degrees (gap between week slices): {}", self.gap_degrees)?;
        writeln!(f, "\t - start_angle (first slice angle): {}", self.start_angle)?;
        writeln!(
            f,
            "\t - center / radii: ({}, {}) outer {} inner {}",
            self.center.0, self.center.1, self.outer_radius, self.inner_radius
        )?;
        writeln!(f, "\t - view_size: {}", self.view_size)?;
        writeln!(
            f,
            "\t - stroke: {} ({}), hole: {}",
            self.stroke_color, self.stroke_width, self.hole_color
        )?;
        writeln!(f, "\t - strict (reject week count mismatch): {}", self.strict)
    }
}
