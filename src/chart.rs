//! Renders a laid-out timeline as an SVG donut with a legend, or exports the
//! slices, colors and path data as JSON for another renderer.

use std::fmt::Write;

use serde::Serialize;

use crate::arc_path::build_arc_path;
use crate::layout::{Slice, TimelineLayout};
use crate::palette::{ColorMap, PALETTE};
use crate::params::ChartParams;
use crate::timeline::Timeline;

/// Shown in place of the chart when there is nothing to draw.
pub const EMPTY_MESSAGE: &str = "No structured timeline available.";

// Legend text offsets within a row
const LEGEND_PAD: f64 = 16.0;
const TITLE_BASELINE: f64 = 14.0;
const SUB_BASELINE: f64 = 32.0;

#[derive(Debug, Clone, Serialize)]
pub struct PathedSlice {
    #[serde(flatten)]
    pub slice: Slice,
    pub color: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorEntry {
    pub course_id: String,
    pub color: &'static str,
}

/// Everything a renderer needs to draw the donut.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub total_weeks: u32,
    pub slices: Vec<PathedSlice>,
    pub colors: Vec<ColorEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChartExport {
    Empty { empty: bool, message: &'static str },
    Chart(ChartData),
}

// The map is built from the same schedule as the slices, so every course has
// a color.
fn color_of(colors: &ColorMap, course_id: &str) -> &'static str {
    let color = colors.get(course_id);
    debug_assert!(color.is_some(), "no color assigned to course {course_id:?}");
    color.unwrap_or(PALETTE[0])
}

/// Attaches a color and an SVG path to every slice.
pub fn chart_data(layout: &TimelineLayout, total_weeks: u32, params: &ChartParams) -> ChartExport {
    match layout {
        TimelineLayout::Empty => ChartExport::Empty {
            empty: true,
            message: EMPTY_MESSAGE,
        },
        TimelineLayout::Chart { slices, colors } => ChartExport::Chart(ChartData {
            total_weeks,
            slices: slices
                .iter()
                .map(|s| PathedSlice {
                    slice: s.clone(),
                    color: color_of(colors, &s.course_id),
                    path: build_arc_path(
                        params.center,
                        params.outer_radius,
                        params.inner_radius,
                        s.start_angle,
                        s.end_angle,
                    ),
                })
                .collect(),
            colors: colors
                .iter()
                .map(|(course_id, color)| ColorEntry {
                    course_id: course_id.to_string(),
                    color,
                })
                .collect(),
        }),
    }
}

/// Renders the donut and its legend as a standalone SVG document. An empty
/// layout renders the placeholder instead.
pub fn render_svg(layout: &TimelineLayout, timeline: &Timeline, params: &ChartParams) -> String {
    let (slices, colors) = match layout {
        TimelineLayout::Empty => {
            return format!("<div class=\"donut-empty\">{}</div>\n", EMPTY_MESSAGE);
        }
        TimelineLayout::Chart { slices, colors } => (slices, colors),
    };

    let (cx, cy) = params.center;
    let legend_height = timeline.schedule.len() as f64 * params.legend_row_height + 2. * LEGEND_PAD;
    let width = params.view_size + params.legend_width;
    let height = params.view_size.max(legend_height);

    // Writing into a String cannot fail, so results are discarded below.
    let mut svg = String::with_capacity(256 * (slices.len() + timeline.schedule.len() + 4));
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    );

    let _ = writeln!(svg, r#"  <g class="donut">"#);
    for (i, slice) in slices.iter().enumerate() {
        let d = build_arc_path(
            params.center,
            params.outer_radius,
            params.inner_radius,
            slice.start_angle,
            slice.end_angle,
        );
        let _ = writeln!(
            svg,
            r#"    <path id="{}-{}" d="{}" fill="{}" stroke="{}" stroke-width="{}"><title>{}</title></path>"#,
            escape(&slice.course_id),
            i,
            d,
            color_of(colors, &slice.course_id),
            params.stroke_color,
            params.stroke_width,
            escape(&slice.title),
        );
    }
    let _ = writeln!(
        svg,
        r#"    <circle cx="{cx}" cy="{cy}" r="{}" fill="{}"/>"#,
        params.inner_radius, params.hole_color
    );
    let _ = writeln!(
        svg,
        r#"    <text x="{cx}" y="{}" text-anchor="middle" font-size="2.9em" font-weight="900" fill="{}">{}</text>"#,
        cy - 10.,
        params.label_color,
        timeline.weeks
    );
    let _ = writeln!(
        svg,
        r#"    <text x="{cx}" y="{}" text-anchor="middle" font-size="1.13em" font-weight="800" fill="{}">Total weeks</text>"#,
        cy + 18.,
        params.caption_color
    );
    let _ = writeln!(svg, "  </g>");

    let _ = writeln!(svg, r#"  <g class="donut-legend">"#);
    let x = params.view_size + LEGEND_PAD;
    for (row, entry) in timeline.schedule.iter().enumerate() {
        let y = LEGEND_PAD + row as f64 * params.legend_row_height;
        let _ = writeln!(
            svg,
            r#"    <rect x="{x}" y="{y}" width="{s}" height="{s}" rx="4" fill="{}"/>"#,
            color_of(colors, &entry.course_id),
            s = params.swatch_size,
        );
        let text_x = x + params.swatch_size + 10.;
        let _ = writeln!(
            svg,
            r#"    <text x="{text_x}" y="{}" font-weight="700">{}</text>"#,
            y + TITLE_BASELINE,
            escape(&entry.title)
        );
        let _ = writeln!(
            svg,
            r#"    <text x="{text_x}" y="{}" font-size="0.85em">{} — {} Weeks</text>"#,
            y + SUB_BASELINE,
            escape(&entry.difficulty),
            entry.weeks_count()
        );
    }
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
