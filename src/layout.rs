use serde::Serialize;

use crate::error::TimelineError;
use crate::palette::ColorMap;
use crate::params::ChartParams;
use crate::timeline::{ScheduleEntry, Timeline};

/// One week of one course on the donut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub course_id: String,
    pub title: String,
    pub difficulty: String,
    /// Degrees
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Result of laying out a timeline: either nothing to draw, or the slices and
/// the colors to draw them with.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineLayout {
    Empty,
    Chart { slices: Vec<Slice>, colors: ColorMap },
}

impl TimelineLayout {
    /// Lays out `timeline`, short-circuiting to `Empty` when it has no weeks
    /// or no courses.
    pub fn compute(timeline: &Timeline, params: &ChartParams) -> Result<TimelineLayout, TimelineError> {
        if timeline.is_empty() {
            log::info!(
                "Nothing to lay out ({} weeks, {} courses)",
                timeline.weeks,
                timeline.schedule.len()
            );
            return Ok(TimelineLayout::Empty);
        }
        let slices = layout(&timeline.schedule, timeline.weeks, params)?;
        let colors = ColorMap::assign(&timeline.schedule);
        Ok(TimelineLayout::Chart { slices, colors })
    }
}

/// Checks every entry and the week total before any geometry is computed,
/// returning the number of weeks actually scheduled. The whole schedule is
/// rejected on the first bad entry.
pub fn validate(schedule: &[ScheduleEntry], total_weeks: u32, params: &ChartParams) -> Result<u64, TimelineError> {
    if total_weeks == 0 {
        return Err(TimelineError::NoWeeks);
    }
    for (index, entry) in schedule.iter().enumerate() {
        if entry.start_week == 0 {
            return Err(TimelineError::InvalidScheduleEntry {
                index,
                course_id: entry.course_id.clone(),
                reason: "weeks are numbered from 1".to_string(),
            });
        }
        let weeks = entry.weeks_count();
        if weeks < 1 {
            return Err(TimelineError::InvalidScheduleEntry {
                index,
                course_id: entry.course_id.clone(),
                reason: format!("ends in week {} before it starts in week {}", entry.end_week, entry.start_week),
            });
        }
        let slice_degrees = slice_degrees(weeks as u32, total_weeks, params.gap_degrees);
        // NaN here means a non-finite gap.
        if slice_degrees.is_nan() || slice_degrees <= 0. {
            return Err(TimelineError::SliceTooNarrow {
                index,
                course_id: entry.course_id.clone(),
                weeks: weeks as u32,
                slice_degrees,
            });
        }
    }

    let scheduled: u64 = schedule.iter().map(|s| s.weeks_count() as u64).sum();
    if scheduled != total_weeks as u64 {
        if params.strict {
            return Err(TimelineError::WeekCountMismatch {
                expected: total_weeks as u64,
                actual: scheduled,
            });
        }
        log::warn!(
            "Schedule covers {} week(s) but the timeline declares {}; slices will not close the circle",
            scheduled,
            total_weeks
        );
    }
    Ok(scheduled)
}

/// Angular share of a course spanning `weeks` out of `total_weeks`.
pub fn total_degrees(weeks: u32, total_weeks: u32) -> f64 {
    360. * (weeks as f64 / total_weeks as f64)
}

/// Width of each of a course's week slices once the gaps between them are
/// taken out of its share.
pub fn slice_degrees(weeks: u32, total_weeks: u32, gap_degrees: f64) -> f64 {
    (total_degrees(weeks, total_weeks) - gap_degrees * (weeks as f64 - 1.)) / weeks as f64
}

/// Splits every course into one slice per week, walking clockwise from
/// `params.start_angle`. Courses follow each other with no gap; weeks within
/// a course are separated by `params.gap_degrees`.
///
/// `total_weeks` must be non-zero; use [`TimelineLayout::compute`] for input
/// that may be empty.
pub fn layout(schedule: &[ScheduleEntry], total_weeks: u32, params: &ChartParams) -> Result<Vec<Slice>, TimelineError> {
    // Sized from the schedule, never from the declared total.
    let scheduled = validate(schedule, total_weeks, params)?;

    let gap = params.gap_degrees;
    let (end_angle, slices) = schedule.iter().fold(
        (params.start_angle, Vec::<Slice>::with_capacity(scheduled as usize)),
        |(cursor, mut slices), entry| {
            let weeks = entry.weeks_count() as u32;
            let share = total_degrees(weeks, total_weeks);
            let width = slice_degrees(weeks, total_weeks, gap);
            log::debug!(
                "{}: weeks {}..={} -> {:.3} deg from {:.3}, {} slice(s) of {:.3}",
                entry.course_id,
                entry.start_week,
                entry.end_week,
                share,
                cursor,
                weeks,
                width
            );
            slices.extend((0..weeks).map(|i| {
                let start_angle = cursor + i as f64 * (width + gap);
                Slice {
                    course_id: entry.course_id.clone(),
                    title: entry.title.clone(),
                    difficulty: entry.difficulty.clone(),
                    start_angle,
                    end_angle: start_angle + width,
                }
            }));
            (cursor + share, slices)
        },
    );
    log::debug!("Laid out {} slices, ending at {:.3} deg", slices.len(), end_angle);
    Ok(slices)
}
