use thiserror::Error;

/// Errors raised while validating a schedule before layout.
#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("schedule entry {index} ({course_id:?}): {reason}")]
    InvalidScheduleEntry {
        index: usize,
        course_id: String,
        reason: String,
    },

    #[error(
        "schedule entry {index} ({course_id:?}): {weeks} week(s) leave {slice_degrees:.3} degrees per slice"
    )]
    SliceTooNarrow {
        index: usize,
        course_id: String,
        weeks: u32,
        slice_degrees: f64,
    },

    #[error("schedule covers {actual} week(s) but the timeline declares {expected}")]
    WeekCountMismatch { expected: u64, actual: u64 },

    #[error("course {course_id:?} would end past week {}", u32::MAX)]
    WeekOverflow { course_id: String },

    #[error("timeline declares no weeks")]
    NoWeeks,
}
