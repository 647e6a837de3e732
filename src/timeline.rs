use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

// Duration assumed for a planned course with no known length
pub const DEFAULT_COURSE_WEEKS: u32 = 3;

fn default_difficulty() -> String {
  "intermediate".to_string()
}

/// One course's contiguous occupancy of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
  pub course_id: String,
  /// Display title; the course id is used when absent.
  #[serde(default)]
  pub title: String,
  #[serde(default = "default_difficulty")]
  pub difficulty: String,
  /// Redundant duration sent by the planner. The week range is authoritative.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weeks: Option<u32>,
  pub start_week: u32,
  pub end_week: u32,
}

impl ScheduleEntry {
  pub fn new(course_id: &str, start_week: u32, end_week: u32) -> ScheduleEntry {
    ScheduleEntry {
      course_id: course_id.to_string(),
      title: course_id.to_string(),
      difficulty: default_difficulty(),
      weeks: None,
      start_week,
      end_week,
    }
  }

  /// Number of weeks covered, inclusive on both ends. Non-positive when the
  /// range is inverted.
  pub fn weeks_count(&self) -> i64 {
    self.end_week as i64 - self.start_week as i64 + 1
  }
}

/// Total week count plus the ordered per-course schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
  #[serde(default)]
  pub weeks: u32,
  #[serde(default)]
  pub schedule: Vec<ScheduleEntry>,
}

/// A course chosen by the planner, before it has been placed on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedCourse {
  pub course_id: String,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub difficulty: Option<String>,
  #[serde(default)]
  pub duration_weeks: Option<u32>,
}

// Either a bare timeline or a full advice response carrying one alongside
// fields we don't care about.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimelineDocument {
  Response { timeline: Timeline },
  Bare(Timeline),
}

impl Timeline {
  /// Parses a timeline from JSON text.
  pub fn from_json(text: &str) -> anyhow::Result<Timeline> {
    let doc: TimelineDocument = serde_json::from_str(text).context("not a timeline document")?;
    let timeline = match doc {
      TimelineDocument::Response { timeline } => timeline,
      TimelineDocument::Bare(timeline) => timeline,
    };
    Ok(timeline.normalized())
  }

  /// Reads a timeline document from a file.
  pub fn from_file(file: &Path) -> anyhow::Result<Timeline> {
    let text = fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    Timeline::from_json(&text).with_context(|| format!("failed to parse {}", file.display()))
  }

  /// Reads a JSON array of planned courses and lays them out back to back.
  pub fn from_courses_file(file: &Path) -> anyhow::Result<Timeline> {
    let text = fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let courses: Vec<PlannedCourse> =
      serde_json::from_str(&text).with_context(|| format!("failed to parse course list {}", file.display()))?;
    Timeline::from_courses(&courses).with_context(|| format!("cannot schedule courses from {}", file.display()))
  }

  /// Places courses consecutively starting at week 1, each taking its
  /// duration (or `DEFAULT_COURSE_WEEKS`). Total weeks is the sum of durations.
  pub fn from_courses(courses: &[PlannedCourse]) -> Result<Timeline, TimelineError> {
    let init = (1u32, Vec::<ScheduleEntry>::with_capacity(courses.len()));
    let (next_week, schedule) = courses.iter().try_fold(init, |(week, mut acc), c| {
      let weeks = c.duration_weeks.unwrap_or(DEFAULT_COURSE_WEEKS).max(1);
      // The week after this course must still be representable.
      let end_week = week.checked_add(weeks - 1);
      let (Some(end_week), Some(next_week)) = (end_week, end_week.and_then(|end| end.checked_add(1))) else {
        return Err(TimelineError::WeekOverflow { course_id: c.course_id.clone() });
      };
      acc.push(ScheduleEntry {
        course_id: c.course_id.clone(),
        title: c.title.clone().unwrap_or_else(|| c.course_id.clone()),
        difficulty: c.difficulty.clone().unwrap_or_else(default_difficulty),
        weeks: Some(weeks),
        start_week: week,
        end_week,
      });
      Ok((next_week, acc))
    })?;
    Ok(Timeline { weeks: next_week - 1, schedule })
  }

  /// True when there is nothing to draw.
  pub fn is_empty(&self) -> bool {
    self.weeks == 0 || self.schedule.is_empty()
  }

  /// Sum of week counts across the schedule, ignoring inverted ranges.
  pub fn scheduled_weeks(&self) -> u64 {
    self.schedule.iter().map(|s| s.weeks_count().max(0) as u64).sum()
  }

  fn normalized(mut self) -> Timeline {
    for entry in self.schedule.iter_mut() {
      if entry.title.is_empty() {
        entry.title = entry.course_id.clone();
      }
      if let Some(weeks) = entry.weeks {
        if weeks as i64 != entry.weeks_count() {
          log::warn!(
            "Course {} declares {} week(s) but spans weeks {}..={}; using the range",
            entry.course_id,
            weeks,
            entry.start_week,
            entry.end_week
          );
        }
      }
    }
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn course(id: &str, weeks: Option<u32>) -> PlannedCourse {
    PlannedCourse { course_id: id.to_string(), title: None, difficulty: None, duration_weeks: weeks }
  }

  #[test]
  fn sequences_courses_back_to_back() {
    let timeline =
      Timeline::from_courses(&[course("rust-101", Some(4)), course("sql", None), course("k8s", Some(1))]).unwrap();
    assert_eq!(timeline.weeks, 8);
    let ranges: Vec<_> = timeline.schedule.iter().map(|s| (s.start_week, s.end_week)).collect();
    assert_eq!(ranges, vec![(1, 4), (5, 7), (8, 8)]);
    assert_eq!(timeline.schedule[1].title, "sql");
    assert_eq!(timeline.schedule[1].difficulty, "intermediate");
    assert_eq!(timeline.scheduled_weeks(), timeline.weeks as u64);
  }

  #[test]
  fn no_courses_is_empty() {
    let timeline = Timeline::from_courses(&[]).unwrap();
    assert_eq!(timeline.weeks, 0);
    assert!(timeline.is_empty());
  }

  #[test]
  fn overlong_course_list_rejected() {
    let err = Timeline::from_courses(&[course("huge", Some(u32::MAX)), course("next", Some(1))]).unwrap_err();
    assert_eq!(err, TimelineError::WeekOverflow { course_id: "huge".to_string() });

    let err = Timeline::from_courses(&[course("a", Some(u32::MAX - 1)), course("b", Some(1))]).unwrap_err();
    assert_eq!(err, TimelineError::WeekOverflow { course_id: "b".to_string() });

    // Last representable week still fits.
    let timeline = Timeline::from_courses(&[course("a", Some(u32::MAX - 1))]).unwrap();
    assert_eq!(timeline.weeks, u32::MAX - 1);
  }

  #[test]
  fn scheduled_weeks_sum_past_u32() {
    let timeline = Timeline {
      weeks: 1,
      schedule: vec![ScheduleEntry::new("a", 1, u32::MAX), ScheduleEntry::new("b", 1, u32::MAX)],
    };
    assert_eq!(timeline.scheduled_weeks(), 2 * u32::MAX as u64);
  }

  #[test]
  fn parses_bare_and_wrapped_documents() {
    let bare = r#"{"weeks": 3, "schedule": [
      {"course_id": "A", "title": "Intro", "difficulty": "beginner", "weeks": 2, "start_week": 1, "end_week": 2},
      {"course_id": "B", "start_week": 3, "end_week": 3}
    ]}"#;
    let timeline = Timeline::from_json(bare).unwrap();
    assert_eq!(timeline.weeks, 3);
    assert_eq!(timeline.schedule[0].title, "Intro");
    assert_eq!(timeline.schedule[1].title, "B");
    assert_eq!(timeline.schedule[1].difficulty, "intermediate");

    let wrapped = format!(r#"{{"plan": [], "notes": "n/a", "latency_ms": 12, "timeline": {}}}"#, bare);
    assert_eq!(Timeline::from_json(&wrapped).unwrap(), timeline);
  }

  #[test]
  fn missing_weeks_parses_as_empty() {
    let timeline = Timeline::from_json(r#"{"schedule": []}"#).unwrap();
    assert!(timeline.is_empty());
  }

  #[test]
  fn rejects_garbage() {
    assert!(Timeline::from_json("not json at all").is_err());
  }

  #[test]
  fn inverted_range_has_non_positive_count() {
    assert_eq!(ScheduleEntry::new("x", 5, 3).weeks_count(), -1);
    assert_eq!(ScheduleEntry::new("x", 4, 4).weeks_count(), 1);
  }
}
