//! Task definition types in the upstream document shape.
//!
//! Definitions are owned by the persistence layer and arrive here as an
//! immutable snapshot, one JSON document per task. The engine interprets
//! only the scheduling fields (`kind`, `date`, `staticDays`, `recurrence`,
//! `period`); everything else is carried through unchanged for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;

/// Scheduling pattern of a task. Exactly one expansion rule fires per kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Single occurrence on the task's own date.
    AdHoc,
    /// Fixed weekdays, indefinitely.
    Static,
    /// Every day inside a date range.
    Periodic,
    /// Interval-spaced weekday pattern measured from an anchor date.
    Recurring,
}

impl Default for TaskKind {
    fn default() -> Self {
        TaskKind::AdHoc
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Display tag used by the views to pick colors and grouping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Class,
    Meeting,
    OfficeHours,
    Preparation,
    Research,
    Other,
}

impl Default for TaskType {
    fn default() -> Self {
        TaskType::Class
    }
}

/// Delivery method for a reminder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    None,
    Notify,
    Email,
}

impl Default for ReminderMethod {
    fn default() -> Self {
        ReminderMethod::Notify
    }
}

/// Completion status of a subtask.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubtaskStatus {
    Pending,
    Completed,
}

impl Default for SubtaskStatus {
    fn default() -> Self {
        SubtaskStatus::Pending
    }
}

/// Weekly recurrence settings for [`TaskKind::Recurring`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Recurrence {
    /// Allowed weekdays, Sunday = 0. Empty means every weekday.
    pub days_of_week: Vec<u8>,
    /// Weeks between occurrences; values below 1 are treated as 1.
    pub interval_weeks: i64,
    /// Last day occurrences may fall on, inclusive.
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub repeat_end_date: Option<NaiveDate>,
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            days_of_week: Vec::new(),
            interval_weeks: 1,
            repeat_end_date: None,
        }
    }
}

/// Date range for [`TaskKind::Periodic`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Period {
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub end_date: Option<NaiveDate>,
}

/// A checklist item under a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Subtask {
    pub title: String,
    pub status: SubtaskStatus,
}

/// A reminder attached to a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Reminder {
    /// Clock time in `HH:MM`, e.g. "20:30".
    pub time: String,
    pub method: ReminderMethod,
}

/// Optional lecture details shown when the task represents a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LectureDetails {
    pub class_name: Option<String>,
    pub hall_number: Option<String>,
    pub hours: Option<String>,
}

/// A stored task definition, immutable input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDefinition {
    /// Opaque identifier from the store.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    /// Anchor calendar day: the occurrence date for ad-hoc tasks and the
    /// interval anchor for recurring ones.
    #[serde(deserialize_with = "dates::deserialize_day")]
    pub date: Option<NaiveDate>,
    /// Start of the slot, fixed-width zero-padded `HH:MM`.
    pub start_time: String,
    /// End of the slot, `HH:MM`. Not validated against `start_time`.
    pub end_time: String,
    /// Display tag used by the views.
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub location: Option<String>,
    pub status: TaskStatus,
    pub kind: TaskKind,
    /// Weekdays for static tasks; raw stored values, may contain a legacy 7.
    pub static_days: Vec<u8>,
    pub recurrence: Recurrence,
    pub period: Period,
    pub subtasks: Vec<Subtask>,
    pub reminders: Vec<Reminder>,
    /// Whether the task participates in the daily summary view.
    pub daily_summary: bool,
    pub lecture_details: Option<LectureDetails>,
}

impl Default for TaskDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            category: "General".to_string(),
            date: None,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            task_type: TaskType::Class,
            location: None,
            status: TaskStatus::Pending,
            kind: TaskKind::AdHoc,
            static_days: Vec::new(),
            recurrence: Recurrence::default(),
            period: Period::default(),
            subtasks: Vec::new(),
            reminders: Vec::new(),
            daily_summary: true,
            lecture_details: None,
        }
    }
}

impl TaskDefinition {
    /// Create a new definition with schema defaults and a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: format!("task-{}", uuid::Uuid::new_v4()),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Start of the slot in minutes since midnight, if parseable.
    pub fn start_minutes(&self) -> Option<i64> {
        clock_minutes(&self.start_time)
    }

    /// Slot duration in minutes; negative when the times are reversed.
    pub fn duration_minutes(&self) -> Option<i64> {
        Some(clock_minutes(&self.end_time)? - self.start_minutes()?)
    }

    /// Weekday selection for static expansion, after legacy folding.
    ///
    /// `staticDays` wins; an empty list falls back to
    /// `recurrence.daysOfWeek` for records written before the field split.
    /// The result is deduplicated and restricted to `0..=6`.
    pub fn resolved_static_days(&self) -> Vec<u8> {
        let raw = if self.static_days.is_empty() {
            &self.recurrence.days_of_week
        } else {
            &self.static_days
        };
        let mut days: Vec<u8> = raw.iter().copied().filter_map(dates::fold_weekday).collect();
        days.sort_unstable();
        days.dedup();
        days
    }
}

fn clock_minutes(raw: &str) -> Option<i64> {
    let (hours, minutes) = raw.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}
