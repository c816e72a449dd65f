//! # Agenda Core Library
//!
//! Occurrence-materialization engine for the Agenda task tracker. Stored
//! task definitions describe a scheduling pattern (one-off, fixed weekdays,
//! daily within a date range, or interval-repeating), and this crate expands
//! them against an arbitrary calendar-day window into the concrete
//! occurrences that the consuming views render.
//!
//! ## Architecture
//!
//! - **dates**: calendar-day parsing and whole-day arithmetic
//! - **window**: inclusive day windows (week / day / month / range)
//! - **occurrence**: the expansion algorithm, one implementation shared by
//!   the week grid, the today summary, and period reports
//! - **agenda**: per-day bucketing with start-time ordering
//! - **summary**: completion counts and kind/type breakdowns
//!
//! The engine is purely functional: every anchor date is injected by the
//! caller, nothing consults the wall clock, and identical inputs always
//! yield identical results.

pub mod agenda;
pub mod dates;
pub mod error;
pub mod occurrence;
pub mod summary;
pub mod task;
pub mod window;

pub use agenda::{bucket_by_day, day_label, DAY_NAMES};
pub use error::{EngineError, Result};
pub use occurrence::{expand, expand_all, Occurrence};
pub use summary::{count_by_kind, count_by_type, summarize, Summary};
pub use task::{
    LectureDetails, Period, Recurrence, Reminder, ReminderMethod, Subtask, SubtaskStatus,
    TaskDefinition, TaskKind, TaskStatus, TaskType,
};
pub use window::Window;
