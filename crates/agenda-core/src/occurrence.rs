//! Occurrence expansion: one task definition plus one window in, the
//! concrete calendar occurrences inside that window out.
//!
//! This is the single shared implementation behind the week grid, the
//! today summary, and the period reports. Expansion is a pure function of
//! `(definition, window)`: no wall clock, no stored state, identical
//! inputs give identical, order-stable output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates;
use crate::task::{TaskDefinition, TaskKind};
use crate::window::Window;

/// One concrete calendar appearance of a task inside a window.
///
/// Ephemeral and recomputed on every call; its identity is
/// `(task.id, date)` and it carries the definition's display fields
/// unchanged by reference.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Occurrence<'a> {
    /// The definition this occurrence was expanded from.
    pub task: &'a TaskDefinition,
    /// The calendar day it falls on.
    pub date: NaiveDate,
}

/// Expand a single definition against a window.
///
/// Malformed scheduling data degrades to an empty result; this never fails.
pub fn expand<'a>(task: &'a TaskDefinition, window: &Window) -> Vec<Occurrence<'a>> {
    match task.kind {
        TaskKind::AdHoc => expand_ad_hoc(task, window),
        TaskKind::Static => expand_static(task, window),
        TaskKind::Periodic => expand_periodic(task, window),
        TaskKind::Recurring => expand_recurring(task, window),
    }
}

/// Expand a snapshot of definitions, concatenated in input order.
pub fn expand_all<'a>(tasks: &'a [TaskDefinition], window: &Window) -> Vec<Occurrence<'a>> {
    tasks.iter().flat_map(|task| expand(task, window)).collect()
}

/// One occurrence on the task's own date, if the window covers it.
fn expand_ad_hoc<'a>(task: &'a TaskDefinition, window: &Window) -> Vec<Occurrence<'a>> {
    match task.date {
        Some(date) if window.contains(date) => vec![Occurrence { task, date }],
        _ => Vec::new(),
    }
}

/// Every window day whose weekday is in the task's selection.
///
/// A static task with no resolvable weekday selection is deliberately
/// invisible, not an error.
fn expand_static<'a>(task: &'a TaskDefinition, window: &Window) -> Vec<Occurrence<'a>> {
    let selected = task.resolved_static_days();
    if selected.is_empty() {
        return Vec::new();
    }
    window
        .days()
        .filter(|day| selected.contains(&dates::weekday_index(*day)))
        .map(|date| Occurrence { task, date })
        .collect()
}

/// Daily occurrences over the task's period, clamped to the window on both
/// sides. A missing start date falls back to the task's own date, then to
/// the window start; a missing end date means the period is open-ended.
fn expand_periodic<'a>(task: &'a TaskDefinition, window: &Window) -> Vec<Occurrence<'a>> {
    let from = task
        .period
        .start_date
        .or(task.date)
        .unwrap_or(window.start())
        .max(window.start());
    let to = task.period.end_date.unwrap_or(window.end()).min(window.end());
    if from > to {
        return Vec::new();
    }
    (0..=dates::days_between(from, to))
        .map(|offset| Occurrence {
            task,
            date: dates::add_days(from, offset),
        })
        .collect()
}

/// Interval-aligned weekday occurrences measured from the anchor date.
///
/// Alignment divides the raw day difference by seven, so two anchors in the
/// same calendar week but on different weekdays can admit different days.
/// Migrated records depend on that exact behavior.
fn expand_recurring<'a>(task: &'a TaskDefinition, window: &Window) -> Vec<Occurrence<'a>> {
    let anchor = task.date.unwrap_or(window.start());
    let interval = task.recurrence.interval_weeks.max(1);
    let allowed = &task.recurrence.days_of_week;
    let repeat_end = task.recurrence.repeat_end_date;

    let mut occurrences = Vec::new();
    for day in window.days() {
        if repeat_end.is_some_and(|end| day > end) {
            continue;
        }
        if !allowed.is_empty() && !allowed.contains(&dates::weekday_index(day)) {
            continue;
        }
        let diff = dates::days_between(anchor, day);
        if diff < 0 {
            // Occurrences never precede the anchor.
            continue;
        }
        let weeks_since_anchor = diff / 7;
        if weeks_since_anchor % interval == 0 {
            occurrences.push(Occurrence { task, date: day });
        }
    }
    occurrences
}
