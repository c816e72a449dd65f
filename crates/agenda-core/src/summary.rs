//! Aggregate counts over an occurrence set.
//!
//! A pure fold for dashboards and reports: completion counts, a rounded
//! percentage, and breakdowns by scheduling kind and display type. Callers
//! wanting the daily-summary filter (`dailySummary != false`) pre-filter
//! the snapshot before expanding; the reducer never consults flags.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::occurrence::Occurrence;
use crate::task::{TaskKind, TaskStatus, TaskType};

/// Completion counts for a dashboard or report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    /// Everything not completed, cancelled occurrences included.
    pub pending: usize,
    /// Completed share in whole percent, rounded half up; 0 when empty.
    pub percent: u32,
}

/// Fold an occurrence set into completion counts.
pub fn summarize(occurrences: &[Occurrence<'_>]) -> Summary {
    let total = occurrences.len();
    let completed = occurrences
        .iter()
        .filter(|occurrence| occurrence.task.status == TaskStatus::Completed)
        .count();
    let percent = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };
    Summary {
        total,
        completed,
        pending: total - completed,
        percent,
    }
}

/// Occurrence counts per scheduling kind, in stable display order.
pub fn count_by_kind(occurrences: &[Occurrence<'_>]) -> BTreeMap<TaskKind, usize> {
    let mut counts = BTreeMap::new();
    for occurrence in occurrences {
        *counts.entry(occurrence.task.kind).or_insert(0) += 1;
    }
    counts
}

/// Occurrence counts per display type, in stable display order.
pub fn count_by_type(occurrences: &[Occurrence<'_>]) -> BTreeMap<TaskType, usize> {
    let mut counts = BTreeMap::new();
    for occurrence in occurrences {
        *counts.entry(occurrence.task.task_type).or_insert(0) += 1;
    }
    counts
}
