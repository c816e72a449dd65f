//! Shared helpers for CLI commands.

use std::error::Error;
use std::fs;
use std::path::Path;

use agenda_core::TaskDefinition;
use chrono::NaiveDate;

/// Load a task snapshot as serialized by the persistence layer.
pub fn load_tasks(path: &Path) -> Result<Vec<TaskDefinition>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let tasks: Vec<TaskDefinition> = serde_json::from_str(&raw)?;
    Ok(tasks)
}

/// Resolve the anchor date: the explicit flag, or today's local date.
///
/// The wall clock is consulted only here; everything below the CLI
/// boundary receives the date explicitly and stays deterministic.
pub fn resolve_anchor(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}
