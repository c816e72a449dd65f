use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use agenda_core::{
    count_by_kind, count_by_type, expand_all, summarize, Summary, TaskKind, TaskType, Window,
};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::common;

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportRange {
    /// Calendar week (Sunday through Saturday) containing the anchor
    Weekly,
    /// Calendar month containing the anchor
    Monthly,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Task snapshot file (JSON array)
    #[arg(long)]
    pub tasks: PathBuf,
    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Report range
    #[arg(long, value_enum, default_value = "weekly")]
    pub range: ReportRange,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report {
    window: Window,
    summary: Summary,
    by_kind: BTreeMap<TaskKind, usize>,
    by_type: BTreeMap<TaskType, usize>,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn Error>> {
    let tasks = common::load_tasks(&args.tasks)?;
    let anchor = common::resolve_anchor(args.date);
    let window = match args.range {
        ReportRange::Weekly => Window::week(anchor),
        ReportRange::Monthly => Window::month(anchor),
    };

    let occurrences = expand_all(&tasks, &window);
    let report = Report {
        window,
        summary: summarize(&occurrences),
        by_kind: count_by_kind(&occurrences),
        by_type: count_by_type(&occurrences),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Report {} - {}", window.start(), window.end());
    println!(
        "  total: {}  completed: {}  pending: {}  completion: {}%",
        report.summary.total,
        report.summary.completed,
        report.summary.pending,
        report.summary.percent
    );
    println!("  by kind:");
    for (kind, count) in &report.by_kind {
        println!("    {kind:?}: {count}");
    }
    println!("  by type:");
    for (task_type, count) in &report.by_type {
        println!("    {task_type:?}: {count}");
    }
    Ok(())
}
