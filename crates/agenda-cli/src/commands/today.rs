use std::error::Error;
use std::path::PathBuf;

use agenda_core::{bucket_by_day, expand_all, summarize, Occurrence, Summary, TaskStatus, Window};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use crate::common;

#[derive(Args)]
pub struct TodayArgs {
    /// Task snapshot file (JSON array)
    #[arg(long)]
    pub tasks: PathBuf,
    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TodayReport<'a> {
    date: NaiveDate,
    summary: Summary,
    tasks: Vec<Occurrence<'a>>,
}

pub fn run(args: TodayArgs) -> Result<(), Box<dyn Error>> {
    let snapshot = common::load_tasks(&args.tasks)?;
    let anchor = common::resolve_anchor(args.date);
    let window = Window::day(anchor);

    // Tasks opted out of the daily summary stay off this view.
    let included: Vec<_> = snapshot
        .into_iter()
        .filter(|task| task.daily_summary)
        .collect();
    let occurrences = expand_all(&included, &window);
    let ordered = bucket_by_day(&occurrences)
        .remove(&anchor)
        .unwrap_or_default();
    let summary = summarize(&occurrences);

    if args.json {
        let report = TodayReport {
            date: anchor,
            summary,
            tasks: ordered,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Today {}: {} total, {} completed, {} pending ({}%)",
        anchor, summary.total, summary.completed, summary.pending, summary.percent
    );
    for occurrence in &ordered {
        let task = occurrence.task;
        let marker = if task.status == TaskStatus::Completed {
            "x"
        } else {
            " "
        };
        println!(
            "  [{marker}] {} - {}  {}",
            task.start_time, task.end_time, task.title
        );
    }
    Ok(())
}
