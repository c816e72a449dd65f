use std::error::Error;
use std::path::PathBuf;

use agenda_core::{bucket_by_day, dates, day_label, expand_all, Window};
use chrono::NaiveDate;
use clap::Args;

use crate::common;

#[derive(Args)]
pub struct WeekArgs {
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

pub fn run(args: WeekArgs) -> Result<(), Box<dyn Error>> {
    let tasks = common::load_tasks(&args.tasks)?;
    let window = Window::week(common::resolve_anchor(args.date));
    let occurrences = expand_all(&tasks, &window);
    let buckets = bucket_by_day(&occurrences);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    println!(
        "Week of {} - {} ({} occurrences)",
        window.start(),
        window.end(),
        occurrences.len()
    );
    for day in window.days() {
        println!("\n{} {}", day_label(dates::weekday_index(day)), day);
        match buckets.get(&day) {
            Some(entries) => {
                for occurrence in entries {
                    let task = occurrence.task;
                    println!(
                        "  {} - {}  {}",
                        task.start_time, task.end_time, task.title
                    );
                }
            }
            None => println!("  (no tasks)"),
        }
    }
    Ok(())
}
