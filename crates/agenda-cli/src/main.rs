use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "agenda-cli", version, about = "Agenda CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly agenda, one bucket per day
    Week(commands::week::WeekArgs),
    /// Today's task list and completion summary
    Today(commands::today::TodayArgs),
    /// Period report with completion counts and breakdowns
    Report(commands::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Week(args) => commands::week::run(args),
        Commands::Today(args) => commands::today::run(args),
        Commands::Report(args) => commands::report::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
