use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vital_core::*;

#[derive(Parser)]
#[command(name = "vital")]
#[command(about = "Personal health logging and summary tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or show the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Log a metric entry (water in ml, sleep in hrs, exercise in mins)
    Log {
        /// Metric kind: water, sleep, or exercise
        kind: String,

        /// Measured value
        value: f64,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log today's mood on a 1-5 scale
    Mood {
        score: i64,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the full health summary (default)
    Summary,

    /// Show per-kind averages for the trailing 7 days
    Weekly,

    /// Show the consecutive-day streak for a metric kind
    Streak {
        /// Metric kind to check
        #[arg(long, default_value = "water")]
        kind: String,
    },

    /// Export logged metrics as CSV plus a text report
    Export {
        /// Output directory (defaults to <data-dir>/export)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show a health tip
    Tip,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Create (or replace) the profile
    Set {
        #[arg(long)]
        name: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,
    },

    /// Show the stored profile
    Show,
}

fn main() -> Result<()> {
    vital_core::logging::init();

    let cli = Cli::parse();

    // The config file is only consulted when --data-dir is absent
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => Config::load()?.data.data_dir,
    };

    let profile_path = data_dir.join("profile.json");
    let ledger_dir = data_dir.join("ledger");

    match cli.command {
        Some(Commands::Profile { action }) => cmd_profile(&profile_path, action),
        Some(Commands::Log { kind, value, date }) => {
            cmd_log(&profile_path, &ledger_dir, &kind, value, date)
        }
        Some(Commands::Mood { score, date }) => cmd_mood(&profile_path, &ledger_dir, score, date),
        Some(Commands::Weekly) => cmd_weekly(&profile_path, &ledger_dir),
        Some(Commands::Streak { kind }) => cmd_streak(&profile_path, &ledger_dir, &kind),
        Some(Commands::Export { out }) => {
            let out_dir = out.unwrap_or_else(|| data_dir.join("export"));
            cmd_export(&profile_path, &ledger_dir, &out_dir)
        }
        Some(Commands::Tip) => {
            println!("Tip to improve health: {}", pick_tip(&mut rand::thread_rng()));
            Ok(())
        }
        Some(Commands::Summary) | None => cmd_summary(&profile_path, &ledger_dir),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn require_profile(profile_path: &std::path::Path) -> Result<Profile> {
    Profile::load(profile_path)?.ok_or_else(|| {
        Error::Config("No profile found. Create one with `vital profile set`.".into())
    })
}

fn cmd_profile(profile_path: &std::path::Path, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Set {
            name,
            age,
            weight,
            height,
        } => {
            let profile = Profile::new(name, age, weight, height)?;
            profile.save(profile_path)?;
            println!("✓ Profile saved for {}", profile.name);
            Ok(())
        }
        ProfileAction::Show => {
            let profile = require_profile(profile_path)?;
            println!("Name:   {}", profile.name);
            println!("Age:    {}", profile.age);
            println!("Weight: {} kg", profile.weight_kg);
            println!("Height: {} cm", profile.height_cm);
            Ok(())
        }
    }
}

fn cmd_log(
    profile_path: &std::path::Path,
    ledger_dir: &std::path::Path,
    kind: &str,
    value: f64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let kind: MetricKind = kind.parse()?;
    let date = date.unwrap_or_else(today);

    let entry = LogEntry::new(profile.id, kind, value, date)?;
    let mut ledger = JsonlLedger::new(ledger_dir);
    ledger.append(&entry)?;

    println!("✓ Logged {} {} of {} on {}", value, kind.unit(), kind, date);

    if let Some(warning) = goals::entry_warning(kind, value) {
        println!("  ! {}", warning);
    }

    Ok(())
}

fn cmd_mood(
    profile_path: &std::path::Path,
    ledger_dir: &std::path::Path,
    score: i64,
    date: Option<NaiveDate>,
) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let date = date.unwrap_or_else(today);

    let entry = MoodEntry::new(profile.id, score, date)?;
    let mut ledger = JsonlLedger::new(ledger_dir);
    ledger.append_mood(&entry)?;

    println!("✓ Logged mood {} on {}", score, date);
    Ok(())
}

fn cmd_summary(profile_path: &std::path::Path, ledger_dir: &std::path::Path) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let ledger = JsonlLedger::new(ledger_dir);

    let summary = build_summary(&ledger, &profile, today())?;
    display_summary(&summary);
    Ok(())
}

fn display_summary(summary: &Summary) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  HEALTH SUMMARY");
    println!("╰─────────────────────────────────────────╯");
    println!();

    for kind in MetricKind::ALL {
        let progress = &summary.progress[&kind];
        println!(
            "  {}: {} / {} {}",
            kind,
            progress.total,
            progress.target,
            kind.unit()
        );
        if !progress.met {
            println!("    ! {}", goals::shortfall_warning(kind));
        }
    }

    println!();
    println!("  BMI: {:.2}", summary.bmi);
    println!("  Status: {}", summary.bmi_category);
    println!("  Water streak: {} days", summary.water_streak_days);

    println!();
    println!("DIET SUGGESTION");
    println!("{}", summary.recommendation.diet);
    println!();
    println!("EXERCISE SUGGESTION");
    println!("{}", summary.recommendation.exercise);
    println!();
}

fn cmd_weekly(profile_path: &std::path::Path, ledger_dir: &std::path::Path) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let ledger = JsonlLedger::new(ledger_dir);

    let aggregate = weekly_aggregate(&ledger, profile.id, today())?;

    println!("\nWEEKLY REPORT (since {})", aggregate.since);
    if aggregate.is_empty() {
        println!("No logs found in last 7 days");
    }
    for (kind, avg) in &aggregate.averages {
        println!("{}: {:.2} {}", kind, avg, kind.unit());
    }

    Ok(())
}

fn cmd_streak(
    profile_path: &std::path::Path,
    ledger_dir: &std::path::Path,
    kind: &str,
) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let kind: MetricKind = kind.parse()?;
    let ledger = JsonlLedger::new(ledger_dir);

    let days = metric_streak(&ledger, profile.id, kind, today())?;
    println!("{} streak: {} days", kind, days);
    Ok(())
}

fn cmd_export(
    profile_path: &std::path::Path,
    ledger_dir: &std::path::Path,
    out_dir: &std::path::Path,
) -> Result<()> {
    let profile = require_profile(profile_path)?;
    let ledger = JsonlLedger::new(ledger_dir);

    let entries = ledger.entries(profile.id)?;
    let summary = build_summary(&ledger, &profile, today())?;
    let weekly = weekly_aggregate(&ledger, profile.id, today())?;

    std::fs::create_dir_all(out_dir)?;

    let csv_path = out_dir.join("health_report.csv");
    let count = write_entries_csv(&entries, &csv_path)?;

    let report_path = out_dir.join("health_report.txt");
    std::fs::write(&report_path, render_report(&profile, &summary, &weekly))?;

    println!("✓ Exported {} entries", count);
    println!("  CSV:    {}", csv_path.display());
    println!("  Report: {}", report_path.display());
    Ok(())
}
