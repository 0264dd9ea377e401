//! CLI Adapter.

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError};
use std::io::ErrorKind;

use crate::app::api;
use crate::app::api::{ResetOptions, WipeOptions};
use crate::domain::{AppError, CommitKind, ResetOutcome, StageReport, WipeReport};

#[derive(Parser)]
#[command(name = "repurge")]
#[command(version)]
#[command(
    about = "Reset a repository's history and purge its releases, tags, and branches",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reset history to a single commit, then purge releases, tags, and branches
    #[clap(visible_alias = "r")]
    Run {
        /// Target repository (<owner>/<name>)
        repo: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Enumerate what would be deleted without touching the repository
        #[arg(long)]
        dry_run: bool,
        /// Message for the fresh initial commit
        #[arg(short, long, default_value = "Initial commit")]
        message: String,
    },
    /// Rewrite the default branch to a single commit
    Reset {
        /// Target repository (<owner>/<name>)
        repo: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Message for the fresh initial commit
        #[arg(short, long, default_value = "Initial commit")]
        message: String,
    },
    /// Delete every release
    Releases {
        /// Target repository (<owner>/<name>)
        repo: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Enumerate what would be deleted without touching the repository
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete every tag reference
    Tags {
        /// Target repository (<owner>/<name>)
        repo: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Enumerate what would be deleted without touching the repository
        #[arg(long)]
        dry_run: bool,
    },
    /// Delete every branch except the default branch
    Branches {
        /// Target repository (<owner>/<name>)
        repo: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
        /// Enumerate what would be deleted without touching the repository
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Run { repo, yes, dry_run, message } => run_wipe(&repo, yes, dry_run, message),
        Commands::Reset { repo, yes, message } => run_reset(&repo, yes, message),
        Commands::Releases { repo, yes, dry_run } => {
            run_stage(&repo, yes, dry_run, "release", "releases", api::purge_releases)
        }
        Commands::Tags { repo, yes, dry_run } => {
            run_stage(&repo, yes, dry_run, "tag", "tags", api::purge_tags)
        }
        Commands::Branches { repo, yes, dry_run } => {
            run_stage(&repo, yes, dry_run, "branch", "branches", api::purge_branches)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_wipe(repo: &str, yes: bool, dry_run: bool, message: String) -> Result<i32, AppError> {
    if !dry_run && !confirm_destruction(repo, yes)? {
        println!("Aborted.");
        return Ok(0);
    }

    let options = WipeOptions { dry_run, reset: ResetOptions { message } };
    let report = api::wipe(repo, &options)?;
    print_wipe_report(repo, &report, dry_run);

    Ok(if report.failure_count() == 0 { 0 } else { 1 })
}

fn run_reset(repo: &str, yes: bool, message: String) -> Result<i32, AppError> {
    if !confirm_destruction(repo, yes)? {
        println!("Aborted.");
        return Ok(0);
    }

    let outcome = api::reset(repo, &ResetOptions { message })?;
    print_reset_outcome(&outcome);
    Ok(0)
}

fn run_stage(
    repo: &str,
    yes: bool,
    dry_run: bool,
    noun: &str,
    plural: &str,
    purge: impl Fn(&str, bool) -> Result<StageReport, AppError>,
) -> Result<i32, AppError> {
    if !dry_run && !confirm_destruction(repo, yes)? {
        println!("Aborted.");
        return Ok(0);
    }

    let report = purge(repo, dry_run)?;
    print_stage_report(noun, plural, &report, dry_run);
    Ok(if report.is_clean() { 0 } else { 1 })
}

fn confirm_destruction(repo: &str, yes: bool) -> Result<bool, AppError> {
    if yes {
        return Ok(true);
    }

    let prompt =
        format!("This permanently rewrites history and deletes refs of '{}'. Continue?", repo);
    match Confirm::new().with_prompt(prompt).default(false).interact_opt() {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Validation(format!("Failed to read confirmation: {}", err))),
    }
}

fn print_reset_outcome(outcome: &ResetOutcome) {
    match outcome.commit {
        CommitKind::Snapshot => println!(
            "✅ Forced '{}' to single commit {}",
            outcome.branch,
            short_sha(&outcome.head)
        ),
        CommitKind::Empty => println!(
            "✅ Forced '{}' to single empty commit {} (working tree was empty)",
            outcome.branch,
            short_sha(&outcome.head)
        ),
    }
}

fn print_stage_report(noun: &str, plural: &str, report: &StageReport, dry_run: bool) {
    if dry_run {
        for name in &report.deleted {
            println!("Would delete {} {}", noun, name);
        }
        if report.deleted.is_empty() {
            println!("No {} to delete", plural);
        }
        return;
    }

    for name in &report.deleted {
        println!("Deleted {} {}", noun, name);
    }
    for failure in &report.failed {
        println!("⚠️  Failed to delete {} {}: {}", noun, failure.name, failure.error);
    }
    if report.deleted.is_empty() && report.failed.is_empty() {
        println!("No {} to delete", plural);
    }
}

fn print_wipe_report(repo: &str, report: &WipeReport, dry_run: bool) {
    if let Some(outcome) = &report.reset {
        print_reset_outcome(outcome);
    }
    print_stage_report("release", "releases", &report.releases, dry_run);
    print_stage_report("tag", "tags", &report.tags, dry_run);
    print_stage_report("branch", "branches", &report.branches, dry_run);

    let failures = report.failure_count();
    if dry_run {
        println!("✅ Dry run for '{}': {} deletion(s) planned", repo, report.deletion_count());
    } else if failures == 0 {
        println!("✅ Purged '{}': {} deletion(s)", repo, report.deletion_count());
    } else {
        println!("⚠️  Purged '{}' with {} failure(s)", repo, failures);
    }
}

fn short_sha(sha: &str) -> &str {
    &sha[..sha.len().min(7)]
}
