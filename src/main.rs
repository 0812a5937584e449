use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use eeg_renamer::dataset::{cleanup, copier};
use eeg_renamer::types::summary::{CleanupSummary, RenameSummary};

#[derive(Parser)]
#[command(name = "eeg-renamer")]
#[command(about = "Copies EEG recordings to the filenames the analysis pipeline expects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Copy each subject's recordings to their expected COCOA/SASA names
    Rename {
        /// Dataset root containing the sub-<n> directories
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Delete previously generated target files under the root
    Cleanup {
        /// Dataset root containing the sub-<n> directories
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Glob pattern(s) selecting the file names to delete; defaults to
        /// exactly the names the rename pass produces (repeatable)
        #[arg(long = "pattern", value_name = "GLOB")]
        patterns: Vec<String>,
    },
    /// Delete stale target files, then rename everything fresh
    Refresh {
        /// Dataset root containing the sub-<n> directories
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(&cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        // Finished, but some subjects or files failed.
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` when the run finished with zero errors.
fn run(command: &Command) -> Result<bool> {
    match command {
        Command::Rename { root } => {
            let summary = copier::process_all(root)?;
            print_rename_summary(&summary);
            Ok(summary.is_clean())
        }
        Command::Cleanup { root, patterns } => {
            let summary = if patterns.is_empty() {
                cleanup::cleanup(root)?
            } else {
                let matcher = cleanup::glob_to_matcher(patterns)?;
                cleanup::cleanup_matching(root, matcher)?
            };
            print_cleanup_summary(&summary);
            Ok(summary.is_clean())
        }
        Command::Refresh { root } => {
            println!("Step 1: Cleaning up stale target files...");
            let cleaned = cleanup::cleanup(root)?;
            print_cleanup_summary(&cleaned);

            println!("\nStep 2: Recreating files with expected names...");
            let renamed = copier::process_all(root)?;
            print_rename_summary(&renamed);

            Ok(cleaned.is_clean() && renamed.is_clean())
        }
    }
}

fn print_rename_summary(summary: &RenameSummary) {
    println!("\n{}", "=".repeat(50));
    println!("Summary:");
    println!(
        "  Successfully created marker files: {}",
        summary.marker_files_copied
    );
    println!(
        "  Successfully created data files: {}",
        summary.data_files_copied
    );
    println!("  Skipped subjects: {}", summary.skipped);
    println!("  Errors: {}", summary.errors);
    println!("  Total subjects processed: {}", summary.subjects_total);

    if summary.is_clean() {
        println!("\nAll marker and data files have been successfully created!");
    } else {
        println!(
            "\nThere were {} errors. Please check the log above.",
            summary.errors
        );
    }
}

fn print_cleanup_summary(summary: &CleanupSummary) {
    println!("\n{}", "=".repeat(50));
    println!("Summary:");
    println!("  Successfully deleted: {} files", summary.deleted);
    println!("  Errors: {} files", summary.errors);

    if summary.is_clean() {
        println!("\nAll matching files have been deleted!");
    } else {
        println!(
            "\nThere were {} errors. Please check the log above.",
            summary.errors
        );
    }
}
