//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::SiftError;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "typesift")]
#[command(about = "Catalog JSON documents by their type discriminator fields")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input documents as PATH or NAME=PATH (file or directory)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output root directory
    #[arg(short, long, default_value = "components_by_type")]
    pub output: PathBuf,

    /// Recurse into subdirectories when an input is a directory
    #[arg(long)]
    pub recursive: bool,

    /// Print the run report as JSON after processing
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for artifact writing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if quiet {
            return;
        }
        if Self::should_use_color() {
            println!("{} {}", console::style("✓").green(), message);
        } else {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", console::style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if quiet {
            return;
        }
        if Self::should_use_color() {
            eprintln!("{} {}", console::style("⚠").yellow(), message);
        } else {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &SiftError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    if error.is_parse_error() {
        eprintln!("\nTip: inputs must be well-formed UTF-8 JSON documents");
    }

    // Show usage hint
    eprintln!("\nTry 'typesift --help' for usage information.");
}
