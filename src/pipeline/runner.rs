//! Sequential classification of input documents into output artifacts

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::classify::{classify, RunReport, TypeBucket};
use crate::cli::CliUtils;
use crate::error::{SiftError, SiftResult};
use crate::parser::load_document;
use crate::pipeline::artifact::{safe_file_name, Summary, TypeArtifact};
use crate::pipeline::config::SiftConfig;

/// Subdirectory holding the cross-document artifacts
pub const MERGED_DIR: &str = "merged";

/// File name of the frequency summary
pub const SUMMARY_FILE: &str = "summary.json";

/// Run the full pipeline: classify each document, write per-document
/// artifacts, then the merged tree and the summary.
///
/// Documents are processed strictly in configuration order. Missing or
/// zero-length inputs are skipped; a parse failure or IO failure aborts the
/// run (artifacts already written stay on disk). Re-running over unchanged
/// inputs overwrites artifacts byte-identically; stale artifacts from a
/// previous run with a different type set are not deleted.
pub fn run(config: &SiftConfig) -> SiftResult<RunReport> {
    let started = Instant::now();
    let mut report = RunReport::new();
    let mut aggregate = TypeBucket::new();

    create_dir(&config.output_root)?;

    for source in &config.documents {
        let value = match load_document(source)? {
            Some(value) => value,
            None => {
                if !config.quiet {
                    println!(
                        "- Skipping {} (missing or empty file): {}",
                        source.name,
                        source.path.display()
                    );
                }
                report.record_skip();
                continue;
            }
        };

        if !config.quiet {
            println!("\nProcessing {}: {}", source.name, source.path.display());
        }

        let bucket = classify(&value);
        let document_dir = config.output_root.join(&source.name);
        write_bucket(&bucket, &document_dir, config.quiet, None)?;

        report.record_document(&source.name, bucket.type_count(), bucket.object_count());
        aggregate.merge(bucket);
    }

    let merged_dir = config.output_root.join(MERGED_DIR);
    if !config.quiet {
        println!(
            "\nWriting merged catalog ({} types)...",
            aggregate.type_count()
        );
    }
    let progress = if !config.quiet && aggregate.type_count() > 1 {
        Some(CliUtils::create_progress_bar(aggregate.type_count() as u64))
    } else {
        None
    };
    write_bucket(&aggregate, &merged_dir, true, progress.as_ref())?;
    if let Some(progress) = progress {
        progress.finish_and_clear();
    }

    let summary = Summary::from_counts(&aggregate.counts_by_frequency());
    let summary_path = config.output_root.join(SUMMARY_FILE);
    let rendered = summary
        .to_pretty_json()
        .map_err(|e| SiftError::io(format!("failed to serialize summary: {}", e), None))?;
    fs::write(&summary_path, rendered)
        .map_err(|e| SiftError::io(e.to_string(), Some(summary_path.clone())))?;

    report.finish(
        aggregate.type_count(),
        aggregate.object_count(),
        started.elapsed(),
    );

    if !config.quiet {
        println!("\nTotal types: {}", aggregate.type_count());
        println!("Output directory: {}", config.output_root.display());
        println!("Summary file: {}", summary_path.display());
    }

    Ok(report)
}

/// Write one artifact per type into `dir`, in lexicographic type order
fn write_bucket(
    bucket: &TypeBucket,
    dir: &Path,
    quiet: bool,
    progress: Option<&indicatif::ProgressBar>,
) -> SiftResult<()> {
    create_dir(dir)?;

    for (type_name, objects) in bucket.iter() {
        let artifact = TypeArtifact::new(type_name, objects.clone());
        let path = dir.join(safe_file_name(type_name));
        let rendered = artifact.to_pretty_json().map_err(|e| {
            SiftError::io(
                format!("failed to serialize artifact: {}", e),
                Some(path.clone()),
            )
        })?;
        fs::write(&path, rendered).map_err(|e| SiftError::io(e.to_string(), Some(path.clone())))?;

        if !quiet {
            println!("  - {}: {} -> {}", type_name, objects.len(), path.display());
        }
        if let Some(progress) = progress {
            progress.inc(1);
        }
    }

    Ok(())
}

fn create_dir(dir: &Path) -> SiftResult<()> {
    fs::create_dir_all(dir).map_err(|e| SiftError::io(e.to_string(), Some(dir.to_path_buf())))
}
