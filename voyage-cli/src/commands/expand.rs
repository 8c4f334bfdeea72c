//! Batch expansion command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use voyage_core::{collect_book_files, expand_file, BatchReport, FileOutcome, WriteMode};

/// Expand every matching book file in `content_dir`.
///
/// Unparseable files are reported and skipped; I/O failures abort the run.
pub fn expand(content_dir: &str, extension: &str, dry_run: bool, jobs: usize) -> Result<()> {
    let dir = Path::new(content_dir);

    let files = collect_book_files(dir, extension)
        .with_context(|| format!("Failed to read content directory {}", content_dir))?;

    if files.is_empty() {
        println!("No book files found in {}", content_dir);
        print_summary(&BatchReport::default(), dry_run);
        return Ok(());
    }

    println!("Found {} book files\n", files.len());

    let mode = if dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Overwrite
    };

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("##-"),
    );

    // Configure thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .ok(); // Ignore if already configured

    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let outcome = expand_file(path, mode)
                .with_context(|| format!("Failed to expand {}", path.display()));
            progress.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish_and_clear();

    let mut report = BatchReport::default();
    for (path, outcome) in files.iter().zip(&outcomes) {
        report.record(outcome);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("  {}: {}", name, status(outcome));
    }

    print_summary(&report, dry_run);
    Ok(())
}

fn print_summary(report: &BatchReport, dry_run: bool) {
    println!(
        "\nDone — expanded: {}, skipped: {}, errors: {}",
        report.expanded, report.skipped, report.errors
    );
    if dry_run {
        println!("Dry run: no files were written");
    }
}

fn status(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Expanded => "ok".to_string(),
        FileOutcome::AlreadyExpanded => "skipped — already expanded".to_string(),
        FileOutcome::Unparseable(e) => format!("error — unparseable ({})", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_core::ParseError;

    #[test]
    fn test_status_lines() {
        assert_eq!(status(&FileOutcome::Expanded), "ok");
        assert_eq!(
            status(&FileOutcome::AlreadyExpanded),
            "skipped — already expanded"
        );
        assert_eq!(
            status(&FileOutcome::Unparseable(ParseError::MissingField(
                "title".to_string()
            ))),
            "error — unparseable (Missing required field: title)"
        );
    }
}
