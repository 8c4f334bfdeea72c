//! Single-file expansion: parse, generate, overwrite

use crate::error::{ParseError, Result};
use crate::extractor;
use crate::generator;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of expanding text in memory
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// Original text followed by the generated sections
    Expanded(String),
    /// Sentinel headers found; nothing to do
    AlreadyExpanded,
}

/// Whether [`expand_file`] writes its result back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Overwrite,
    DryRun,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Expanded,
    AlreadyExpanded,
    Unparseable(ParseError),
}

/// Tally of outcomes across a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub expanded: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Expanded => self.expanded += 1,
            FileOutcome::AlreadyExpanded => self.skipped += 1,
            FileOutcome::Unparseable(_) => self.errors += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.expanded + self.skipped + self.errors
    }
}

/// Expand raw file content.
///
/// The result is the input with trailing whitespace removed, then every
/// generated section, then a single newline.
pub fn expand_text(raw: &str) -> std::result::Result<Expansion, ParseError> {
    let book = extractor::parse(raw);
    if book.already_expanded {
        return Ok(Expansion::AlreadyExpanded);
    }

    let generated = generator::generate(&book)?;

    let original = raw.trim_end();
    let mut text = String::with_capacity(original.len() + generated.len() + 1);
    text.push_str(original);
    text.push_str(&generated);
    text.push('\n');
    Ok(Expansion::Expanded(text))
}

/// Expand one file in place.
///
/// Unparseable content is reported in the outcome and leaves the file
/// untouched; I/O failures are returned as errors.
pub fn expand_file(path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let raw = fs::read_to_string(path)?;

    let outcome = match expand_text(&raw) {
        Ok(Expansion::Expanded(text)) => {
            if mode == WriteMode::Overwrite {
                fs::write(path, &text)?;
                tracing::debug!("Wrote {} bytes to {:?}", text.len(), path);
            }
            FileOutcome::Expanded
        }
        Ok(Expansion::AlreadyExpanded) => {
            tracing::debug!("Skipping {:?}: already expanded", path);
            FileOutcome::AlreadyExpanded
        }
        Err(e) => {
            tracing::debug!("Cannot expand {:?}: {}", path, e);
            FileOutcome::Unparseable(e)
        }
    };

    Ok(outcome)
}

/// Regular files in `dir` whose extension matches, sorted by path
pub fn collect_book_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let wanted = extension.trim_start_matches('.');

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SENTINEL_MARKERS;
    use tempfile::TempDir;

    const BOOK: &str = "Walden\nby Henry David Thoreau (1854)\n\nKEY THEMES\n1. Simplicity — Living deliberately.\n\n\n";

    #[test]
    fn test_expand_text_appends_after_trimmed_original() {
        let Expansion::Expanded(text) = expand_text(BOOK).unwrap() else {
            panic!("Expected expansion");
        };
        assert!(text.starts_with(BOOK.trim_end()));
        assert!(text[BOOK.trim_end().len()..].starts_with("\n\n═"));
        assert!(text.ends_with("lifetime.\n\n"));
        assert!(SENTINEL_MARKERS.iter().any(|m| text.contains(m)));
    }

    #[test]
    fn test_expand_text_is_idempotent() {
        let Expansion::Expanded(text) = expand_text(BOOK).unwrap() else {
            panic!("Expected expansion");
        };
        assert_eq!(expand_text(&text).unwrap(), Expansion::AlreadyExpanded);
    }

    #[test]
    fn test_expand_text_missing_author() {
        assert_eq!(
            expand_text("Some Title\nNo author line here\n"),
            Err(ParseError::MissingField("author".to_string()))
        );
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("walden.txt");
        fs::write(&path, BOOK).unwrap();

        let outcome = expand_file(&path, WriteMode::DryRun).unwrap();
        assert_eq!(outcome, FileOutcome::Expanded);
        assert_eq!(fs::read_to_string(&path).unwrap(), BOOK);
    }

    #[test]
    fn test_expand_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = expand_file(&dir.path().join("absent.txt"), WriteMode::Overwrite);
        assert!(matches!(result, Err(crate::VoyageError::Io(_))));
    }

    #[test]
    fn test_collect_book_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.TXT", "c.md", "notes"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = collect_book_files(dir.path(), ".txt").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_batch_report_tally() {
        let mut report = BatchReport::default();
        report.record(&FileOutcome::Expanded);
        report.record(&FileOutcome::AlreadyExpanded);
        report.record(&FileOutcome::Unparseable(ParseError::MissingField("title".into())));
        report.record(&FileOutcome::Expanded);
        assert_eq!(
            report,
            BatchReport {
                expanded: 2,
                skipped: 1,
                errors: 1
            }
        );
        assert_eq!(report.total(), 4);
    }
}
