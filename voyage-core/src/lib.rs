//! Voyage Core Library
//!
//! This crate reads plain-text book content files, recovers a handful of
//! fields from their loosely structured sections, and appends generated
//! analysis sections built from prose templates.

pub mod error;
pub mod extractor;
pub mod generator;
pub mod pipeline;
pub mod types;

pub use error::{ParseError, Result, VoyageError};
pub use extractor::parse;
pub use generator::generate;
pub use pipeline::{
    collect_book_files, expand_file, expand_text, BatchReport, Expansion, FileOutcome, WriteMode,
};
pub use types::{BookRecord, Theme};
