//! Core types for extracted book records

mod record;

pub use record::{BookRecord, Theme};
