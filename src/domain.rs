//! Domain models for record handling.
//!
//! This module contains the record collection, the strict date and plate
//! rules applied while extracting records, and configuration.

/// Parallel-sequence storage of parsed records.
pub mod collection;
pub use collection::{RecordCollection, SortOrder};

mod config;
pub use config::Config;

/// Strict `YYYY-MM-DD` date parsing.
pub mod date;
pub use date::DateError;

/// Typed per-line diagnostics.
pub mod diagnostic;
pub use diagnostic::{Diagnostic, DiagnosticKind, Reporter};

/// Plate sort keys and validation.
pub mod plate;
pub use plate::PlateError;

mod record;
pub use record::RecordView;
