//! Dated licence-plate records
//!
//! Records are `YYYY-MM-DD PLATE` lines. They are parsed into a
//! [`RecordCollection`], malformed lines are reported as [`Diagnostic`]s, and
//! the valid records can be sorted by date or by the first letter of the
//! plate.

pub mod domain;
pub use domain::{
    Config, DateError, Diagnostic, DiagnosticKind, PlateError, RecordCollection, RecordView,
    Reporter, SortOrder,
};

/// The built-in record list.
pub mod dataset;
