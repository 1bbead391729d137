use std::fmt;

use crate::domain::{DateError, PlateError};

/// Why a line was dropped during extraction.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DiagnosticKind {
    /// The line does not contain a date token followed by a plate.
    #[error("Invalid format: expected 'YYYY-MM-DD PLATE'")]
    Format,

    /// The first token is not a valid date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The plate failed strict validation.
    #[error(transparent)]
    Plate(#[from] PlateError),
}

/// A malformed input line, identified by position and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based position of the line in the input.
    pub line: usize,
    /// The offending line, verbatim.
    pub text: String,
    /// What was wrong with it.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic for the line at the given 1-based position.
    #[must_use]
    pub fn new(line: usize, text: impl Into<String>, kind: impl Into<DiagnosticKind>) -> Self {
        Self {
            line,
            text: text.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {} ('{}'): {}", self.line, self.text, self.kind)
    }
}

/// Receives diagnostics as extraction encounters them.
pub trait Reporter {
    /// Called once per dropped line, in input order.
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Collects diagnostics.
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Discards diagnostics.
impl Reporter for () {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
