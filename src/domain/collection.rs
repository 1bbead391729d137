//! In-memory record storage with decomposed fields
//!
//! A [`RecordCollection`] keeps each field of a record in its own sequence.
//! The sequences are index-aligned: the record at position `i` is made of
//! `dates[i]`, `plates[i]` and `originals[i]`. Every operation that changes
//! one sequence changes all three in the same way.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    date::parse_date,
    diagnostic::{Diagnostic, DiagnosticKind, Reporter},
    plate::{letter_key, validate_plate},
    record::RecordView,
};

/// The orderings a collection can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Ascending by date.
    Date,
    /// Ascending by the uppercased first character of the plate.
    PlateLetter,
}

/// Parsed records, stored as three parallel sequences.
///
/// A collection starts empty and is populated by [`extract`]. Sorting
/// reorders all three sequences by a single permutation, so the fields of a
/// record never drift apart.
///
/// [`extract`]: RecordCollection::extract
#[derive(Debug, Default, Clone)]
pub struct RecordCollection {
    dates: Vec<NaiveDate>,
    plates: Vec<String>,
    originals: Vec<String>,

    /// Whether plates must be `[A-Z0-9]+`.
    strict_plates: bool,
}

impl RecordCollection {
    /// Creates an empty collection that accepts any non-empty plate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict plate validation for later extractions.
    #[must_use]
    pub const fn with_strict_plates(mut self, strict: bool) -> Self {
        self.strict_plates = strict;
        self
    }

    /// Replaces the contents of the collection with the valid records in
    /// `lines`, returning a diagnostic for every line that was dropped.
    ///
    /// See [`extract_with`](Self::extract_with) for the parsing rules.
    pub fn extract<I, S>(&mut self, lines: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut diagnostics = Vec::new();
        self.extract_with(lines, &mut diagnostics);
        diagnostics
    }

    /// Replaces the contents of the collection with the valid records in
    /// `lines`, passing each dropped line to `reporter`.
    ///
    /// Each line is split at its first run of whitespace into a date token
    /// and a plate. Leading whitespace is ignored; the plate keeps everything
    /// after the separator, including any further whitespace. A line is
    /// dropped if it does not split into two non-empty parts, if the date is
    /// not a strict `YYYY-MM-DD` calendar date, or, with strict plates
    /// enabled, if the plate is not `[A-Z0-9]+`. Valid records keep their
    /// input order.
    #[instrument(skip_all, fields(strict_plates = self.strict_plates))]
    pub fn extract_with<I, S, R>(&mut self, lines: I, mut reporter: R)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Reporter,
    {
        self.clear();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match self.parse_line(line) {
                Ok((date, plate)) => {
                    tracing::debug!(%date, plate, "accepted record");
                    self.dates.push(date);
                    self.plates.push(plate.to_string());
                    self.originals.push(line.to_string());
                }
                Err(kind) => {
                    let diagnostic = Diagnostic::new(index + 1, line, kind);
                    tracing::debug!(%diagnostic, "dropped line");
                    reporter.report(&diagnostic);
                }
            }
        }

        tracing::debug!(records = self.len(), "extraction complete");
    }

    fn parse_line<'a>(&self, line: &'a str) -> Result<(NaiveDate, &'a str), DiagnosticKind> {
        let (date, plate) = split_line(line).ok_or(DiagnosticKind::Format)?;
        let date = parse_date(date)?;
        if self.strict_plates {
            validate_plate(plate)?;
        }
        Ok((date, plate))
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.dates.clear();
        self.plates.clear();
        self.originals.clear();
    }

    /// Sorts the records into the given order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Date => self.sort_by_date(),
            SortOrder::PlateLetter => self.sort_by_plate_letter(),
        }
    }

    /// Sorts records by ascending date.
    ///
    /// Records with equal dates keep their relative order.
    #[instrument(skip(self))]
    pub fn sort_by_date(&mut self) {
        let mut order = self.identity();
        order.sort_by_key(|&i| self.dates[i]);
        self.apply_permutation(&order);
    }

    /// Sorts records by the uppercased first character of the plate.
    ///
    /// An empty plate sorts before any other. Records with equal keys keep
    /// their relative order.
    #[instrument(skip(self))]
    pub fn sort_by_plate_letter(&mut self) {
        let mut order = self.identity();
        order.sort_by_cached_key(|&i| letter_key(&self.plates[i]));
        self.apply_permutation(&order);
    }

    fn identity(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    /// Moves the record at `order[i]` to position `i` in every sequence.
    fn apply_permutation(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.len());
        permute(&mut self.dates, order);
        permute(&mut self.plates, order);
        permute(&mut self.originals, order);
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the record at `index`, if there is one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RecordView<'_>> {
        Some(RecordView {
            date: *self.dates.get(index)?,
            plate: self.plates.get(index)?,
            original: self.originals.get(index)?,
        })
    }

    /// Iterates over the records in their current order.
    pub fn iter(&self) -> impl Iterator<Item = RecordView<'_>> {
        self.dates
            .iter()
            .zip(&self.plates)
            .zip(&self.originals)
            .map(|((date, plate), original)| RecordView {
                date: *date,
                plate,
                original,
            })
    }

    /// Returns the dates, in record order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the plates, in record order.
    #[must_use]
    pub fn plates(&self) -> &[String] {
        &self.plates
    }

    /// Returns the original lines, in record order.
    #[must_use]
    pub fn originals(&self) -> &[String] {
        &self.originals
    }

    /// Returns a displayable listing of the records, one `YYYY-MM-DD PLATE`
    /// line each.
    ///
    /// # Examples
    ///
    /// ```
    /// use carlog::RecordCollection;
    ///
    /// let mut records = RecordCollection::new();
    /// records.extract(["2004-03-10 E003EK", "2001-11-12 A000BC"]);
    /// records.sort_by_date();
    ///
    /// assert_eq!(
    ///     records.display().to_string(),
    ///     "2001-11-12 A000BC\n2004-03-10 E003EK\n"
    /// );
    /// ```
    #[must_use]
    pub const fn display(&self) -> DisplayRecords<'_> {
        DisplayRecords { records: self }
    }
}

/// A wrapper that formats every record in a collection.
///
/// Returned by [`RecordCollection::display`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayRecords<'a> {
    records: &'a RecordCollection,
}

impl fmt::Display for DisplayRecords<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for record in self.records.iter() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Splits a line into its date token and plate.
///
/// Returns `None` unless both parts are non-empty.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let (date, rest) = line.trim_start().split_once(char::is_whitespace)?;
    let plate = rest.trim_start();
    if date.is_empty() || plate.is_empty() {
        return None;
    }
    Some((date, plate))
}

fn permute<T: Clone>(items: &mut Vec<T>, order: &[usize]) {
    let reordered: Vec<T> = order.iter().map(|&i| items[i].clone()).collect();
    *items = reordered;
}
