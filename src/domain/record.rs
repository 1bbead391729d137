// RecordView - a borrowed view of one record for display and serialization.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::date::format_date;

/// A borrowed view of a single record.
///
/// The collection stores each field in its own sequence; this view gathers
/// the fields at one index back together without cloning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordView<'a> {
    /// The parsed date.
    pub date: NaiveDate,
    /// The plate, everything after the date token.
    pub plate: &'a str,
    /// The input line the record was parsed from.
    pub original: &'a str,
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", format_date(self.date), self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> RecordView<'static> {
        RecordView {
            date: NaiveDate::from_ymd_opt(2000, 3, 10).unwrap(),
            plate: "K009VO",
            original: "2000-03-10   K009VO",
        }
    }

    #[test]
    fn display_normalises_separator() {
        assert_eq!(view().to_string(), "2000-03-10 K009VO");
    }

    #[test]
    fn serializes_all_fields() {
        let json = serde_json::to_value(view()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2000-03-10",
                "plate": "K009VO",
                "original": "2000-03-10   K009VO",
            })
        );
    }
}
