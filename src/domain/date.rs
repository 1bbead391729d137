use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// The only accepted date layout, used for both parsing and rendering.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is a valid regex")
});

/// Errors that can occur while parsing a date token.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DateError {
    /// The token is not shaped like `YYYY-MM-DD`.
    #[error("Invalid date format '{0}': expected YYYY-MM-DD")]
    Syntax(String),

    /// The token is well-formed but names a day that does not exist.
    #[error("Invalid calendar date '{0}'")]
    Calendar(String),
}

/// Parses a date token in strict `YYYY-MM-DD` form.
///
/// The year must have exactly four digits and be at least `0001`; month and
/// day must have exactly two digits and name a real day in the proleptic
/// Gregorian calendar (so `2000-02-29` is accepted and `1900-02-29` is not).
///
/// # Errors
///
/// Returns [`DateError::Syntax`] if the token does not have the expected
/// shape, or [`DateError::Calendar`] if it does but the day does not exist.
///
/// # Examples
///
/// ```
/// use carlog::domain::date::{parse_date, DateError};
///
/// let date = parse_date("2001-11-12").unwrap();
/// assert_eq!(date.to_string(), "2001-11-12");
///
/// assert!(matches!(parse_date("2001-11-1"), Err(DateError::Syntax(_))));
/// assert!(matches!(parse_date("2000-02-30"), Err(DateError::Calendar(_))));
/// ```
pub fn parse_date(token: &str) -> Result<NaiveDate, DateError> {
    let captures = DATE_SHAPE
        .captures(token)
        .ok_or_else(|| DateError::Syntax(token.to_string()))?;

    // Each group is a run of ASCII digits short enough to fit.
    let field = |index: usize| -> Result<u32, DateError> {
        captures[index]
            .parse()
            .map_err(|_| DateError::Syntax(token.to_string()))
    };
    let (year, month, day) = (field(1)?, field(2)?, field(3)?);

    if year == 0 {
        return Err(DateError::Calendar(token.to_string()));
    }

    let year = i32::try_from(year).map_err(|_| DateError::Syntax(token.to_string()))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::Calendar(token.to_string()))
}

/// Renders a date in the same `YYYY-MM-DD` form [`parse_date`] accepts.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
