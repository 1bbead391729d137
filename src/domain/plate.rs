/// Errors returned by strict plate validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PlateError {
    /// The plate is empty.
    #[error("Plate is empty")]
    Empty,

    /// The plate contains a character other than A-Z or 0-9.
    #[error("Invalid plate '{plate}': '{ch}' is not an uppercase letter or digit")]
    InvalidChar {
        /// The rejected plate.
        plate: String,
        /// The first offending character.
        ch: char,
    },
}

/// Returns the key used to order records by plate letter.
///
/// This is the plate's first character, uppercased. Some characters uppercase
/// to more than one character, so the key is a string. An empty plate yields
/// an empty key, which orders before every other key.
///
/// # Examples
///
/// ```
/// use carlog::domain::plate::letter_key;
///
/// assert_eq!(letter_key("k009vo"), "K");
/// assert_eq!(letter_key("ß12"), "SS");
/// assert_eq!(letter_key(""), "");
/// ```
#[must_use]
pub fn letter_key(plate: &str) -> String {
    plate
        .chars()
        .next()
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_default()
}

/// Checks that a plate consists only of ASCII uppercase letters and digits.
///
/// # Errors
///
/// Returns [`PlateError::Empty`] for an empty plate and
/// [`PlateError::InvalidChar`] for the first character outside `[A-Z0-9]`.
pub fn validate_plate(plate: &str) -> Result<(), PlateError> {
    if plate.is_empty() {
        return Err(PlateError::Empty);
    }

    match plate
        .chars()
        .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
    {
        Some(ch) => Err(PlateError::InvalidChar {
            plate: plate.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}
