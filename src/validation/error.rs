//! Error types for misuse of a `Validation`.
//!
//! A failed validation is a value, not an error. The type here describes the
//! other kind of failure: asking a `Validation` for a side it does not hold.

/// Represents an attempt to read the side of a `Validation` that is absent.
///
/// `Validation::unwrap_success` and `Validation::unwrap_failure` panic with
/// this error's `Display` text.
///
/// # Examples
///
/// ```rust
/// use validus::validation::NoSuchElementError;
///
/// assert_eq!(
///     NoSuchElementError::MissingValue.to_string(),
///     "no value element available on a Failure"
/// );
/// assert_eq!(
///     NoSuchElementError::MissingError.to_string(),
///     "no error element available on a Success"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoSuchElementError {
    /// The value of a `Failure` was requested.
    MissingValue,
    /// The error of a `Success` was requested.
    MissingError,
}

impl std::fmt::Display for NoSuchElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue => write!(formatter, "no value element available on a Failure"),
            Self::MissingError => write!(formatter, "no error element available on a Success"),
        }
    }
}

impl std::error::Error for NoSuchElementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_display() {
        assert_eq!(
            format!("{}", NoSuchElementError::MissingValue),
            "no value element available on a Failure"
        );
    }

    #[test]
    fn test_missing_error_display() {
        assert_eq!(
            format!("{}", NoSuchElementError::MissingError),
            "no error element available on a Success"
        );
    }

    #[test]
    fn test_no_such_element_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(NoSuchElementError::MissingValue);
        assert!(error.source().is_none());
    }
}
