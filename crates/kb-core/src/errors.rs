//! Error types for kalender-bali.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. Computation never fails
//! once a valid date exists; errors only arise while validating input.

use thiserror::Error;

/// The top-level error type used throughout kalender-bali.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A year/month/day triple or serial that is not a real calendar day.
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed (e.g. a malformed `YYYY-MM-DD`).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout kalender-bali.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kb_core::{ensure, errors::Error};
/// fn positive(x: i32) -> kb_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: i32) -> Result<i32> {
        ensure!(x < 10, "x too large: {x}");
        Ok(x)
    }

    #[test]
    fn ensure_passes_through() {
        assert_eq!(checked(3), Ok(3));
    }

    #[test]
    fn ensure_reports_precondition() {
        assert_eq!(
            checked(12),
            Err(Error::Precondition("x too large: 12".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("month 13 out of range [1, 12]".into()).to_string(),
            "date error: month 13 out of range [1, 12]"
        );
        assert_eq!(
            Error::Parse("bad".into()).to_string(),
            "parse error: bad"
        );
        assert_eq!(
            Error::Precondition("year 2031 outside 2020-2030".into()).to_string(),
            "precondition not satisfied: year 2031 outside 2020-2030"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
