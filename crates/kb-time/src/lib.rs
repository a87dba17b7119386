//! # kb-time
//!
//! Gregorian calendar-day type, weekday and month enums.
//!
//! Everything downstream (Pawukon cycles, Saka lunar days, holiday tables)
//! is computed from the integer serial carried by [`Date`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and inclusive day ranges.
pub mod date;

/// `Month`: month of the Gregorian year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date, DateRange};
pub use month::Month;
pub use weekday::Weekday;
