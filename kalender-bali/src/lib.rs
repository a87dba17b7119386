//! # kalender-bali
//!
//! Balinese calendar engine: the Pawukon cycles, the Saka lunar calendar,
//! recurring Balinese holidays and the Indonesian national holiday table.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `kb-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use kalender_bali::almanac::calculate_bali_date;
//! use kalender_bali::pawukon::Wuku;
//! use kalender_bali::time::Date;
//!
//! let info = calculate_bali_date(Date::from_ymd(2025, 5, 3).unwrap());
//! assert_eq!(info.pawukon.wuku, Wuku::Kuningan);
//! assert_eq!(info.holidays[0].name, "Kuningan");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub use kb_core as core;

/// `Date`, `Weekday` and `Month`.
pub use kb_time as time;

/// Pawukon cycle calculator.
pub use kb_pawukon as pawukon;

/// Saka lunar calendar calculator.
pub use kb_saka as saka;

/// Holiday records, rule matcher, national table and calendars.
pub use kb_holidays as holidays;

/// Per-day aggregation and year/month listings.
pub use kb_almanac as almanac;

pub use kb_almanac::{
    calculate_bali_date, holidays_for_year, month_days, year_holidays, BaliDateInfo, DayInfo,
    HolidayOptions, YearRange,
};
pub use kb_core::{Error, Result};
pub use kb_holidays::{national_holidays, HolidayKind, HolidayRecord};
pub use kb_time::Date;
