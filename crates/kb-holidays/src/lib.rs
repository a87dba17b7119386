//! # kb-holidays
//!
//! Holiday records for the Balinese calendar: the Pawukon holiday rule
//! matcher, the Indonesian national holiday table with its fixed-date
//! fallback, and a working-day [`Calendar`] built on that table.
//!
//! ```
//! use kb_holidays::{match_holidays, HolidayKind};
//! use kb_pawukon::pawukon_of;
//! use kb_time::Date;
//!
//! let d = Date::from_ymd(2025, 4, 23).unwrap();
//! let holidays = match_holidays(d, &pawukon_of(d));
//! assert_eq!(holidays[0].kind, HolidayKind::Galungan);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Pawukon holiday rule table and matcher.
pub mod bali;

/// `Calendar` trait.
pub mod calendar;

/// Concrete calendars.
pub mod calendars;

/// `HolidayRecord` and `HolidayKind`.
pub mod holiday;

/// Official national holiday table and fixed-date fallback.
pub mod national;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bali::{match_holidays, matching_rules, HolidayRule, BALI_RULES};
pub use calendar::Calendar;
pub use calendars::indonesia::Indonesia;
pub use holiday::{HolidayKind, HolidayRecord};
pub use national::{
    fixed_date_holidays, has_official_data, national_holidays, national_holidays_on,
};
