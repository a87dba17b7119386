//! # kb-almanac
//!
//! Annotates Gregorian days with their Balinese calendar position and
//! holidays, and builds the year and month listings a calendar view shows.
//!
//! ```
//! use kb_almanac::{calculate_bali_date, holidays_for_year, HolidayOptions};
//! use kb_time::Date;
//!
//! let info = calculate_bali_date(Date::from_ymd(2025, 4, 23).unwrap());
//! assert_eq!(info.holidays[0].name, "Galungan");
//!
//! let year = holidays_for_year(2025, &HolidayOptions::default()).unwrap();
//! assert!(year.windows(2).all(|w| w[0].date <= w[1].date));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BaliDateInfo` and the per-day / per-year aggregators.
pub mod bali_date;

/// Combined year listing and month view.
pub mod listing;

/// `HolidayOptions` and `YearRange`.
pub mod options;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bali_date::{calculate_bali_date, year_holidays, BaliDateInfo};
pub use listing::{holidays_for_year, month_days, DayInfo};
pub use options::{HolidayOptions, YearRange};
