//! # kb-saka
//!
//! The Balinese Saka lunisolar calendar: Saka year, lunar month (sasih),
//! day within the waxing or waning half-month, and the Purnama (full moon)
//! and Tilem (new moon) markers.
//!
//! ```
//! use kb_saka::{saka_of, Sasih};
//! use kb_time::Date;
//!
//! let nyepi = saka_of(Date::from_ymd(2025, 3, 29).unwrap());
//! assert_eq!(nyepi.year, 1947);
//! assert_eq!(nyepi.sasih, Sasih::Kadasa);
//! assert_eq!(nyepi.penanggal, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `SakaCoordinate` and the epoch-anchored lunar-day calculator.
pub mod saka;

/// `Sasih`: lunar month names.
pub mod sasih;

pub use saka::{saka_of, SakaCoordinate, EPOCH_SAKA_YEAR, LUNAR_EPOCH_RD, NGUNARATRI_PHASE};
pub use sasih::Sasih;
