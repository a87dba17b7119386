//! # kb-pawukon
//!
//! The Balinese Pawukon: a 210-day cycle of thirty seven-day wuku, with ten
//! concurrent wara weeks of one to ten days.
//!
//! ```
//! use kb_pawukon::{pawukon_of, Pancawara, Saptawara, Wuku};
//! use kb_time::Date;
//!
//! let galungan = pawukon_of(Date::from_ymd(2025, 4, 23).unwrap());
//! assert_eq!(galungan.wuku, Wuku::Dungulan);
//! assert_eq!(galungan.saptawara, Saptawara::Buda);
//! assert_eq!(galungan.pancawara, Pancawara::Kliwon);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cycle;

/// `PawukonCoordinate` and the epoch-anchored calculator.
pub mod pawukon;

/// The ten wara (weeks of one to ten days).
pub mod wara;

/// The thirty wuku.
pub mod wuku;

pub use pawukon::{pawukon_day, pawukon_of, PawukonCoordinate, BALI_EPOCH_RD, PAWUKON_DAYS};
pub use wara::{
    Astawara, Caturwara, Dasawara, Dwiwara, Ekawara, Pancawara, Sadwara, Sangawara, Saptawara,
    Triwara,
};
pub use wuku::Wuku;
