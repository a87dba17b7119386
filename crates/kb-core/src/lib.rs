//! # kb-core
//!
//! Error definitions shared across all kalender-bali crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
