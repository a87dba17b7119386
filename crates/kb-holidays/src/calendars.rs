//! Concrete calendars.

/// Indonesian working-day calendar.
pub mod indonesia;
