//! `Calendar` trait: which days are working days.

use kb_time::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Indonesia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a day off (holiday or weekend).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Days off in `[from, to]`, optionally including plain weekends.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        from.days_through(to)
            .filter(|d| self.is_holiday(*d) && (include_weekends || !self.is_weekend(*d)))
            .collect()
    }
}
