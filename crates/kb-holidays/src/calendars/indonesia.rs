//! Indonesia calendar.

use kb_time::Date;

use crate::calendar::Calendar;
use crate::holiday::{HolidayKind, HolidayRecord};
use crate::national::national_holidays_on;

/// Indonesia calendar.
///
/// Weekends and every day in [`national_holidays`](crate::national_holidays)
/// are days off. Cuti
/// bersama days count as days off unless disabled with
/// [`Indonesia::without_cuti_bersama`]. Years outside the official table
/// only know the five fixed-date holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indonesia {
    include_cuti_bersama: bool,
}

impl Default for Indonesia {
    fn default() -> Self {
        Self::new()
    }
}

impl Indonesia {
    /// Calendar observing national holidays and cuti bersama.
    pub fn new() -> Self {
        Self {
            include_cuti_bersama: true,
        }
    }

    /// Calendar observing national holidays only.
    pub fn without_cuti_bersama() -> Self {
        Self {
            include_cuti_bersama: false,
        }
    }

    /// Return `true` if cuti bersama days are days off.
    pub fn includes_cuti_bersama(&self) -> bool {
        self.include_cuti_bersama
    }

    /// Holiday records observed by this calendar on `date`.
    pub fn holidays_on(&self, date: Date) -> Vec<HolidayRecord> {
        national_holidays_on(date)
            .into_iter()
            .filter(|h| self.observes(h.kind))
            .collect()
    }

    fn observes(&self, kind: HolidayKind) -> bool {
        match kind {
            HolidayKind::National => true,
            HolidayKind::CutiBersama => self.include_cuti_bersama,
            _ => false,
        }
    }
}

impl Calendar for Indonesia {
    fn name(&self) -> &str {
        "Indonesia"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.holidays_on(date).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn independence_day() {
        let cal = Indonesia::new();
        assert!(!cal.is_business_day(date(2024, 8, 17)));
        // Friday, from the fixed-date projection.
        let d = date(2029, 8, 17);
        assert!(!cal.is_business_day(d));
        assert!(cal.holidays_on(d)[0].is_projected);
        // Year 1 lies outside every table yet still has its fixed dates.
        assert_eq!(cal.holidays_on(date(1, 1, 1)).len(), 1);
    }

    #[test]
    fn nyepi_2025() {
        let cal = Indonesia::new();
        let d = date(2025, 3, 29);
        let on = cal.holidays_on(d);
        assert_eq!(on.len(), 1);
        assert_eq!(on[0].name, "Hari Suci Nyepi Tahun Baru Saka 1947");
    }

    #[test]
    fn cuti_bersama_toggle() {
        // Wednesday 2025-04-02, Cuti Bersama Idul Fitri.
        let d = date(2025, 4, 2);
        assert!(!Indonesia::new().is_business_day(d));
        assert!(Indonesia::without_cuti_bersama().is_business_day(d));
        assert!(Indonesia::without_cuti_bersama().holidays_on(d).is_empty());
    }

    #[test]
    fn ordinary_weekday() {
        // Tuesday
        assert!(Indonesia::new().is_business_day(date(2025, 4, 22)));
    }
}
