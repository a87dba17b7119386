//! Year and month listings combining Balinese and national holidays.

use kb_core::Result;
use kb_holidays::{national_holidays, Calendar, HolidayKind, HolidayRecord, Indonesia};
use kb_time::Date;

use crate::bali_date::{calculate_bali_date, year_holidays, BaliDateInfo};
use crate::options::HolidayOptions;

/// One day of a month view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayInfo {
    /// Balinese annotation of the day.
    pub bali: BaliDateInfo,
    /// Holidays on the day that pass the options' filter, Balinese first.
    pub holidays: Vec<HolidayRecord>,
    /// Weekend or observed national holiday.
    pub is_day_off: bool,
}

fn filtered_national(year: u16, opts: &HolidayOptions) -> Result<Vec<HolidayRecord>> {
    if !opts.show_national {
        return Ok(Vec::new());
    }
    Ok(national_holidays(year)?
        .into_iter()
        .filter(|h| opts.shows(h.kind))
        .collect())
}

/// Balinese and national holidays of `year` selected by `opts`, sorted by
/// date. Records sharing a date keep Balinese-before-national order.
///
/// # Errors
/// `Error::Precondition` if `year` is outside `opts.year_range`.
pub fn holidays_for_year(year: u16, opts: &HolidayOptions) -> Result<Vec<HolidayRecord>> {
    opts.check_year(year)?;
    let mut all = if opts.show_bali {
        year_holidays(year)?
    } else {
        Vec::new()
    };
    all.extend(filtered_national(year, opts)?);
    all.sort_by_key(|h| h.date);
    Ok(all)
}

/// Every day of `month` in `year`, annotated for a month view.
///
/// # Errors
/// `Error::Precondition` if `year` is outside `opts.year_range`;
/// `Error::Date` if `month` is not 1–12.
pub fn month_days(year: u16, month: u8, opts: &HolidayOptions) -> Result<Vec<DayInfo>> {
    opts.check_year(year)?;
    let first = Date::from_ymd(year, month, 1)?;
    let national = filtered_national(year, opts)?;
    let calendar = if opts.shows(HolidayKind::CutiBersama) {
        Indonesia::new()
    } else {
        Indonesia::without_cuti_bersama()
    };

    let days = first
        .days_through(first.end_of_month())
        .map(|date| {
            let bali = calculate_bali_date(date);
            let mut holidays = if opts.show_bali {
                bali.holidays.clone()
            } else {
                Vec::new()
            };
            holidays.extend(national.iter().filter(|h| h.date == date).cloned());
            DayInfo {
                is_day_off: calendar.is_holiday(date),
                bali,
                holidays,
            }
        })
        .collect();
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_outside_range_is_rejected() {
        let opts = HolidayOptions::default();
        assert!(matches!(
            holidays_for_year(2019, &opts),
            Err(Error::Precondition(_))
        ));
        assert!(month_days(2031, 1, &opts).is_err());
    }

    #[test]
    fn bad_month_is_a_date_error() {
        let opts = HolidayOptions::default();
        assert!(matches!(month_days(2025, 13, &opts), Err(Error::Date(_))));
    }

    #[test]
    fn flags_select_families() {
        let all = HolidayOptions::default();
        let bali_only = all.with_national(false).with_cuti_bersama(false);
        let no_cuti = all.with_cuti_bersama(false);

        let list = holidays_for_year(2025, &bali_only).unwrap();
        assert!(list.iter().all(|h| h.kind.is_bali()));

        let list = holidays_for_year(2025, &no_cuti).unwrap();
        assert!(list.iter().any(|h| h.kind == HolidayKind::National));
        assert!(list.iter().all(|h| h.kind != HolidayKind::CutiBersama));

        let no_national = all.with_bali(false).with_national(false);
        assert!(no_national.show_cuti_bersama);
        assert!(holidays_for_year(2025, &no_national).unwrap().is_empty());

        let none = all.with_bali(false).with_national(false).with_cuti_bersama(false);
        assert!(holidays_for_year(2025, &none).unwrap().is_empty());
    }

    #[test]
    fn april_2025_month_view() {
        let days = month_days(2025, 4, &HolidayOptions::default()).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].bali.gregorian, date(2025, 4, 1));

        let galungan = &days[22];
        assert_eq!(galungan.bali.gregorian, date(2025, 4, 23));
        assert_eq!(galungan.holidays[0].name, "Galungan");
        assert!(!galungan.is_day_off);

        // Cuti Bersama Idul Fitri, a Wednesday.
        assert!(days[1].is_day_off);
        let days = month_days(2025, 4, &HolidayOptions::default().with_cuti_bersama(false)).unwrap();
        assert!(!days[1].is_day_off);
        assert!(days[1].holidays.is_empty());

        // Hiding national holidays drops cuti bersama from the view too.
        let days = month_days(2025, 4, &HolidayOptions::default().with_national(false)).unwrap();
        assert!(!days[1].is_day_off);
        assert!(days[1].holidays.is_empty());
    }
}
