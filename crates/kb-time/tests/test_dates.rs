//! Integration tests for `Date`: serial/ymd agreement, ISO text round trips
//! and weekday progression across the whole supported range.

use kb_time::{days_in_month, is_leap_year, Date, Month, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2025));
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
}

#[test]
fn year_bounds_cover_whole_year() {
    let (first, last) = Date::year_bounds(2024).unwrap();
    assert_eq!(first, date(2024, 1, 1));
    assert_eq!(last, date(2024, 12, 31));
    assert_eq!(first.days_through(last).count(), 366);
    assert!(Date::year_bounds(0).is_err());
}

#[test]
fn month_of_year() {
    assert_eq!(date(2025, 8, 17).month_of_year(), Month::Agustus);
    assert_eq!(date(2024, 5, 1).month_of_year().to_string(), "Mei");
}

#[test]
fn consecutive_days_cross_month_and_year() {
    let d = date(2024, 12, 31);
    assert_eq!(d.succ(), Some(date(2025, 1, 1)));
    assert_eq!(date(2025, 3, 1).pred(), Some(date(2025, 2, 28)));
    assert_eq!(date(2024, 1, 1).days_between(date(2025, 1, 1)), 366);
    assert_eq!(date(2025, 1, 1) - date(2024, 1, 1), 366);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_iso_strings() {
    let d = date(2025, 4, 23);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-04-23\"");
    let back: Date = serde_json::from_str("\"2025-04-23\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2025-02-30\"").is_err());
}

#[cfg(feature = "chrono")]
#[test]
fn chrono_conversions_agree() {
    let nd = chrono::NaiveDate::from_ymd_opt(2025, 4, 23).unwrap();
    let d = Date::try_from(nd).unwrap();
    assert_eq!(d, date(2025, 4, 23));
    assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), nd);
}

proptest! {
    #[test]
    fn serial_roundtrips_through_components(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let again = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(again.serial(), serial);
    }

    #[test]
    fn iso_text_roundtrips(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let text = d.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(text.parse::<Date>().unwrap(), d);
    }

    #[test]
    fn weekday_advances_one_step_per_day(serial in 1i32..3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let next = d.succ().unwrap();
        let expected = d.weekday().ordinal() % 7 + 1;
        prop_assert_eq!(next.weekday(), Weekday::from_ordinal(expected).unwrap());
    }
}
