//! End-to-end scenarios for the Balinese date aggregator and listings.

use kb_almanac::{
    calculate_bali_date, holidays_for_year, month_days, year_holidays, HolidayOptions, YearRange,
};
use kb_holidays::{national_holidays, HolidayKind};
use kb_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn known_holidays() {
    for (d, kind) in [
        (date(2025, 4, 23), HolidayKind::Galungan),
        (date(2025, 5, 3), HolidayKind::Kuningan),
        (date(2024, 7, 13), HolidayKind::Saraswati),
    ] {
        let info = calculate_bali_date(d);
        assert_eq!(info.holidays.len(), 1, "{d}");
        assert_eq!(info.holidays[0].kind, kind);
        assert_eq!(info.holidays[0].date, d);
    }
}

#[test]
fn year_listing_has_every_pawukon_holiday() {
    // 365 days cover each 210-day rule once or twice.
    for year in 2020..=2030 {
        let list = year_holidays(year).unwrap();
        let (first, last) = Date::year_bounds(year).unwrap();
        assert!(list.iter().all(|h| first <= h.date && h.date <= last));
        for name in ["Galungan", "Kuningan", "Saraswati", "Pagerwesi", "Tumpek Uduh"] {
            let n = list.iter().filter(|h| h.name == name).count();
            assert!((1..=2).contains(&n), "{year}: {name} x{n}");
        }
    }
}

#[test]
fn tumpek_in_2025() {
    let tumpek: Vec<(String, Date)> = year_holidays(2025)
        .unwrap()
        .into_iter()
        .filter(|h| h.kind == HolidayKind::Tumpek)
        .map(|h| (h.name, h.date))
        .collect();
    // Only the Wariga and Wayang rows can fall on Saniscara Kliwon.
    assert!(tumpek
        .iter()
        .all(|(name, _)| name == "Tumpek Uduh" || name == "Tumpek Wayang"));
    assert!(!tumpek.iter().any(|(_, d)| *d == date(2025, 2, 22)));
    assert!(tumpek.contains(&("Tumpek Uduh".to_string(), date(2025, 3, 29))));
}

#[test]
fn combined_2025_listing() {
    let list = holidays_for_year(2025, &HolidayOptions::default()).unwrap();
    let bali = year_holidays(2025).unwrap();
    let national = national_holidays(2025).unwrap();
    assert_eq!(list.len(), bali.len() + national.len());
    assert!(list.windows(2).all(|w| w[0].date <= w[1].date));

    let nyepi = list
        .iter()
        .find(|h| h.date == date(2025, 3, 29) && h.kind == HolidayKind::National)
        .unwrap();
    assert!(nyepi.name.contains("Nyepi"));
    assert!(list
        .iter()
        .any(|h| h.kind == HolidayKind::CutiBersama && h.name.starts_with("Cuti Bersama Idul Fitri")));
}

#[test]
fn projected_years_inside_a_wider_range() {
    let opts = HolidayOptions::default().with_year_range(YearRange::new(2020, 2040).unwrap());
    let list = holidays_for_year(2030, &opts).unwrap();
    let merdeka = list
        .iter()
        .find(|h| h.date == date(2030, 8, 17))
        .unwrap();
    assert_eq!(merdeka.name, "Hari Kemerdekaan RI");
    assert!(merdeka.is_projected);
    assert!(holidays_for_year(2040, &opts).is_ok());
    assert!(holidays_for_year(2041, &opts).is_err());
}

#[test]
fn month_view_matches_year_listing() {
    let opts = HolidayOptions::default();
    let year = holidays_for_year(2024, &opts).unwrap();
    let from_months: Vec<_> = (1..=12)
        .flat_map(|m| month_days(2024, m, &opts).unwrap())
        .flat_map(|d| d.holidays)
        .collect();
    assert_eq!(from_months, year);
}

#[test]
fn leap_february() {
    let days = month_days(2024, 2, &HolidayOptions::default()).unwrap();
    assert_eq!(days.len(), 29);
    assert_eq!(days[28].bali.gregorian, date(2024, 2, 29));
}

proptest! {
    #[test]
    fn year_holidays_are_ordered_and_in_year(year in 1u16..=9999) {
        let list = year_holidays(year).unwrap();
        for w in list.windows(2) {
            prop_assert!(w[0].date <= w[1].date);
        }
        prop_assert!(list.iter().all(|h| h.date.year() == year));
    }

    #[test]
    fn calculate_bali_date_is_pure(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(calculate_bali_date(d), calculate_bali_date(d));
    }
}
