//! Indonesian national holidays.
//!
//! Years covered by the joint ministerial decree (SKB 3 Menteri) are served
//! from [`OFFICIAL_HOLIDAYS`]. Any other year falls back to the five holidays
//! fixed by law to a calendar date, every one marked projected.

use kb_core::Result;
use kb_time::Date;

use crate::holiday::{HolidayKind, HolidayRecord};

/// One row of the official table, without its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficialHoliday {
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Name as published.
    pub name: &'static str,
    /// [`HolidayKind::National`] or [`HolidayKind::CutiBersama`].
    pub kind: HolidayKind,
    /// Announced ahead of the decree.
    pub is_projected: bool,
}

const fn national(month: u8, day: u8, name: &'static str) -> OfficialHoliday {
    OfficialHoliday {
        month,
        day,
        name,
        kind: HolidayKind::National,
        is_projected: false,
    }
}

const fn cuti(month: u8, day: u8, name: &'static str) -> OfficialHoliday {
    OfficialHoliday {
        month,
        day,
        name,
        kind: HolidayKind::CutiBersama,
        is_projected: false,
    }
}

const fn projected(row: OfficialHoliday) -> OfficialHoliday {
    OfficialHoliday {
        is_projected: true,
        ..row
    }
}

const IDUL_FITRI_1445: &str = "Hari Raya Idul Fitri 1445 H";
const CUTI_IDUL_FITRI_1445: &str = "Cuti Bersama Idul Fitri 1445 H";
const IDUL_FITRI_1446: &str = "Hari Raya Idul Fitri 1446 H";
const CUTI_IDUL_FITRI_1446: &str = "Cuti Bersama Idul Fitri 1446 H";

const HOLIDAYS_2024: &[OfficialHoliday] = &[
    national(1, 1, "Tahun Baru 2024 Masehi"),
    national(2, 8, "Isra Mikraj Nabi Muhammad SAW"),
    cuti(2, 9, "Cuti Bersama Tahun Baru Imlek"),
    national(2, 10, "Tahun Baru Imlek 2575 Kongzili"),
    national(3, 11, "Hari Suci Nyepi Tahun Baru Saka 1946"),
    cuti(3, 12, "Cuti Bersama Hari Suci Nyepi"),
    national(3, 29, "Wafat Yesus Kristus"),
    national(3, 31, "Hari Paskah"),
    cuti(4, 8, CUTI_IDUL_FITRI_1445),
    cuti(4, 9, CUTI_IDUL_FITRI_1445),
    national(4, 10, IDUL_FITRI_1445),
    national(4, 11, IDUL_FITRI_1445),
    cuti(4, 12, CUTI_IDUL_FITRI_1445),
    cuti(4, 15, CUTI_IDUL_FITRI_1445),
    national(5, 1, "Hari Buruh Internasional"),
    national(5, 9, "Kenaikan Yesus Kristus"),
    cuti(5, 10, "Cuti Bersama Kenaikan Yesus Kristus"),
    national(5, 23, "Hari Raya Waisak 2568 BE"),
    cuti(5, 24, "Cuti Bersama Hari Raya Waisak"),
    national(6, 1, "Hari Lahir Pancasila"),
    national(6, 17, "Hari Raya Idul Adha 1445 H"),
    cuti(6, 18, "Cuti Bersama Idul Adha 1445 H"),
    national(7, 7, "Tahun Baru Islam 1446 H"),
    national(8, 17, "Hari Kemerdekaan RI"),
    national(9, 16, "Maulid Nabi Muhammad SAW"),
    national(12, 25, "Hari Raya Natal"),
    cuti(12, 26, "Cuti Bersama Hari Raya Natal"),
];

const HOLIDAYS_2025: &[OfficialHoliday] = &[
    national(1, 1, "Tahun Baru 2025 Masehi"),
    national(1, 27, "Isra Mikraj Nabi Muhammad SAW"),
    cuti(1, 28, "Cuti Bersama Tahun Baru Imlek"),
    national(1, 29, "Tahun Baru Imlek 2576 Kongzili"),
    cuti(3, 28, "Cuti Bersama Hari Suci Nyepi"),
    national(3, 29, "Hari Suci Nyepi Tahun Baru Saka 1947"),
    national(3, 31, IDUL_FITRI_1446),
    national(4, 1, IDUL_FITRI_1446),
    cuti(4, 2, CUTI_IDUL_FITRI_1446),
    cuti(4, 3, CUTI_IDUL_FITRI_1446),
    cuti(4, 4, CUTI_IDUL_FITRI_1446),
    cuti(4, 7, CUTI_IDUL_FITRI_1446),
    national(4, 18, "Wafat Yesus Kristus"),
    national(4, 20, "Hari Paskah"),
    national(5, 1, "Hari Buruh Internasional"),
    national(5, 12, "Hari Raya Waisak 2569 BE"),
    cuti(5, 13, "Cuti Bersama Hari Raya Waisak"),
    national(5, 29, "Kenaikan Yesus Kristus"),
    cuti(5, 30, "Cuti Bersama Kenaikan Yesus Kristus"),
    national(6, 1, "Hari Lahir Pancasila"),
    national(6, 6, "Hari Raya Idul Adha 1446 H"),
    cuti(6, 9, "Cuti Bersama Idul Adha 1446 H"),
    national(6, 27, "Tahun Baru Islam 1447 H"),
    national(8, 17, "Hari Kemerdekaan RI"),
    national(9, 5, "Maulid Nabi Muhammad SAW"),
    national(12, 25, "Hari Raya Natal"),
    cuti(12, 26, "Cuti Bersama Hari Raya Natal"),
];

// Lunar-dated rows are announced ahead of the decree.
const HOLIDAYS_2026: &[OfficialHoliday] = &[
    national(1, 1, "Tahun Baru 2026 Masehi"),
    projected(national(1, 16, "Isra Mikraj Nabi Muhammad SAW")),
    projected(national(2, 17, "Tahun Baru Imlek 2577 Kongzili")),
    projected(national(3, 18, "Hari Suci Nyepi Tahun Baru Saka 1948")),
    projected(national(3, 20, "Hari Raya Idul Fitri 1447 H")),
    projected(national(3, 21, "Hari Raya Idul Fitri 1447 H")),
    national(4, 3, "Wafat Yesus Kristus"),
    national(5, 1, "Hari Buruh Internasional"),
    national(5, 14, "Kenaikan Yesus Kristus"),
    projected(national(5, 27, "Hari Raya Idul Adha 1447 H")),
    projected(national(5, 31, "Hari Raya Waisak 2570 BE")),
    national(6, 1, "Hari Lahir Pancasila"),
    projected(national(6, 16, "Tahun Baru Islam 1448 H")),
    national(8, 17, "Hari Kemerdekaan RI"),
    projected(national(8, 25, "Maulid Nabi Muhammad SAW")),
    national(12, 25, "Hari Raya Natal"),
];

/// Official holidays by year, each year's rows in date order.
pub const OFFICIAL_HOLIDAYS: &[(u16, &[OfficialHoliday])] = &[
    (2024, HOLIDAYS_2024),
    (2025, HOLIDAYS_2025),
    (2026, HOLIDAYS_2026),
];

/// National holidays whose date is fixed by law.
pub const FIXED_DATE_HOLIDAYS: &[OfficialHoliday] = &[
    national(1, 1, "Tahun Baru Masehi"),
    national(5, 1, "Hari Buruh Internasional"),
    national(6, 1, "Hari Lahir Pancasila"),
    national(8, 17, "Hari Kemerdekaan RI"),
    national(12, 25, "Hari Raya Natal"),
];

fn official_rows(year: u16) -> Option<&'static [OfficialHoliday]> {
    OFFICIAL_HOLIDAYS
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, rows)| *rows)
}

/// Return `true` if `year` is served from the official table.
pub fn has_official_data(year: u16) -> bool {
    official_rows(year).is_some()
}

fn record(row: &OfficialHoliday, date: Date, force_projected: bool) -> HolidayRecord {
    HolidayRecord::new(date, row.name, row.kind).projected(row.is_projected || force_projected)
}

/// Rows serving `year`, and whether they are all projected.
fn rows_for(year: u16) -> (&'static [OfficialHoliday], bool) {
    match official_rows(year) {
        Some(rows) => (rows, false),
        None => (FIXED_DATE_HOLIDAYS, true),
    }
}

fn to_records(
    year: u16,
    rows: &[OfficialHoliday],
    force_projected: bool,
) -> Result<Vec<HolidayRecord>> {
    rows.iter()
        .map(|row| Ok(record(row, Date::from_ymd(year, row.month, row.day)?, force_projected)))
        .collect()
}

/// The five fixed-date holidays of `year`, all marked projected.
///
/// # Errors
/// `Error::Date` if `year` is outside 1–9999.
pub fn fixed_date_holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    to_records(year, FIXED_DATE_HOLIDAYS, true)
}

/// National and cuti-bersama holidays of `year`, in date order.
///
/// Years without official data yield [`fixed_date_holidays`].
///
/// # Errors
/// `Error::Date` if `year` is outside 1–9999.
pub fn national_holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    let (rows, projected) = rows_for(year);
    if projected {
        tracing::debug!(year, "no official holiday data, using fixed-date projection");
    }
    to_records(year, rows, projected)
}

/// The records of [`national_holidays`] that fall on `date`.
///
/// Only the matching rows are turned into records.
pub fn national_holidays_on(date: Date) -> Vec<HolidayRecord> {
    let (year, month, day) = (date.year(), date.month(), date.day_of_month());
    let (rows, projected) = rows_for(year);
    rows.iter()
        .filter(|row| row.month == month && row.day == day)
        .map(|row| record(row, date, projected))
        .collect()
}
