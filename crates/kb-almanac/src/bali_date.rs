//! Per-day aggregation of the Pawukon, Saka and holiday calculators.

use kb_core::Result;
use kb_holidays::{match_holidays, HolidayRecord};
use kb_pawukon::{pawukon_of, PawukonCoordinate};
use kb_saka::{saka_of, SakaCoordinate};
use kb_time::Date;

/// Everything the Balinese calendar says about one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaliDateInfo {
    /// The day itself.
    pub gregorian: Date,
    /// Position in the Pawukon cycles.
    pub pawukon: PawukonCoordinate,
    /// Position in the Saka lunar calendar.
    pub saka: SakaCoordinate,
    /// Balinese holidays falling on the day, possibly none.
    pub holidays: Vec<HolidayRecord>,
}

impl BaliDateInfo {
    /// Return `true` if any Balinese holiday falls on the day.
    pub fn is_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }
}

/// Annotate `date` with its Pawukon and Saka coordinates and Balinese
/// holidays.
pub fn calculate_bali_date(date: Date) -> BaliDateInfo {
    let pawukon = pawukon_of(date);
    BaliDateInfo {
        gregorian: date,
        pawukon,
        saka: saka_of(date),
        holidays: match_holidays(date, &pawukon),
    }
}

/// Every Balinese holiday in `year`, in date order.
///
/// Each day from January 1 through December 31 is annotated and its holidays
/// appended in turn; nothing is deduplicated.
///
/// # Errors
/// `Error::Date` if `year` is outside 1–9999.
pub fn year_holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    let _span = tracing::debug_span!("year_holidays", year).entered();
    let (first, last) = Date::year_bounds(year)?;
    let holidays: Vec<HolidayRecord> = first
        .days_through(last)
        .flat_map(|d| calculate_bali_date(d).holidays)
        .collect();
    tracing::debug!(count = holidays.len(), "collected Balinese holidays");
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_holidays::HolidayKind;
    use kb_pawukon::{Pancawara, Saptawara, Wuku};
    use kb_saka::Sasih;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn galungan_2025() {
        let info = calculate_bali_date(date(2025, 4, 23));
        assert_eq!(info.pawukon.wuku, Wuku::Dungulan);
        assert_eq!(info.pawukon.saptawara, Saptawara::Buda);
        assert_eq!(info.pawukon.pancawara, Pancawara::Kliwon);
        assert_eq!(info.saka.year, 1947);
        assert_eq!(info.holidays.len(), 1);
        assert_eq!(info.holidays[0].kind, HolidayKind::Galungan);
    }

    #[test]
    fn kuningan_2025() {
        let info = calculate_bali_date(date(2025, 5, 3));
        assert_eq!(info.holidays[0].name, "Kuningan");
    }

    #[test]
    fn saraswati_2024() {
        let info = calculate_bali_date(date(2024, 7, 13));
        assert_eq!(info.pawukon.wuku, Wuku::Watugunung);
        assert_eq!(info.holidays[0].kind, HolidayKind::Saraswati);
    }

    #[test]
    fn nyepi_day_has_no_pawukon_holiday() {
        let info = calculate_bali_date(date(2025, 3, 29));
        assert!(info.saka.opens_year());
        assert_eq!(info.saka.sasih, Sasih::Kadasa);
        assert!(!info.is_holiday());
    }

    #[test]
    fn year_2025_holidays() {
        let list = year_holidays(2025).unwrap();
        let galungan: Vec<Date> = list
            .iter()
            .filter(|h| h.kind == HolidayKind::Galungan)
            .map(|h| h.date)
            .collect();
        // 210 days apart.
        assert_eq!(galungan, [date(2025, 4, 23), date(2025, 11, 19)]);
        assert!(list.iter().all(|h| h.kind.is_bali()));
    }

    #[test]
    fn year_zero_is_rejected() {
        assert!(year_holidays(0).is_err());
    }
}
