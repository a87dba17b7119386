//! Position of a calendar day within every Pawukon cycle.
//!
//! The Pawukon is a 210-day cycle (30 wuku × 7 days) running alongside ten
//! wara of one to ten days. All of them are pure functions of the day offset
//! from a fixed epoch, [`BALI_EPOCH_RD`], at which the 210-day count is 0:
//! Redite of wuku Sinta, Paing in the pancawara, Pasah in the triwara.
//!
//! The irregular wara follow the classical rules:
//! * dasawara is the urip sum of pancawara and saptawara plus one, mod 10;
//! * ekawara is Luang and dwiwara is Pepet when the dasawara index is even;
//! * astawara repeats Kala on Pawukon days 70–72 (*kala tiga*), following
//!   Reingold and Dershowitz, *Calendrical Calculations* (`bali-asatawara`);
//! * caturwara follows astawara; sangawara holds Dangu for days 0–3.

use kb_time::Date;

use crate::wara::{
    Astawara, Caturwara, Dasawara, Dwiwara, Ekawara, Pancawara, Sadwara, Sangawara, Saptawara,
    Triwara,
};
use crate::wuku::Wuku;

/// Length of the Pawukon cycle in days.
pub const PAWUKON_DAYS: i32 = 210;

/// Rata Die serial of the Pawukon epoch (Julian Day 146), Pawukon day 0.
///
/// Calibrated against 2025-04-23 (Buda Kliwon Dungulan, Galungan),
/// 2025-05-03 (Saniscara Kliwon Kuningan) and 2024-07-13 (Saniscara Umanis
/// Watugunung, Saraswati).
pub const BALI_EPOCH_RD: i32 = -1_721_279;

/// Pawukon astawara run of Kala: days 70, 71 and 72 all map to Kala.
const KALA_TIGA_START: i32 = 70;

/// Position of `date` in the 210-day Pawukon (0–209).
pub fn pawukon_day(date: Date) -> u8 {
    (date.serial() - BALI_EPOCH_RD).rem_euclid(PAWUKON_DAYS) as u8
}

/// The named position of one day inside each Pawukon cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawukonCoordinate {
    /// Day within the 210-day cycle (0–209).
    pub day: u8,
    /// One of the thirty seven-day weeks.
    pub wuku: Wuku,
    /// Luang on days whose dasawara index is even, otherwise empty.
    pub ekawara: Option<Ekawara>,
    /// Two-day week.
    pub dwiwara: Dwiwara,
    /// Three-day week.
    pub triwara: Triwara,
    /// Four-day week.
    pub caturwara: Caturwara,
    /// Five-day week.
    pub pancawara: Pancawara,
    /// Six-day week.
    pub sadwara: Sadwara,
    /// Seven-day week.
    pub saptawara: Saptawara,
    /// Eight-day week.
    pub astawara: Astawara,
    /// Nine-day week.
    pub sangawara: Sangawara,
    /// Ten-day week.
    pub dasawara: Dasawara,
}

impl PawukonCoordinate {
    /// Coordinate of Pawukon day `day`; values above 209 wrap.
    pub fn from_day(day: u8) -> Self {
        let day = day as i32 % PAWUKON_DAYS;
        let idx = day as usize;

        let saptawara = Saptawara::from_index(idx);
        let pancawara = Pancawara::from_index(idx + 1);
        let dasawara = Dasawara::from_urip(pancawara, saptawara);
        let even_dasawara = dasawara.index() % 2 == 0;

        // `bali-asatawara`: days 70 and 71 clamp up to Kala (6), giving three Kala days.
        let astawara_idx = (4 + (day - KALA_TIGA_START).rem_euclid(PAWUKON_DAYS)).max(6) % 8;
        let astawara = Astawara::from_index(astawara_idx as usize);

        Self {
            day: day as u8,
            wuku: Wuku::from_index(idx / 7),
            ekawara: even_dasawara.then_some(Ekawara::Luang),
            dwiwara: if even_dasawara {
                Dwiwara::Pepet
            } else {
                Dwiwara::Menga
            },
            triwara: Triwara::from_index(idx),
            caturwara: Caturwara::from_index(astawara.index()),
            pancawara,
            sadwara: Sadwara::from_index(idx),
            saptawara,
            astawara,
            sangawara: Sangawara::from_index((day - 3).max(0) as usize),
            dasawara,
        }
    }
}

/// Compute the Pawukon coordinate of `date`.
pub fn pawukon_of(date: Date) -> PawukonCoordinate {
    PawukonCoordinate::from_day(pawukon_day(date))
}

impl std::fmt::Display for PawukonCoordinate {
    /// `"<saptawara> <pancawara> <wuku>"`, the customary way to name a day.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.saptawara, self.pancawara, self.wuku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn galungan_2025() {
        let p = pawukon_of(date(2025, 4, 23));
        assert_eq!(p.day, 73);
        assert_eq!(p.wuku, Wuku::Dungulan);
        assert_eq!(p.saptawara, Saptawara::Buda);
        assert_eq!(p.pancawara, Pancawara::Kliwon);
        assert_eq!(p.to_string(), "Buda Kliwon Dungulan");
    }

    #[test]
    fn kuningan_2025() {
        let p = pawukon_of(date(2025, 5, 3));
        assert_eq!(p.wuku, Wuku::Kuningan);
        assert_eq!(p.saptawara, Saptawara::Saniscara);
        assert_eq!(p.pancawara, Pancawara::Kliwon);
    }

    #[test]
    fn saraswati_2024() {
        let p = pawukon_of(date(2024, 7, 13));
        assert_eq!(p.day, 209);
        assert_eq!(p.wuku, Wuku::Watugunung);
        assert_eq!(p.saptawara, Saptawara::Saniscara);
        assert_eq!(p.pancawara, Pancawara::Umanis);
    }

    #[test]
    fn epoch_day_zero() {
        let p = PawukonCoordinate::from_day(0);
        assert_eq!(p.wuku, Wuku::Sinta);
        assert_eq!(p.saptawara, Saptawara::Redite);
        assert_eq!(p.pancawara, Pancawara::Paing);
        assert_eq!(p.triwara, Triwara::Pasah);
        assert_eq!(p.sadwara, Sadwara::Tungleh);
        assert_eq!(p.sangawara, Sangawara::Dangu);
    }

    #[test]
    fn saptawara_follows_gregorian_weekday() {
        // Redite is Sunday.
        let sunday = date(2025, 4, 20);
        assert_eq!(pawukon_of(sunday).saptawara, Saptawara::Redite);
    }

    #[test]
    fn kala_tiga() {
        assert_eq!(PawukonCoordinate::from_day(0).astawara, Astawara::Sri);
        assert_eq!(PawukonCoordinate::from_day(69).astawara, Astawara::Brahma);
        for d in 70..=72 {
            assert_eq!(PawukonCoordinate::from_day(d).astawara, Astawara::Kala, "day {d}");
        }
        assert_eq!(PawukonCoordinate::from_day(73).astawara, Astawara::Uma);
        assert_eq!(PawukonCoordinate::from_day(74).astawara, Astawara::Sri);
    }

    #[test]
    fn astawara_steps_daily_except_kala_tiga() {
        for d in 0..210u8 {
            let next = (d + 1) % 210;
            let step = if (71..=72).contains(&next) { 0 } else { 1 };
            assert_eq!(
                PawukonCoordinate::from_day(next).astawara.index(),
                (PawukonCoordinate::from_day(d).astawara.index() + step) % 8,
                "day {next}"
            );
        }
    }

    #[test]
    fn sangawara_dangu_opening() {
        for d in 0..=3 {
            assert_eq!(PawukonCoordinate::from_day(d).sangawara, Sangawara::Dangu);
        }
        assert_eq!(PawukonCoordinate::from_day(4).sangawara, Sangawara::Jangur);
        assert_eq!(PawukonCoordinate::from_day(209).sangawara, Sangawara::Dadi);
    }

    #[test]
    fn luang_tracks_dasawara_parity() {
        for d in 0..PAWUKON_DAYS as u8 {
            let p = PawukonCoordinate::from_day(d);
            let even = p.dasawara.index() % 2 == 0;
            assert_eq!(p.ekawara.is_some(), even);
            assert_eq!(p.dwiwara == Dwiwara::Pepet, even);
        }
    }

    #[test]
    fn from_day_wraps() {
        assert_eq!(PawukonCoordinate::from_day(210), PawukonCoordinate::from_day(0));
    }
}
