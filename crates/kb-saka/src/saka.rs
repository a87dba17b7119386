//! Saka lunar calendar calculator.
//!
//! # Lunar days
//!
//! Lunar days (*tithi*) advance 64 for every 63 solar days, a mean lunation
//! of 29.53125 days. On one solar day in every 63 two tithi end, so that day
//! (*ngunaratri*) covers two penanggal numbers. The first tithi of the day at
//! offset `x` from [`LUNAR_EPOCH_RD`] is
//!
//! ```text
//! floor((64 x + NGUNARATRI_PHASE) / 63)
//! ```
//!
//! A lunation is 30 tithi: penanggal 1–15 (waxing) then pangelong 1–15
//! (waning). Purnama is the 15th waxing tithi, Tilem the 15th waning one; a
//! day is flagged when it covers that tithi, so every half-month has exactly
//! one flagged day, ngunaratri or not.
//!
//! # Years
//!
//! A Saka year opens on the first penanggal of Kadasa (Nyepi) and closes with
//! Tilem Kasanga. Years are laid out in a 19-year cycle of 235 lunations
//! starting with Saka 1946, seven of which carry an intercalary month.

use kb_time::Date;

use crate::sasih::Sasih;

/// Rata Die serial of 2024-03-11: penanggal 1 of Kadasa, Saka 1946.
pub const LUNAR_EPOCH_RD: i32 = 738_956;

/// Saka year that opens at [`LUNAR_EPOCH_RD`] and at every 19-year cycle
/// boundary after it.
pub const EPOCH_SAKA_YEAR: i32 = 1946;

/// Numerator offset placing the ngunaratri day within each 63-day run.
///
/// Calibrated so that 2024-03-11, 2025-03-29 and 2026-03-19 each open a Saka
/// year (Nyepi 1946, 1947, 1948).
pub const NGUNARATRI_PHASE: i64 = 60;

const TITHI_PER_HALF: i64 = 15;
const TITHI_PER_LUNATION: i64 = 2 * TITHI_PER_HALF;
const CYCLE_YEARS: i64 = 19;
const LUNATIONS_PER_CYCLE: i64 = 235;

/// Months of a common Saka year, in order from Nyepi.
const YEAR_ORDER: [Sasih; 12] = [
    Sasih::Kadasa,
    Sasih::Desta,
    Sasih::Sada,
    Sasih::Kasa,
    Sasih::Karo,
    Sasih::Katiga,
    Sasih::Kapat,
    Sasih::Kalima,
    Sasih::Kanem,
    Sasih::Kapitu,
    Sasih::Kawolu,
    Sasih::Kasanga,
];

/// Intercalary month of each year in the 19-year cycle, `None` for common
/// years. Position 0 is [`EPOCH_SAKA_YEAR`].
const NAMPIH_CYCLE: [Option<Sasih>; CYCLE_YEARS as usize] = [
    Some(Sasih::NampihDesta),
    None,
    None,
    Some(Sasih::NampihSada),
    None,
    None,
    Some(Sasih::NampihDesta),
    None,
    Some(Sasih::NampihSada),
    None,
    None,
    Some(Sasih::NampihDesta),
    None,
    None,
    Some(Sasih::NampihSada),
    None,
    None,
    Some(Sasih::NampihDesta),
    None,
];

const fn months_in_year(nampih: Option<Sasih>) -> i64 {
    match nampih {
        Some(_) => 13,
        None => 12,
    }
}

const fn year_starts() -> [i64; CYCLE_YEARS as usize] {
    let mut starts = [0; CYCLE_YEARS as usize];
    let mut i = 1;
    while i < starts.len() {
        starts[i] = starts[i - 1] + months_in_year(NAMPIH_CYCLE[i - 1]);
        i += 1;
    }
    starts
}

/// Lunation index (within the cycle) at which each cycle year opens.
const YEAR_STARTS: [i64; CYCLE_YEARS as usize] = year_starts();

/// A day's position in the Saka lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SakaCoordinate {
    /// Saka year.
    pub year: i32,
    /// Lunar month.
    pub sasih: Sasih,
    /// Day within the current half-month (1–15). On a ngunaratri day this is
    /// the first of the two numbers the day covers.
    pub penanggal: u8,
    /// `true` in the waning half (pangelong), `false` in the waxing half.
    pub is_pangelong: bool,
    /// Full moon: the 15th day of the waxing half.
    pub is_purnama: bool,
    /// New moon: the 15th day of the waning half.
    pub is_tilem: bool,
    /// The day covers two lunar days.
    pub is_ngunaratri: bool,
}

impl SakaCoordinate {
    /// Return `true` on the first day of the Saka year (Nyepi).
    pub fn opens_year(&self) -> bool {
        self.sasih == Sasih::Kadasa && self.penanggal == 1 && !self.is_pangelong
    }
}

impl std::fmt::Display for SakaCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let half = if self.is_pangelong { "Pangelong" } else { "Penanggal" };
        write!(f, "{half} {} {} {}", self.penanggal, self.sasih, self.year)?;
        if self.is_purnama {
            write!(f, " (Purnama)")?;
        } else if self.is_tilem {
            write!(f, " (Tilem)")?;
        }
        Ok(())
    }
}

/// First tithi (counted from the epoch) of the day at `offset`.
fn tithi_at(offset: i64) -> i64 {
    (64 * offset + NGUNARATRI_PHASE).div_euclid(63)
}

/// Saka year and sasih of the `lunation`-th lunation after the epoch.
fn year_and_sasih(lunation: i64) -> (i32, Sasih) {
    let cycle = lunation.div_euclid(LUNATIONS_PER_CYCLE);
    let within = lunation.rem_euclid(LUNATIONS_PER_CYCLE);
    // YEAR_STARTS[0] == 0 <= within, so the partition point is at least 1.
    let pos = YEAR_STARTS.partition_point(|&start| start <= within) - 1;
    let nampih = NAMPIH_CYCLE[pos];
    if nampih.is_some() {
        tracing::trace!(lunation, ?nampih, "lunation falls in an intercalary year");
    }
    let year = EPOCH_SAKA_YEAR as i64 + cycle * CYCLE_YEARS + pos as i64;
    let month = (within - YEAR_STARTS[pos]) as usize;
    (year as i32, sasih_in_year(month, nampih))
}

/// The `month`-th sasih (0-based from Kadasa) of a year with the given
/// intercalary month.
fn sasih_in_year(month: usize, nampih: Option<Sasih>) -> Sasih {
    let inserted_at = nampih.map(|extra| {
        let base = extra.base();
        let at = YEAR_ORDER
            .iter()
            .position(|s| *s == base)
            .map_or(YEAR_ORDER.len(), |i| i + 1);
        (extra, at)
    });
    match inserted_at {
        Some((extra, at)) if month == at => extra,
        Some((_, at)) if month > at => YEAR_ORDER[month - 1],
        _ => YEAR_ORDER[month],
    }
}

/// Compute the Saka coordinate of `date`.
pub fn saka_of(date: Date) -> SakaCoordinate {
    let offset = (date.serial() - LUNAR_EPOCH_RD) as i64;
    let first = tithi_at(offset);
    let next = tithi_at(offset + 1);
    let covers = |phase: i64| (first..next).any(|t| t.rem_euclid(TITHI_PER_LUNATION) == phase);

    let phase = first.rem_euclid(TITHI_PER_LUNATION);
    let (year, sasih) = year_and_sasih(first.div_euclid(TITHI_PER_LUNATION));

    SakaCoordinate {
        year,
        sasih,
        penanggal: (phase % TITHI_PER_HALF + 1) as u8,
        is_pangelong: phase >= TITHI_PER_HALF,
        is_purnama: covers(TITHI_PER_HALF - 1),
        is_tilem: covers(TITHI_PER_LUNATION - 1),
        is_ngunaratri: next - first > 1,
    }
}
