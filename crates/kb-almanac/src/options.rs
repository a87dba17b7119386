//! Listing options: which holiday families to show, and which years may be
//! browsed.

use kb_core::{ensure, Result};
use kb_holidays::HolidayKind;

/// Inclusive range of navigable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearRange {
    start: u16,
    end: u16,
}

impl YearRange {
    /// First year a calendar view opens on by default.
    pub const DEFAULT_START: u16 = 2020;
    /// Last year a calendar view opens on by default.
    pub const DEFAULT_END: u16 = 2030;

    /// Range `start..=end`.
    ///
    /// # Errors
    /// `Error::Precondition` if `start > end` or either bound lies outside
    /// 1–9999.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        ensure!(start <= end, "year range start {start} is after end {end}");
        ensure!(
            start >= 1 && end <= 9999,
            "year range {start}-{end} outside supported years 1-9999"
        );
        Ok(Self { start, end })
    }

    /// First year.
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Last year.
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Return `true` if `year` lies in the range.
    pub fn contains(&self, year: u16) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Every year in the range, ascending.
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Which holiday families a listing includes, and the browsable years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayOptions {
    /// Include Balinese holidays.
    pub show_bali: bool,
    /// Include national holidays.
    pub show_national: bool,
    /// Include cuti bersama days.
    pub show_cuti_bersama: bool,
    /// Years a listing may be requested for.
    pub year_range: YearRange,
}

impl Default for HolidayOptions {
    fn default() -> Self {
        Self {
            show_bali: true,
            show_national: true,
            show_cuti_bersama: true,
            year_range: YearRange::default(),
        }
    }
}

impl HolidayOptions {
    /// Set whether Balinese holidays are shown.
    pub fn with_bali(mut self, show: bool) -> Self {
        self.show_bali = show;
        self
    }

    /// Set whether national holidays are shown.
    pub fn with_national(mut self, show: bool) -> Self {
        self.show_national = show;
        self
    }

    /// Set whether cuti bersama days are shown.
    pub fn with_cuti_bersama(mut self, show: bool) -> Self {
        self.show_cuti_bersama = show;
        self
    }

    /// Set the browsable years.
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    /// Return `true` if records of `kind` pass the filter.
    ///
    /// Cuti bersama days only show alongside national holidays.
    pub fn shows(&self, kind: HolidayKind) -> bool {
        match kind {
            HolidayKind::National => self.show_national,
            HolidayKind::CutiBersama => self.show_national && self.show_cuti_bersama,
            _ => self.show_bali,
        }
    }

    /// Reject years outside [`HolidayOptions::year_range`].
    ///
    /// # Errors
    /// `Error::Precondition` naming the year and the range.
    pub fn check_year(&self, year: u16) -> Result<()> {
        ensure!(
            self.year_range.contains(year),
            "year {year} outside navigable range {}",
            self.year_range
        );
        Ok(())
    }
}
