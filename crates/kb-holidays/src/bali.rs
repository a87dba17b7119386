//! Pawukon holiday rules.
//!
//! Every Balinese holiday in this table recurs on one fixed day of the
//! 210-day Pawukon, named by its (wuku, saptawara, pancawara) triple. The
//! matcher walks [`BALI_RULES`] once per query and returns every row whose
//! triple equals the day's coordinate.

use kb_pawukon::{Pancawara, PawukonCoordinate, Saptawara, Wuku};
use kb_time::Date;

use crate::holiday::{HolidayKind, HolidayRecord};

/// A recurring Pawukon holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Wuku the holiday falls in.
    pub wuku: Wuku,
    /// Day of the seven-day week.
    pub saptawara: Saptawara,
    /// Day of the five-day week.
    pub pancawara: Pancawara,
    /// Display name.
    pub name: &'static str,
    /// Category.
    pub kind: HolidayKind,
    /// Short explanation, if any.
    pub description: Option<&'static str>,
    /// CSS hex colour hint.
    pub color: &'static str,
}

impl HolidayRule {
    /// Return `true` if `pawukon` is this rule's day.
    pub fn matches(&self, pawukon: &PawukonCoordinate) -> bool {
        pawukon.wuku == self.wuku
            && pawukon.saptawara == self.saptawara
            && pawukon.pancawara == self.pancawara
    }

    /// Build the record for `date`.
    pub fn record(&self, date: Date) -> HolidayRecord {
        let record = HolidayRecord::new(date, self.name, self.kind).with_color(self.color);
        match self.description {
            Some(text) => record.with_description(text),
            None => record,
        }
    }
}

const TUMPEK_COLOR: &str = "#60a5fa";

const fn tumpek(wuku: Wuku, name: &'static str, description: &'static str) -> HolidayRule {
    HolidayRule {
        wuku,
        saptawara: Saptawara::Saniscara,
        pancawara: Pancawara::Kliwon,
        name,
        kind: HolidayKind::Tumpek,
        description: Some(description),
        color: TUMPEK_COLOR,
    }
}

/// The Pawukon holiday table.
///
/// Tumpek rows are keyed on Sinta, Wariga, Langkir, Medangsia and Wayang.
/// Saniscara Kliwon only falls in Landep, Wariga, Kuningan, Krulut, Uye and
/// Wayang, so the Sinta, Langkir and Medangsia rows never match. Kuningan has
/// no Tumpek row.
pub const BALI_RULES: &[HolidayRule] = &[
    HolidayRule {
        wuku: Wuku::Dungulan,
        saptawara: Saptawara::Buda,
        pancawara: Pancawara::Kliwon,
        name: "Galungan",
        kind: HolidayKind::Galungan,
        description: Some("Kemenangan Dharma melawan Adharma"),
        color: "#eab308",
    },
    HolidayRule {
        wuku: Wuku::Kuningan,
        saptawara: Saptawara::Saniscara,
        pancawara: Pancawara::Kliwon,
        name: "Kuningan",
        kind: HolidayKind::Kuningan,
        description: Some("10 Hari setelah Galungan"),
        color: "#f97316",
    },
    HolidayRule {
        wuku: Wuku::Watugunung,
        saptawara: Saptawara::Saniscara,
        pancawara: Pancawara::Umanis,
        name: "Saraswati",
        kind: HolidayKind::Saraswati,
        description: Some("Hari Ilmu Pengetahuan"),
        color: "#3b82f6",
    },
    HolidayRule {
        wuku: Wuku::Sinta,
        saptawara: Saptawara::Buda,
        pancawara: Pancawara::Kliwon,
        name: "Pagerwesi",
        kind: HolidayKind::Pagerwesi,
        description: Some("Hari Pemujaan Hyang Pramesti Guru"),
        color: "#6366f1",
    },
    tumpek(Wuku::Sinta, "Tumpek Landep", "Hari suci untuk senjata dan benda logam"),
    tumpek(Wuku::Wariga, "Tumpek Uduh", "Hari suci untuk tumbuh-tumbuhan"),
    tumpek(Wuku::Langkir, "Tumpek Krulut", "Hari suci untuk gamelan dan kesenian"),
    tumpek(Wuku::Medangsia, "Tumpek Kandang", "Hari suci untuk hewan ternak"),
    tumpek(Wuku::Wayang, "Tumpek Wayang", "Hari suci untuk wayang"),
];

/// Rules that fall on `pawukon`, in table order.
pub fn matching_rules(pawukon: &PawukonCoordinate) -> impl Iterator<Item = &'static HolidayRule> + '_ {
    BALI_RULES.iter().filter(move |rule| rule.matches(pawukon))
}

/// Every Balinese holiday on `date`, whose Pawukon coordinate is `pawukon`.
///
/// Returns an empty list on ordinary days; no match is not an error.
pub fn match_holidays(date: Date, pawukon: &PawukonCoordinate) -> Vec<HolidayRecord> {
    matching_rules(pawukon).map(|rule| rule.record(date)).collect()
}
