//! `HolidayRecord` and `HolidayKind`.

use kb_time::Date;

/// Closed set of holiday categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum HolidayKind {
    /// Galungan.
    Galungan,
    /// Kuningan.
    Kuningan,
    /// One of the Tumpek days.
    Tumpek,
    /// Nyepi, the Saka new year.
    Nyepi,
    /// Saraswati.
    Saraswati,
    /// Pagerwesi.
    Pagerwesi,
    /// National public holiday.
    National,
    /// Collective leave day decreed alongside a national holiday.
    CutiBersama,
}

impl HolidayKind {
    /// Every kind.
    pub const ALL: [HolidayKind; 8] = [
        HolidayKind::Galungan,
        HolidayKind::Kuningan,
        HolidayKind::Tumpek,
        HolidayKind::Nyepi,
        HolidayKind::Saraswati,
        HolidayKind::Pagerwesi,
        HolidayKind::National,
        HolidayKind::CutiBersama,
    ];

    /// Kebab-case tag, e.g. `"cuti-bersama"`.
    pub fn as_str(self) -> &'static str {
        match self {
            HolidayKind::Galungan => "galungan",
            HolidayKind::Kuningan => "kuningan",
            HolidayKind::Tumpek => "tumpek",
            HolidayKind::Nyepi => "nyepi",
            HolidayKind::Saraswati => "saraswati",
            HolidayKind::Pagerwesi => "pagerwesi",
            HolidayKind::National => "national",
            HolidayKind::CutiBersama => "cuti-bersama",
        }
    }

    /// Return `true` for Balinese religious kinds (everything except
    /// `national` and `cuti-bersama`).
    pub fn is_bali(self) -> bool {
        !matches!(self, HolidayKind::National | HolidayKind::CutiBersama)
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One holiday on one calendar day.
///
/// Records are recomputed for every query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HolidayRecord {
    /// The day, serialized as `YYYY-MM-DD`.
    pub date: Date,
    /// Display name, e.g. `"Galungan"` or `"Hari Kemerdekaan RI"`.
    pub name: String,
    /// Category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: HolidayKind,
    /// Optional short explanation.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Presentation hint (CSS hex colour); set for Balinese kinds only.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub color: Option<String>,
    /// `true` when the date comes from a projection rather than an official
    /// decree.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_projected: bool,
}

impl HolidayRecord {
    /// A confirmed record with no description or colour.
    pub fn new(date: Date, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
            description: None,
            color: None,
            is_projected: false,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a colour hint.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the record as projected.
    pub fn projected(mut self, is_projected: bool) -> Self {
        self.is_projected = is_projected;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags() {
        assert_eq!(HolidayKind::CutiBersama.to_string(), "cuti-bersama");
        let bali: Vec<_> = HolidayKind::ALL.iter().filter(|k| k.is_bali()).collect();
        assert_eq!(bali.len(), 6);
        assert!(HolidayKind::Nyepi.is_bali());
        assert!(!HolidayKind::National.is_bali());
    }

    #[test]
    fn builder() {
        let d = Date::from_ymd(2030, 8, 17).unwrap();
        let r = HolidayRecord::new(d, "Hari Kemerdekaan RI", HolidayKind::National).projected(true);
        assert!(r.is_projected);
        assert_eq!(r.description, None);
        assert_eq!(r.color, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_like_the_public_record_shape() {
        let d = Date::from_ymd(2025, 4, 23).unwrap();
        let r = HolidayRecord::new(d, "Galungan", HolidayKind::Galungan).with_color("#eab308");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["date"], "2025-04-23");
        assert_eq!(json["type"], "galungan");
        assert_eq!(json["color"], "#eab308");
        assert_eq!(json["isProjected"], false);
        assert!(json.get("description").is_none());

        let back: HolidayRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
