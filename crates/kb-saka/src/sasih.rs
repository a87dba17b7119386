//! `Sasih`: the Balinese lunar month.

use std::str::FromStr;

use kb_core::errors::{Error, Result};

/// A lunar month of the Saka year.
///
/// The twelve regular months are numbered Kasa (1) to Sada (12). The two
/// intercalary months repeat Desta or Sada in thirteen-month years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sasih {
    /// Kasa (1).
    Kasa,
    /// Karo (2).
    Karo,
    /// Katiga (3).
    Katiga,
    /// Kapat (4).
    Kapat,
    /// Kalima (5).
    Kalima,
    /// Kanem (6).
    Kanem,
    /// Kapitu (7).
    Kapitu,
    /// Kawolu (8).
    Kawolu,
    /// Kasanga (9), the last month of the Saka year.
    Kasanga,
    /// Kadasa (10); its first day is Nyepi, the Saka new year.
    Kadasa,
    /// Desta (11).
    Desta,
    /// Sada (12).
    Sada,
    /// Intercalary month following Desta.
    NampihDesta,
    /// Intercalary month following Sada.
    NampihSada,
}

impl Sasih {
    /// Every sasih: the twelve regular months then the two intercalary ones.
    pub const ALL: [Sasih; 14] = [
        Sasih::Kasa,
        Sasih::Karo,
        Sasih::Katiga,
        Sasih::Kapat,
        Sasih::Kalima,
        Sasih::Kanem,
        Sasih::Kapitu,
        Sasih::Kawolu,
        Sasih::Kasanga,
        Sasih::Kadasa,
        Sasih::Desta,
        Sasih::Sada,
        Sasih::NampihDesta,
        Sasih::NampihSada,
    ];

    /// Canonical name, e.g. `"Kadasa"` or `"Nampih Desta"`.
    pub fn name(self) -> &'static str {
        match self {
            Sasih::Kasa => "Kasa",
            Sasih::Karo => "Karo",
            Sasih::Katiga => "Katiga",
            Sasih::Kapat => "Kapat",
            Sasih::Kalima => "Kalima",
            Sasih::Kanem => "Kanem",
            Sasih::Kapitu => "Kapitu",
            Sasih::Kawolu => "Kawolu",
            Sasih::Kasanga => "Kasanga",
            Sasih::Kadasa => "Kadasa",
            Sasih::Desta => "Desta",
            Sasih::Sada => "Sada",
            Sasih::NampihDesta => "Nampih Desta",
            Sasih::NampihSada => "Nampih Sada",
        }
    }

    /// Return `true` for an intercalary month.
    pub fn is_nampih(self) -> bool {
        matches!(self, Sasih::NampihDesta | Sasih::NampihSada)
    }

    /// The regular month an intercalary month repeats; itself otherwise.
    pub fn base(self) -> Sasih {
        match self {
            Sasih::NampihDesta => Sasih::Desta,
            Sasih::NampihSada => Sasih::Sada,
            other => other,
        }
    }

    /// Month number 1–12 (intercalary months share their base number).
    pub fn number(self) -> u8 {
        self.base() as u8 + 1
    }
}

impl std::fmt::Display for Sasih {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sasih {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Sasih::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::Parse(format!("unknown sasih {s:?}")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Sasih {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Sasih {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        assert_eq!(Sasih::Kasa.number(), 1);
        assert_eq!(Sasih::Kadasa.number(), 10);
        assert_eq!(Sasih::Sada.number(), 12);
        assert_eq!(Sasih::NampihDesta.number(), 11);
        assert_eq!(Sasih::NampihSada.number(), 12);
    }

    #[test]
    fn names_roundtrip() {
        for s in Sasih::ALL {
            assert_eq!(s.name().parse::<Sasih>().unwrap(), s);
        }
        assert!("kasa".parse::<Sasih>().is_err());
        assert!(Sasih::NampihSada.is_nampih());
        assert!(!Sasih::Sada.is_nampih());
    }
}
