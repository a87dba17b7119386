//! The wara: concurrent Balinese weeks of one to ten days.

use crate::cycle::named_cycle;

named_cycle! {
    /// One-day week. Only Luang days carry a name; other days are empty.
    Ekawara { Luang => "Luang" }
}

named_cycle! {
    /// Two-day week.
    Dwiwara { Menga => "Menga", Pepet => "Pepet" }
}

named_cycle! {
    /// Three-day week. Kajeng is the market/offering day.
    Triwara { Pasah => "Pasah", Beteng => "Beteng", Kajeng => "Kajeng" }
}

named_cycle! {
    /// Four-day week.
    Caturwara { Sri => "Sri", Laba => "Laba", Jaya => "Jaya", Menala => "Menala" }
}

named_cycle! {
    /// Five-day market week.
    Pancawara {
        Umanis => "Umanis",
        Paing => "Paing",
        Pon => "Pon",
        Wage => "Wage",
        Kliwon => "Kliwon",
    }
}

named_cycle! {
    /// Six-day week.
    Sadwara {
        Tungleh => "Tungleh",
        Aryang => "Aryang",
        Urukung => "Urukung",
        Paniron => "Paniron",
        Was => "Was",
        Maulu => "Maulu",
    }
}

named_cycle! {
    /// Seven-day week, Redite (Sunday) first.
    Saptawara {
        Redite => "Redite",
        Soma => "Soma",
        Anggara => "Anggara",
        Buda => "Buda",
        Wraspati => "Wraspati",
        Sukra => "Sukra",
        Saniscara => "Saniscara",
    }
}

named_cycle! {
    /// Eight-day week.
    Astawara {
        Sri => "Sri",
        Indra => "Indra",
        Guru => "Guru",
        Yama => "Yama",
        Ludra => "Ludra",
        Brahma => "Brahma",
        Kala => "Kala",
        Uma => "Uma",
    }
}

named_cycle! {
    /// Nine-day week.
    Sangawara {
        Dangu => "Dangu",
        Jangur => "Jangur",
        Gigis => "Gigis",
        Nohan => "Nohan",
        Ogan => "Ogan",
        Erangan => "Erangan",
        Urungan => "Urungan",
        Tulus => "Tulus",
        Dadi => "Dadi",
    }
}

named_cycle! {
    /// Ten-day week.
    Dasawara {
        Pandita => "Pandita",
        Pati => "Pati",
        Suka => "Suka",
        Duka => "Duka",
        Sri => "Sri",
        Manuh => "Manuh",
        Manusa => "Manusa",
        Raja => "Raja",
        Dewa => "Dewa",
        Raksasa => "Raksasa",
    }
}

impl Pancawara {
    /// Urip (neptu) value.
    pub fn urip(self) -> u8 {
        [5, 9, 7, 4, 8][self.index()]
    }
}

impl Saptawara {
    /// Urip (neptu) value.
    pub fn urip(self) -> u8 {
        [5, 4, 3, 7, 8, 6, 9][self.index()]
    }
}

impl Dasawara {
    /// Dasawara from the combined urip of the day's pancawara and saptawara.
    pub fn from_urip(pancawara: Pancawara, saptawara: Saptawara) -> Self {
        Self::from_index((1 + pancawara.urip() + saptawara.urip()) as usize)
    }
}
