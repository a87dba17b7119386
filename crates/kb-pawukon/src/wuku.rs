//! The thirty seven-day wuku of the 210-day Pawukon.

use crate::cycle::named_cycle;

named_cycle! {
    /// Week of the Pawukon, Sinta first.
    Wuku {
        Sinta => "Sinta",
        Landep => "Landep",
        Ukir => "Ukir",
        Kulantir => "Kulantir",
        Tolu => "Tolu",
        Gumbreg => "Gumbreg",
        Wariga => "Wariga",
        Warigadean => "Warigadean",
        Julungwangi => "Julungwangi",
        Sungsang => "Sungsang",
        Dungulan => "Dungulan",
        Kuningan => "Kuningan",
        Langkir => "Langkir",
        Medangsia => "Medangsia",
        Pujut => "Pujut",
        Pahang => "Pahang",
        Krulut => "Krulut",
        Merakih => "Merakih",
        Tambir => "Tambir",
        Medangkungan => "Medangkungan",
        Matal => "Matal",
        Uye => "Uye",
        Menail => "Menail",
        Prangbakat => "Prangbakat",
        Bala => "Bala",
        Ugu => "Ugu",
        Wayang => "Wayang",
        Kelawu => "Kelawu",
        Dukut => "Dukut",
        Watugunung => "Watugunung",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_wuku() {
        assert_eq!(Wuku::LEN, 30);
        assert_eq!(Wuku::from_index(10), Wuku::Dungulan);
        assert_eq!(Wuku::Watugunung.succ(), Wuku::Sinta);
        assert_eq!(Wuku::Dungulan.to_string(), "Dungulan");
    }
}
