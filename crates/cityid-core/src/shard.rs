// crates/cityid-core/src/shard.rs

//! Shard addressing.
//!
//! The dataset is split into four immutable files, each covering one
//! alphabetic range of (lowercased) city name initials. The ranges
//! partition `[a-z]` with no gaps and no overlap; names with no
//! leading letter are excluded from every shard by the generator.

use crate::error::{RegistryError, Result};

/// One of the four alphabetic partitions of the city list.
///
/// Files are named by the ASCII codes of the range bounds, 3-digit
/// zero-padded: `097-102.txt.bz2` holds the names starting with
/// `a`..=`f`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shard {
    /// Names starting with `a`..=`f` (ASCII 097-102).
    AToF,
    /// Names starting with `g`..=`l` (ASCII 103-108).
    GToL,
    /// Names starting with `m`..=`r` (ASCII 109-114).
    MToR,
    /// Names starting with `s`..=`z` (ASCII 115-122).
    SToZ,
}

impl Shard {
    /// All shards, in the fixed scan order used by full scans.
    pub const ALL: [Shard; 4] = [Shard::AToF, Shard::GToL, Shard::MToR, Shard::SToZ];

    /// Position of this shard within [`Shard::ALL`].
    pub fn index(self) -> usize {
        match self {
            Shard::AToF => 0,
            Shard::GToL => 1,
            Shard::MToR => 2,
            Shard::SToZ => 3,
        }
    }

    /// Inclusive ASCII bounds of the range this shard covers.
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Shard::AToF => (b'a', b'f'),
            Shard::GToL => (b'g', b'l'),
            Shard::MToR => (b'm', b'r'),
            Shard::SToZ => (b's', b'z'),
        }
    }

    /// Filename fragment, e.g. `097-102`.
    pub fn basename(self) -> String {
        let (lo, hi) = self.bounds();
        format!("{lo:03}-{hi:03}")
    }

    /// Compressed shard filename, e.g. `097-102.txt.bz2`.
    pub fn filename(self) -> String {
        format!("{}.txt.bz2", self.basename())
    }

    /// Maps an initial letter to its shard. Case-folds ASCII letters;
    /// anything outside `a`-`z` has no shard and is a validation
    /// error.
    pub fn for_initial(c: char) -> Result<Shard> {
        if !c.is_ascii_alphabetic() {
            return Err(RegistryError::Validation(format!(
                "no shard for initial character {c:?}: not a letter a-z"
            )));
        }
        match c.to_ascii_lowercase() {
            'a'..='f' => Ok(Shard::AToF),
            'g'..='l' => Ok(Shard::GToL),
            'm'..='r' => Ok(Shard::MToR),
            _ => Ok(Shard::SToZ),
        }
    }

    /// Addresses the shard for a query name from its first character.
    pub fn for_name(name: &str) -> Result<Shard> {
        let first = name.chars().next().ok_or_else(|| {
            RegistryError::Validation("cannot address a shard for an empty name".into())
        })?;
        Self::for_initial(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_maps_to_exactly_one_shard() {
        for c in 'a'..='z' {
            let shard = Shard::for_initial(c).unwrap();
            let (lo, hi) = shard.bounds();
            assert!((lo..=hi).contains(&(c as u8)), "{c} landed in {shard:?}");
        }
    }

    #[test]
    fn ranges_partition_the_alphabet() {
        let mut covered = Vec::new();
        for shard in Shard::ALL {
            let (lo, hi) = shard.bounds();
            covered.extend(lo..=hi);
        }
        assert_eq!(covered, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn addresses_match_the_generator_filenames() {
        assert_eq!(Shard::for_name("b-city").unwrap().basename(), "097-102");
        assert_eq!(Shard::for_name("h-city").unwrap().basename(), "103-108");
        assert_eq!(Shard::for_name("n-city").unwrap().basename(), "109-114");
        assert_eq!(Shard::for_name("t-city").unwrap().basename(), "115-122");
        assert_eq!(Shard::AToF.filename(), "097-102.txt.bz2");
    }

    #[test]
    fn uppercase_initials_fold() {
        assert_eq!(Shard::for_initial('B').unwrap(), Shard::AToF);
        assert_eq!(Shard::for_name("Zagreb").unwrap(), Shard::SToZ);
    }

    #[test]
    fn non_letters_are_rejected() {
        for bad in ['1', '{', ' ', 'é', 'ß'] {
            assert!(matches!(
                Shard::for_initial(bad),
                Err(RegistryError::Validation(_))
            ));
        }
        assert!(Shard::for_name("123abc").is_err());
        assert!(Shard::for_name("{abc").is_err());
        assert!(Shard::for_name("").is_err());
    }
}
