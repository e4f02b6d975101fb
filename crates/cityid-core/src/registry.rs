// crates/cityid-core/src/registry.rs

//! # City ID Registry
//!
//! Resolves a free-text city name (optionally qualified by country) to
//! the matching city records, projected into one of three shapes:
//! `(id, name, country)` triples, structured [`Location`]s or bare
//! [`GeoPoint`]s.
//!
//! The registry holds no mutable state after construction. Every
//! lookup opens, streams and releases the shard(s) it needs, so a
//! single instance is safe to share across threads and calls are
//! independently repeatable.

use crate::error::{RegistryError, Result};
use crate::matching::Matching;
use crate::record::{CityRecord, GeoPoint, IdTriple, Location};
use crate::shard::Shard;
use crate::source::{DataDirSource, ShardSource};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static SHARED_REGISTRY: OnceCell<CityIdRegistry<DataDirSource>> = OnceCell::new();

/// A read-only gazetteer over the four shard files.
///
/// Generic over its [`ShardSource`] so tests (and embedders) can
/// inject a line source instead of reading the bundled files.
#[derive(Clone, Debug)]
pub struct CityIdRegistry<S: ShardSource> {
    source: S,
}

impl CityIdRegistry<DataDirSource> {
    /// Directory holding the bundled shard files.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// A registry over `<dir>/097-102.txt.bz2` .. `<dir>/115-122.txt.bz2`.
    pub fn from_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DataDirSource::new(dir))
    }

    /// The process-wide registry over the bundled data directory.
    ///
    /// Constructed on first use and never reconstructed afterwards;
    /// construction probes all four shard files so a broken
    /// installation fails here rather than inside a later lookup.
    /// Subsequent calls are lock-free reads of the same instance.
    pub fn shared() -> Result<&'static Self> {
        SHARED_REGISTRY.get_or_try_init(|| {
            let registry = Self::from_data_dir(Self::default_data_dir());
            for shard in Shard::ALL {
                // Open and drop: existence/readability check only.
                registry.source.lines(shard)?;
            }
            Ok(registry)
        })
    }
}

impl<S: ShardSource> CityIdRegistry<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Looks up the city IDs matching `name`.
    ///
    /// Returns one `(id, name, country)` triple per matching record,
    /// in shard encounter order. Homonymous cities (same name,
    /// different IDs or countries) all appear; nothing is
    /// deduplicated.
    ///
    /// `country`, when given, must be an exact 2-letter code and is
    /// compared case-sensitively. `limit` truncates the final result.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cityid_core::{CityIdRegistry, Matching};
    ///
    /// let registry = CityIdRegistry::shared()?;
    /// for (id, name, country) in
    ///     registry.ids_for("Abbeville", Some("US"), Matching::Nocase, None)?
    /// {
    ///     println!("{id}: {name} ({country})");
    /// }
    /// # Ok::<(), cityid_core::RegistryError>(())
    /// ```
    pub fn ids_for(
        &self,
        name: &str,
        country: Option<&str>,
        matching: Matching,
        limit: Option<usize>,
    ) -> Result<Vec<IdTriple>> {
        let records = self.lookup(name, country, matching, limit)?;
        Ok(records.iter().map(CityRecord::id_triple).collect())
    }

    /// Looks up the structured [`Location`]s matching `name`.
    ///
    /// Same query semantics as [`ids_for`](Self::ids_for).
    pub fn locations_for(
        &self,
        name: &str,
        country: Option<&str>,
        matching: Matching,
        limit: Option<usize>,
    ) -> Result<Vec<Location>> {
        let records = self.lookup(name, country, matching, limit)?;
        Ok(records.iter().map(Location::from).collect())
    }

    /// Looks up the geographic points matching `name`.
    ///
    /// Same query semantics as [`ids_for`](Self::ids_for).
    pub fn geopoints_for(
        &self,
        name: &str,
        country: Option<&str>,
        matching: Matching,
        limit: Option<usize>,
    ) -> Result<Vec<GeoPoint>> {
        let records = self.lookup(name, country, matching, limit)?;
        Ok(records.iter().map(GeoPoint::from).collect())
    }

    /// The shared scan behind all three projections.
    ///
    /// Order of operations matters: input validation happens before
    /// any shard is opened, an empty name short-circuits to an empty
    /// result, and the limit is applied as a final truncation so it
    /// never masks a parse error earlier in the shard.
    fn lookup(
        &self,
        name: &str,
        country: Option<&str>,
        matching: Matching,
        limit: Option<usize>,
    ) -> Result<Vec<CityRecord>> {
        if let Some(code) = country {
            if code.chars().count() != 2 {
                return Err(RegistryError::Validation(format!(
                    "country must be a 2-letter code, got {code:?}"
                )));
            }
        }
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let lines = if matching.scans_all_shards() {
            self.source.all_lines()?
        } else {
            self.source.lines(Shard::for_name(name)?)?
        };

        let mut out = Vec::new();
        for line in lines {
            let line = line?;
            let record = CityRecord::parse(&line)?;
            if !matching.matches(name, &record.name) {
                continue;
            }
            if let Some(code) = country {
                if record.country != code {
                    continue;
                }
            }
            out.push(record);
        }

        if let Some(n) = limit {
            out.truncate(n);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LineIter;

    /// A source that fails the test if any shard is ever opened.
    struct UntouchableSource;

    impl ShardSource for UntouchableSource {
        fn lines(&self, shard: Shard) -> Result<LineIter> {
            panic!("shard {shard:?} opened before validation finished");
        }
    }

    #[test]
    fn country_length_is_checked_before_any_file_access() {
        let registry = CityIdRegistry::new(UntouchableSource);
        let result = registry.ids_for("bologna", Some("superlongcountry"), Matching::Nocase, None);
        assert!(matches!(result, Err(RegistryError::Validation(_))));

        let result = registry.ids_for("bologna", Some("I"), Matching::Exact, None);
        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[test]
    fn empty_name_short_circuits_without_io() {
        let registry = CityIdRegistry::new(UntouchableSource);
        for mode in [
            Matching::Exact,
            Matching::Nocase,
            Matching::Like,
            Matching::StartsWith,
        ] {
            assert!(registry.ids_for("", None, mode, None).unwrap().is_empty());
            assert!(registry
                .ids_for("", Some("IT"), mode, None)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn non_letter_initial_is_rejected_for_addressed_modes() {
        let registry = CityIdRegistry::new(UntouchableSource);
        for mode in [Matching::Exact, Matching::Nocase, Matching::StartsWith] {
            assert!(matches!(
                registry.ids_for("123abc", None, mode, None),
                Err(RegistryError::Validation(_))
            ));
        }
    }
}
