// crates/cityid-core/src/lib.rs

//! # cityid-core
//!
//! A read-only, file-backed city ID registry. It resolves a free-text
//! city name (optionally qualified by a 2-letter country code) to the
//! matching records of the bundled OpenWeatherMap city list: numeric
//! ID, canonical name, country code and coordinates.
//!
//! The dataset is partitioned into four compressed shards by the first
//! letter of the city name, so a lookup scans at most one shard (or all
//! four for substring matching). Nothing is held in memory between
//! calls: each lookup opens, streams and releases its shard files.

pub mod error;
pub mod matching;
pub mod record;
pub mod registry;
pub mod shard;
pub mod source;

#[cfg(feature = "builder")]
pub mod builder;

// Re-exports
pub use crate::error::{RegistryError, Result};
pub use crate::matching::Matching;
pub use crate::record::{CityRecord, GeoPoint, IdTriple, Location};
pub use crate::registry::CityIdRegistry;
pub use crate::shard::Shard;
pub use crate::source::{DataDirSource, LineIter, ShardSource};
