// crates/cityid-core/src/matching.rs

//! The matching engine: decides whether a candidate record name
//! satisfies a query under one of four closed modes. Filtering is
//! stable; results keep the shard's natural line order.

use crate::error::{RegistryError, Result};
use std::fmt;
use std::str::FromStr;

/// How a query string is compared against a candidate city name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Matching {
    /// Byte-for-byte equality, case-sensitive.
    Exact,
    /// Equality after case-folding.
    #[default]
    Nocase,
    /// Case-folded query is a substring anywhere within the
    /// case-folded candidate.
    Like,
    /// Case-folded candidate begins with the case-folded query.
    StartsWith,
}

impl Matching {
    pub fn as_str(self) -> &'static str {
        match self {
            Matching::Exact => "exact",
            Matching::Nocase => "nocase",
            Matching::Like => "like",
            Matching::StartsWith => "startswith",
        }
    }

    /// True when the query needs a full scan of all shards: a
    /// substring match can start anywhere in the name, so the first
    /// letter of the query does not address a shard.
    pub fn scans_all_shards(self) -> bool {
        matches!(self, Matching::Like)
    }

    /// Applies this mode to one candidate name. An empty query never
    /// matches anything, in any mode.
    pub fn matches(self, query: &str, candidate: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        match self {
            Matching::Exact => candidate == query,
            Matching::Nocase => candidate.to_lowercase() == query.to_lowercase(),
            Matching::Like => candidate.to_lowercase().contains(&query.to_lowercase()),
            Matching::StartsWith => {
                candidate.to_lowercase().starts_with(&query.to_lowercase())
            }
        }
    }
}

impl FromStr for Matching {
    type Err = RegistryError;

    /// Parses the wire form of a mode. Unknown strings are rejected at
    /// the boundary, before any lookup work begins.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" => Ok(Matching::Exact),
            "nocase" => Ok(Matching::Nocase),
            "like" => Ok(Matching::Like),
            "startswith" => Ok(Matching::StartsWith),
            other => Err(RegistryError::Validation(format!(
                "unknown matching mode {other:?} (expected exact, nocase, like or startswith)"
            ))),
        }
    }
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
