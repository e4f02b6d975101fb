// crates/cityid-core/src/source.rs

//! # Shard line sources
//!
//! Handles the physical layer: opening a shard file, decompressing it
//! and yielding decoded text lines. The [`ShardSource`] trait is the
//! seam the registry scans through, so tests can substitute an
//! in-memory source instead of touching the filesystem.

use crate::error::{RegistryError, Result};
use crate::shard::Shard;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bzip2::read::MultiBzDecoder;

/// A lazy, finite stream of decoded shard lines. Line terminators are
/// already stripped; each item surfaces any read/decode failure.
pub type LineIter = Box<dyn Iterator<Item = std::io::Result<String>>>;

/// Produces the lines of one shard, or of all four.
///
/// Every call re-opens and re-decodes: there is no shared cursor
/// state, so sequences are independently restartable and a lookup
/// never holds a resource across calls.
pub trait ShardSource {
    /// The lines of a single shard, in file order.
    fn lines(&self, shard: Shard) -> Result<LineIter>;

    /// The concatenation of all four shards in the fixed order
    /// `a-f, g-l, m-r, s-z`. Used by substring lookups and full scans.
    fn all_lines(&self) -> Result<LineIter> {
        let mut chained: LineIter = Box::new(std::iter::empty());
        for shard in Shard::ALL {
            chained = Box::new(chained.chain(self.lines(shard)?));
        }
        Ok(chained)
    }
}

/// The standard source: bzip2-compressed shard files in a directory.
#[derive(Clone, Debug)]
pub struct DataDirSource {
    dir: PathBuf,
}

impl DataDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Opens a shard file, buffers it and wraps it in a bzip2 decoder.
    /// The decoded payload is always plain UTF-8 text.
    fn open_stream(&self, shard: Shard) -> Result<impl BufRead> {
        let path = self.dir.join(shard.filename());
        let file = File::open(&path).map_err(|e| {
            RegistryError::NotFound(format!("shard not found at {}: {}", path.display(), e))
        })?;
        Ok(BufReader::new(MultiBzDecoder::new(BufReader::new(file))))
    }
}

impl ShardSource for DataDirSource {
    fn lines(&self, shard: Shard) -> Result<LineIter> {
        Ok(Box::new(self.open_stream(shard)?.lines()))
    }
}
