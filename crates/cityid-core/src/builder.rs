// crates/cityid-core/src/builder.rs

//! # Dataset builder
//!
//! Offline, batch-only: turns the upstream OpenWeatherMap bulk city
//! list into the four shard files the registry reads. Runs once, out
//! of the hot path. Feature-gated behind `builder` so the runtime
//! registry never pulls the HTTP/JSON stack.

use crate::error::{RegistryError, Result};
use crate::record::CityRecord;
use crate::shard::Shard;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bzip2::write::BzEncoder;
use bzip2::Compression;
use flate2::read::GzDecoder;
use log::{info, warn};
use serde::Deserialize;

/// The one fixed upstream source.
pub const CITY_LIST_URL: &str = "http://bulk.openweathermap.org/sample/city.list.json.gz";

/// Filename the downloaded archive is stored under.
pub const CITY_LIST_ARCHIVE: &str = "city.list.json.gz";

/// Raw upstream entry, e.g.
/// `{"id":707860,"name":"Hurzuf","state":"","country":"UA","coord":{"lon":34.283333,"lat":44.549999}}`.
/// We do not expose this type; it mirrors the external dataset.
#[derive(Debug, Deserialize)]
struct RawCity {
    id: i64,
    name: String,
    #[serde(default)]
    state: String,
    country: String,
    coord: RawCoord,
}

#[derive(Debug, Deserialize)]
struct RawCoord {
    lon: f64,
    lat: f64,
}

/// The whole pipeline: download, decode, partition, persist.
///
/// `out_dir` is created if missing and receives each shard both as
/// plain text (`097-102.txt`) and compressed (`097-102.txt.bz2`). The
/// downloaded archive is removed afterwards unless `keep_download`.
pub fn build_dataset(out_dir: &Path, keep_download: bool) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let archive = out_dir.join(CITY_LIST_ARCHIVE);
    fetch_city_list(CITY_LIST_URL, &archive)?;

    let cities = read_city_list(&archive)?;
    info!("read {} unique cities", cities.len());

    let partitions = partition(&cities);
    write_shards(out_dir, &partitions)?;

    if !keep_download {
        fs::remove_file(&archive).ok();
    }
    Ok(())
}

/// Downloads the upstream gzipped city list to `dest`.
pub fn fetch_city_list(url: &str, dest: &Path) -> Result<()> {
    info!("downloading {url}");
    let mut response = reqwest::blocking::get(url)?.error_for_status()?;
    let mut file = BufWriter::new(File::create(dest)?);
    response.copy_to(&mut file)?;
    file.flush()?;
    Ok(())
}

/// Parses the downloaded archive into records keyed (and therefore
/// ordered) by city ID.
///
/// Duplicate IDs are logged and dropped, never a failure: the first
/// occurrence wins. For US cities the upstream `state` field replaces
/// the country code when present.
pub fn read_city_list(path: &Path) -> Result<BTreeMap<i64, CityRecord>> {
    let file = File::open(path).map_err(|e| {
        RegistryError::NotFound(format!("city list not found at {}: {}", path.display(), e))
    })?;
    let reader = GzDecoder::new(BufReader::new(file));
    let raw: Vec<RawCity> = serde_json::from_reader(reader)?;

    let mut cities = BTreeMap::new();
    for entry in raw {
        if cities.contains_key(&entry.id) {
            warn!("city ID {} already processed, dropping {:?}", entry.id, entry.name);
            continue;
        }
        let country = if entry.country == "US" && !entry.state.is_empty() {
            entry.state
        } else {
            entry.country
        };
        cities.insert(
            entry.id,
            CityRecord {
                name: entry.name,
                id: entry.id,
                lat: entry.coord.lat,
                lon: entry.coord.lon,
                country,
            },
        );
    }
    Ok(cities)
}

/// Splits the records into the four letter-range buckets, each sorted
/// by the literal record line. Names whose lowercased first character
/// is not a letter `a`-`z` belong to no shard and are discarded.
pub fn partition(cities: &BTreeMap<i64, CityRecord>) -> [Vec<String>; 4] {
    let mut buckets: [Vec<String>; 4] = Default::default();
    for record in cities.values() {
        let Some(first) = record.name.to_lowercase().chars().next() else {
            continue;
        };
        let Ok(shard) = Shard::for_initial(first) else {
            continue;
        };
        buckets[shard.index()].push(record.to_line());
    }
    for bucket in &mut buckets {
        bucket.sort();
    }
    buckets
}

/// Persists each bucket twice: plain `.txt` and bzip2 `.txt.bz2`, the
/// latter being what [`DataDirSource`](crate::DataDirSource) consumes.
pub fn write_shards(out_dir: &Path, partitions: &[Vec<String>; 4]) -> Result<()> {
    for shard in Shard::ALL {
        let lines = &partitions[shard.index()];
        let mut text = String::new();
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }

        let txt_path = out_dir.join(format!("{}.txt", shard.basename()));
        fs::write(&txt_path, &text)?;

        let bz2_path = out_dir.join(shard.filename());
        info!("compressing {} -> {}", txt_path.display(), bz2_path.display());
        let file = BufWriter::new(File::create(&bz2_path)?);
        let mut encoder = BzEncoder::new(file, Compression::best());
        encoder.write_all(text.as_bytes())?;
        encoder.finish()?.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DataDirSource, ShardSource};
    use flate2::write::GzEncoder;

    fn record(name: &str, id: i64, country: &str) -> (i64, CityRecord) {
        (
            id,
            CityRecord {
                name: name.to_string(),
                id,
                lat: 1.0,
                lon: 2.0,
                country: country.to_string(),
            },
        )
    }

    #[test]
    fn partition_buckets_by_initial_and_sorts() {
        let cities: BTreeMap<_, _> = [
            record("Zagreb", 1, "HR"),
            record("amsterdam", 2, "NL"),
            record("Berlin", 3, "DE"),
            record("milan", 4, "IT"),
            record("london", 5, "GB"),
        ]
        .into_iter()
        .collect();

        let buckets = partition(&cities);
        assert_eq!(buckets[0], vec!["Berlin,3,1,2,DE", "amsterdam,2,1,2,NL"]);
        assert_eq!(buckets[1], vec!["london,5,1,2,GB"]);
        assert_eq!(buckets[2], vec!["milan,4,1,2,IT"]);
        assert_eq!(buckets[3], vec!["Zagreb,1,1,2,HR"]);
    }

    #[test]
    fn partition_discards_names_with_no_leading_letter() {
        let cities: BTreeMap<_, _> = [
            record("1770", 1, "AU"),
            record("'t Hoeksken", 2, "BE"),
            record("Épernay", 3, "FR"),
            record("", 4, "XX"),
            record("dongen", 5, "NL"),
        ]
        .into_iter()
        .collect();

        let buckets = partition(&cities);
        let total: usize = buckets.iter().map(Vec::len).sum();
        assert_eq!(total, 1);
        assert_eq!(buckets[0], vec!["dongen,5,1,2,NL"]);
    }

    #[test]
    fn read_city_list_dedupes_and_substitutes_us_state() {
        let json = r#"[
            {"id":707860,"name":"Hurzuf","state":"","country":"UA","coord":{"lon":34.283333,"lat":44.549999}},
            {"id":707860,"name":"Hurzuf again","state":"","country":"UA","coord":{"lon":0.0,"lat":0.0}},
            {"id":4178992,"name":"Abbeville","state":"GA","country":"US","coord":{"lon":-83.306824,"lat":31.992121}},
            {"id":9999999,"name":"Nowhere","state":"","country":"US","coord":{"lon":0.0,"lat":0.0}}
        ]"#;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CITY_LIST_ARCHIVE);
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), flate2::Compression::default());
        enc.write_all(json.as_bytes()).unwrap();
        enc.finish().unwrap();

        let cities = read_city_list(&path).unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[&707860].name, "Hurzuf");
        // US city with a state: state code replaces the country.
        assert_eq!(cities[&4178992].country, "GA");
        // US city without a state keeps US.
        assert_eq!(cities[&9999999].country, "US");
    }

    #[test]
    fn written_shards_are_readable_by_the_registry_source() {
        let cities: BTreeMap<_, _> = [record("dongen", 2756723, "NL")].into_iter().collect();
        let tmp = tempfile::tempdir().unwrap();

        write_shards(tmp.path(), &partition(&cities)).unwrap();

        let source = DataDirSource::new(tmp.path());
        let lines: Vec<String> = source
            .lines(Shard::AToF)
            .unwrap()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["dongen,2756723,1,2,NL"]);

        // Empty partitions still produce valid (empty) shard files.
        assert_eq!(source.lines(Shard::SToZ).unwrap().count(), 0);
    }
}
