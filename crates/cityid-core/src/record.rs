// crates/cityid-core/src/record.rs

//! The persisted city record and its three lookup projections.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};

/// The `(id, name, country)` projection returned by
/// [`ids_for`](crate::CityIdRegistry::ids_for).
pub type IdTriple = (i64, String, String);

/// One line of a shard file, decoded.
///
/// Persisted as `name,id,lat,lon,country`. The name itself may contain
/// commas (`"Thale, Stadt"`), so decoding always takes the LAST four
/// comma-separated fields as `id, lat, lon, country` and keeps
/// everything before them as the name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    /// 2-letter country code; for US cities the upstream dataset
    /// substitutes the US state code here.
    pub country: String,
}

impl CityRecord {
    /// Decodes one shard line. A line that does not yield exactly the
    /// five fields, or whose numeric fields do not parse, is a
    /// [`RegistryError::Parse`]: this indicates a corrupt dataset and
    /// is never silently skipped.
    pub fn parse(line: &str) -> Result<Self> {
        let malformed = || RegistryError::Parse(line.to_string());

        // Walk the fields from the right so commas embedded in the
        // name never shift the numeric columns.
        let mut fields = line.rsplitn(5, ',');
        let country = fields.next().ok_or_else(malformed)?;
        let lon = fields.next().ok_or_else(malformed)?;
        let lat = fields.next().ok_or_else(malformed)?;
        let id = fields.next().ok_or_else(malformed)?;
        let name = fields.next().ok_or_else(malformed)?;

        if name.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            name: name.to_string(),
            id: id.trim().parse().map_err(|_| malformed())?,
            lat: lat.trim().parse().map_err(|_| malformed())?,
            lon: lon.trim().parse().map_err(|_| malformed())?,
            country: country.to_string(),
        })
    }

    /// Encodes the record back into the shard line format.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.name, self.id, self.lat, self.lon, self.country
        )
    }

    pub fn id_triple(&self) -> IdTriple {
        (self.id, self.name.clone(), self.country.clone())
    }
}

/// Structured projection: the full record, shaped for callers that
/// need a named location (e.g. a weather client).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
    pub id: i64,
    pub country: String,
}

/// Geographic projection: coordinates only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<&CityRecord> for Location {
    fn from(r: &CityRecord) -> Self {
        Self {
            name: r.name.clone(),
            lon: r.lon,
            lat: r.lat,
            id: r.id,
            country: r.country.clone(),
        }
    }
}

impl From<&CityRecord> for GeoPoint {
    fn from(r: &CityRecord) -> Self {
        Self { lat: r.lat, lon: r.lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_line() {
        let r = CityRecord::parse("dongen,2756723,51.626671,4.938890,NL").unwrap();
        assert_eq!(r.name, "dongen");
        assert_eq!(r.id, 2756723);
        assert_eq!(r.lat, 51.626671);
        assert_eq!(r.lon, 4.938890);
        assert_eq!(r.country, "NL");
    }

    #[test]
    fn name_keeps_embedded_commas() {
        let r = CityRecord::parse("Thale, Stadt,6550950,51.7528,11.058,DE").unwrap();
        assert_eq!(r.name, "Thale, Stadt");
        assert_eq!(r.id, 6550950);
        assert_eq!(r.country, "DE");

        let r = CityRecord::parse(
            "Pitcairn, Henderson, Ducie and Oeno Islands,4030699,-25.066669,-130.100006,PN",
        )
        .unwrap();
        assert_eq!(r.name, "Pitcairn, Henderson, Ducie and Oeno Islands");
        assert_eq!(r.id, 4030699);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for bad in [
            "",
            "too,few,fields",
            "no-commas-at-all",
            "name,notanumber,1.0,2.0,DE",
            "name,123,not-a-float,2.0,DE",
            ",123,1.0,2.0,DE",
        ] {
            assert!(
                matches!(CityRecord::parse(bad), Err(RegistryError::Parse(_))),
                "expected parse failure for {bad:?}"
            );
        }
    }

    #[test]
    fn round_trips_through_to_line() {
        let line = "Abbans-Dessus,3038800,47.120548,5.88188,FR";
        let r = CityRecord::parse(line).unwrap();
        assert_eq!(r.to_line(), line);
    }

    #[test]
    fn projections_carry_the_same_record() {
        let r = CityRecord::parse("Bologna,2829449,30.57184,-83.250488,IT").unwrap();
        assert_eq!(r.id_triple(), (2829449, "Bologna".to_string(), "IT".to_string()));

        let loc = Location::from(&r);
        assert_eq!(loc.name, "Bologna");
        assert_eq!(loc.lat, 30.57184);
        assert_eq!(loc.lon, -83.250488);

        let p = GeoPoint::from(&r);
        assert_eq!(p.lat, loc.lat);
        assert_eq!(p.lon, loc.lon);
    }
}
