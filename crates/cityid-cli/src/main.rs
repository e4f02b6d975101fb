//! cityid-cli — Command-line interface for cityid-core
//!
//! This binary resolves free-text city names against the sharded city
//! ID registry from your terminal, and can regenerate the shard files
//! from the upstream OpenWeatherMap bulk list.
//!
//! Usage examples
//! --------------
//!
//! - Resolve a name to city IDs
//!   $ cityid-cli ids "Abbeville" --country US
//!
//! - Full locations, case-sensitive matching
//!   $ cityid-cli locations Bologna --matching exact
//!
//! - Coordinates only, substring matching, JSON output
//!   $ cityid-cli geopoints dessus --matching like --json
//!
//! - Rebuild the dataset into a directory
//!   $ cityid-cli build ./data
//!
//! Data source
//! -----------
//!
//! By default the lookups read the compressed shard files bundled with
//! the `cityid-core` crate. Use `--data-dir <path>` to point at a
//! directory produced by `cityid-cli build`.
mod args;

use crate::args::{CliArgs, Commands, LookupArgs};
#[cfg(feature = "builder")]
use anyhow::Context;
use cityid_core::{CityIdRegistry, Matching};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = CliArgs::parse();

    // Determine the shard directory (default: bundled inside cityid-core)
    let data_dir = args
        .data_dir
        .unwrap_or_else(CityIdRegistry::default_data_dir);
    let registry = CityIdRegistry::from_data_dir(data_dir);

    match args.command {
        Commands::Ids(q) => {
            let matching = parse_matching(&q)?;
            let results = registry.ids_for(&q.name, q.country.as_deref(), matching, q.limit)?;
            if q.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No cities found matching: {}", q.name);
            } else {
                for (id, name, country) in results {
                    println!("{id} {name} ({country})");
                }
            }
        }

        Commands::Locations(q) => {
            let matching = parse_matching(&q)?;
            let results =
                registry.locations_for(&q.name, q.country.as_deref(), matching, q.limit)?;
            if q.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No cities found matching: {}", q.name);
            } else {
                for loc in results {
                    println!(
                        "{} ({}) id={} lat={} lon={}",
                        loc.name, loc.country, loc.id, loc.lat, loc.lon
                    );
                }
            }
        }

        Commands::Geopoints(q) => {
            let matching = parse_matching(&q)?;
            let results =
                registry.geopoints_for(&q.name, q.country.as_deref(), matching, q.limit)?;
            if q.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No cities found matching: {}", q.name);
            } else {
                for point in results {
                    println!("lat={} lon={}", point.lat, point.lon);
                }
            }
        }

        #[cfg(feature = "builder")]
        Commands::Build { out_dir, keep_download } => {
            log::info!("writing shard files to {}", out_dir.display());
            cityid_core::builder::build_dataset(&out_dir, keep_download)
                .with_context(|| format!("building dataset in {}", out_dir.display()))?;
            println!("Dataset written to {}", out_dir.display());
        }
    }

    Ok(())
}

/// Parses the string-typed matching flag; an unknown mode is rejected
/// here, before the registry is touched.
fn parse_matching(q: &LookupArgs) -> anyhow::Result<Matching> {
    Ok(q.matching.parse()?)
}
