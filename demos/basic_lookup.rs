//! Basic usage example for cityid-rs
//!
//! This example demonstrates how to:
//! - Open the bundled registry
//! - Resolve a name under the four matching modes
//! - Narrow homonyms with a country filter
//! - Project the same query into the three result shapes

use cityid_core::{CityIdRegistry, Matching, Result};

fn main() -> Result<()> {
    println!("=== CityID-RS Basic Lookup Example ===\n");

    // Open the shared registry over the bundled shard files
    println!("Opening city ID registry...");
    let registry = CityIdRegistry::shared()?;
    println!("✓ Registry ready\n");

    // Example 1: simple case-insensitive lookup
    println!("--- Example 1: Case-insensitive lookup ---");
    for (id, name, country) in registry.ids_for("bologna", None, Matching::Nocase, None)? {
        println!("{id}: {name} ({country})");
    }
    println!();

    // Example 2: homonyms, narrowed by country
    println!("--- Example 2: Homonyms and the country filter ---");
    let all = registry.ids_for("Abbeville", None, Matching::Nocase, None)?;
    println!("Abbeville anywhere: {} records", all.len());
    let us = registry.ids_for("Abbeville", Some("US"), Matching::Nocase, None)?;
    println!("Abbeville in the US: {} records", us.len());
    println!();

    // Example 3: substring matching scans all four shards
    println!("--- Example 3: Substring matching ---");
    for (id, name, country) in registry.ids_for("Dessus", None, Matching::Like, None)? {
        println!("{id}: {name} ({country})");
    }
    println!();

    // Example 4: the three projections of one query
    println!("--- Example 4: Projections ---");
    let query = "Thale, Stadt";
    for (id, name, country) in registry.ids_for(query, None, Matching::Nocase, None)? {
        println!("id triple:  {id} {name} ({country})");
    }
    for loc in registry.locations_for(query, None, Matching::Nocase, None)? {
        println!("location:   {} id={} lat={} lon={}", loc.name, loc.id, loc.lat, loc.lon);
    }
    for point in registry.geopoints_for(query, None, Matching::Nocase, None)? {
        println!("geo point:  lat={} lon={}", point.lat, point.lon);
    }

    Ok(())
}
