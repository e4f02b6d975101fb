//! Error handling example for cityid-rs
//!
//! This example demonstrates proper error handling and edge cases

use cityid_core::{CityIdRegistry, Matching, RegistryError, Result};

fn main() -> Result<()> {
    println!("=== CityID-RS Error Handling Example ===\n");

    // Example 1: Handling registry construction errors
    println!("--- Example 1: Opening the registry with error handling ---");
    let registry = match CityIdRegistry::shared() {
        Ok(registry) => {
            println!("✓ Registry opened successfully");
            registry
        }
        Err(e) => {
            eprintln!("✗ Failed to open registry: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: No match is not an error
    println!("--- Example 2: Queries with no results ---");
    for name in ["Atlantis", "aaaaaaaaaa"] {
        let results = registry.ids_for(name, None, Matching::Nocase, None)?;
        println!("  {name}: {} records", results.len());
    }
    println!();

    // Example 3: Validation failures happen before any file access
    println!("--- Example 3: Invalid inputs ---");
    match registry.ids_for("Bologna", Some("a_country"), Matching::Nocase, None) {
        Ok(_) => println!("  unexpected success"),
        Err(RegistryError::Validation(msg)) => println!("  rejected: {msg}"),
        Err(e) => return Err(e),
    }
    match "impossible".parse::<Matching>() {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    match registry.ids_for("123abc", None, Matching::Nocase, None) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    // Example 4: A missing data directory surfaces as NotFound
    println!("--- Example 4: Missing shard files ---");
    let broken = CityIdRegistry::from_data_dir("/nonexistent");
    match broken.ids_for("Bologna", None, Matching::Nocase, None) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  lookup failed as expected: {e}"),
    }

    Ok(())
}
