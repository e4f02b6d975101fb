//! cityid-cli
//! ==========
//!
//! Command-line interface for the `cityid-core` city ID registry.
//!
//! This crate primarily provides a binary (`cityid-cli`). We include a
//! small library target so that docs.rs renders a documentation page
//! and shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install cityid-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! cityid-cli --help
//! cityid-cli ids "Abbeville" --country US
//! cityid-cli locations Bologna --matching exact
//! cityid-cli build ./data
//! ```
//!
//! For programmatic access to the registry, use the [`cityid-core`]
//! crate directly.
//!
//! Links
//! -----
//! - Core crate: <https://docs.rs/cityid-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
