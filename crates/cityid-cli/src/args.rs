use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for cityid-cli
#[derive(Debug, Parser)]
#[command(
    name = "cityid",
    version,
    about = "CLI for resolving city names against the cityid-core registry"
)]
pub struct CliArgs {
    /// Directory holding the shard files (default: the dataset bundled
    /// with cityid-core)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Query parameters shared by the three lookup subcommands.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// City name to resolve (may contain spaces and commas)
    pub name: String,

    /// Restrict to one country: exact 2-letter code, case-sensitive
    #[arg(short, long)]
    pub country: Option<String>,

    /// Matching mode: exact, nocase, like or startswith
    #[arg(short, long, default_value = "nocase")]
    pub matching: String,

    /// Keep at most this many results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a city name to (id, name, country) triples
    Ids(LookupArgs),

    /// Resolve a city name to full locations (name, coordinates, id, country)
    Locations(LookupArgs),

    /// Resolve a city name to latitude/longitude points
    Geopoints(LookupArgs),

    /// Download the upstream city list and regenerate the four shard files
    #[cfg(feature = "builder")]
    Build {
        /// Directory the generated shard files are written to
        out_dir: PathBuf,

        /// Keep the downloaded city.list.json.gz next to the shards
        #[arg(long)]
        keep_download: bool,
    },
}
