use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citytz
#[derive(Debug, Parser)]
#[command(
    name = "citytz",
    version,
    about = "Look up cities and their timezones from the citytz-core dataset"
)]
pub struct CliArgs {
    /// Dataset to load: .json, .json.gz, .bin or .bin.gz (default: embedded dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Result cache capacity (0 falls back to the default of 1000)
    #[arg(long = "cache-size", global = true)]
    pub cache_size: Option<usize>,

    /// Print results as JSON instead of one line per city
    #[arg(long, global = true)]
    pub json: bool,

    /// Run the query this many times, then print cache statistics to stderr
    #[arg(long, global = true, default_value_t = 1)]
    pub repeat: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cities whose name equals NAME (case-insensitive)
    Exact {
        /// City name (e.g. Chicago)
        name: String,
    },

    /// Cities matching every word across city, state/province and country
    Partial {
        /// Search string (e.g. "springfield mo")
        query: String,
    },

    /// Cities in the country with the given ISO2 or ISO3 code
    Iso {
        /// ISO2 or ISO3 code (e.g. DE, USA)
        code: String,
    },

    /// Token search with configurable matching
    Search {
        query: String,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Require whole-field matches instead of substrings
        #[arg(long)]
        exact: bool,
    },

    /// List every city in the dataset
    All {
        /// Print at most N cities
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show dataset size and cache statistics
    Stats,

    /// Write the loaded dataset as a bincode snapshot (gzip when OUTPUT ends in .gz)
    Build {
        output: PathBuf,
    },
}
