//! citytz: command-line interface for citytz-core
//!
//! Usage examples
//! --------------
//!
//! - Exact city name (case-insensitive)
//!   $ citytz exact chicago
//!
//! - Every word must match city, state/province or country
//!   $ citytz partial "springfield mo"
//!
//! - Cities by country code (ISO2 or ISO3)
//!   $ citytz iso DEU
//!
//! - Configurable search, JSON output
//!   $ citytz --json search Paris --case-sensitive
//!
//! - Exercise the cache and show its statistics
//!   $ citytz --repeat 5 exact london
//!
//! - Convert a JSON dataset into a bincode snapshot for faster loads
//!   $ citytz --input cities.json build cities.bin.gz
//!
//! Set `RUST_LOG=debug` to see dataset loading and cache activity.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use citytz_core::loader::snapshot;
use citytz_core::{
    CityIndex, CityRecord, CitySearch, EmbeddedDataset, FileDataset, IndexConfig, SearchOptions,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    if args.repeat == 0 {
        bail!("--repeat must be at least 1");
    }

    let config = IndexConfig {
        cache_capacity: args.cache_size.unwrap_or_default(),
    };
    let index = match &args.input {
        Some(path) => CityIndex::with_config(FileDataset::new(path.clone()), config),
        None => CityIndex::with_config(EmbeddedDataset, config),
    };

    match &args.command {
        Commands::Exact { name } => {
            let cities = repeated(&index, args.repeat, |i| i.lookup_exact(name))?;
            print_cities(&cities, args.json)?;
        }

        Commands::Partial { query } => {
            let cities = repeated(&index, args.repeat, |i| i.lookup_partial(query))?;
            print_cities(&cities, args.json)?;
        }

        Commands::Iso { code } => {
            let cities = repeated(&index, args.repeat, |i| i.lookup_by_iso_code(code))?;
            print_cities(&cities, args.json)?;
        }

        Commands::Search {
            query,
            case_sensitive,
            exact,
        } => {
            let options = SearchOptions::default()
                .case_sensitive(*case_sensitive)
                .exact_match(*exact);
            let cities = repeated(&index, args.repeat, |i| i.search(query, options))?;
            print_cities(&cities, args.json)?;
        }

        Commands::All { limit } => {
            let mut cities = index.all()?;
            if let Some(limit) = limit {
                cities.truncate(*limit);
            }
            print_cities(&cities, args.json)?;
        }

        Commands::Stats => {
            let records = index.dataset_len()?;
            let stats = index.cache_stats();
            if args.json {
                let out = serde_json::json!({ "records": records, "cache": stats });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Dataset statistics:");
                println!("  Records: {records}");
                println!("  Cache capacity: {}", stats.max_size);
            }
        }

        Commands::Build { output } => {
            let records = index.all()?;
            snapshot::write(&records, output)
                .with_context(|| format!("writing snapshot to {}", output.display()))?;
            println!("Wrote {} records to {}", records.len(), output.display());
        }
    }

    if args.repeat > 1 {
        let stats = index.cache_stats();
        eprintln!(
            "cache: {} hits, {} misses, {} evictions, hit rate {:.1}% ({}/{} entries)",
            stats.hits, stats.misses, stats.evictions, stats.hit_rate, stats.size, stats.max_size
        );
    }

    Ok(())
}

/// Runs `lookup` `times` times against the same index and returns the last result.
fn repeated<F>(index: &CityIndex, times: usize, lookup: F) -> citytz_core::Result<Vec<CityRecord>>
where
    F: Fn(&CityIndex) -> citytz_core::Result<Vec<CityRecord>>,
{
    let mut result = lookup(index)?;
    for _ in 1..times {
        result = lookup(index)?;
    }
    Ok(result)
}

fn print_cities(cities: &[CityRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cities)?);
        return Ok(());
    }

    if cities.is_empty() {
        println!("No cities found");
        return Ok(());
    }
    for c in cities {
        let region = if c.province.is_empty() {
            c.country.clone()
        } else {
            format!("{}, {}", c.province, c.country)
        };
        println!("{} ({region}) [{}] {}", c.city, c.iso2, c.timezone);
    }
    Ok(())
}
