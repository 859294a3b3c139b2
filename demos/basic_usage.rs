//! Basic usage example for citytimezones
//!
//! This example demonstrates how to:
//! - Look up a city by exact name
//! - Search across city, state/province and country
//! - List the cities of a country by ISO code
//! - Tell rejected input apart from "no match"
//! - Read the shared cache statistics
//!
//! Run with: `cargo run --example basic_usage`

use citytimezones::*;

fn main() -> Result<()> {
    println!("=== citytimezones Basic Usage Example ===\n");

    // Example 1: Exact city name (case-insensitive)
    println!("--- Example 1: Lookup by city name ---");
    for city in lookup_via_city("chicago")? {
        println!("{}, {} ({}) -> {}", city.city, city.province, city.iso2, city.timezone);
    }
    println!();

    // Example 2: Every word must match some field
    println!("--- Example 2: City + state search ---");
    for city in find_from_city_state_province("springfield mo")? {
        println!("{}, {} [{}] -> {}", city.city, city.province, city.state_ansi, city.timezone);
    }
    println!();

    // Example 3: Country by ISO2 or ISO3 code
    println!("--- Example 3: Cities in DEU ---");
    let germany = find_from_iso_code("DEU")?;
    println!("Cities found: {}", germany.len());
    for city in germany.iter().take(5) {
        println!("- {} ({})", city.city, city.timezone);
    }
    println!();

    // Example 4: Options
    println!("--- Example 4: Case-sensitive search ---");
    let options = default_search_options().case_sensitive(true);
    println!("\"Paris\": {} result(s)", search_cities("Paris", options)?.len());
    println!("\"paris\": {} result(s)", search_cities("paris", options)?.len());
    println!();

    // Example 5: Rejected input vs. no match
    println!("--- Example 5: Error handling ---");
    match lookup_via_city("<script>alert(1)</script>") {
        Err(e) if e.is_validation() => println!("Rejected: {e}"),
        other => println!("Unexpected: {other:?}"),
    }
    println!("\"Atlantis\": {} result(s)", lookup_via_city("Atlantis")?.len());
    println!();

    // Example 6: The repeated lookup is served from the cache
    println!("--- Example 6: Cache statistics ---");
    lookup_via_city("Chicago")?;
    let stats = get_cache_stats();
    println!("Entries: {}/{}", stats.size, stats.max_size);
    println!("Hits: {}, misses: {}", stats.hits, stats.misses);
    println!("Hit rate: {:.1}%", stats.hit_rate);

    Ok(())
}
