// Tests in this file share the process-wide index, so cache assertions only
// rely on what a single test can observe regardless of parallel runs.

use citytimezones::*;
use std::thread;

#[test]
fn lookup_via_city_finds_chicago() {
    let cities = lookup_via_city("Chicago").unwrap();
    assert!(!cities.is_empty());
    assert_eq!(cities[0].city, "Chicago");
    assert_eq!(cities[0].timezone, "America/Chicago");
}

#[test]
fn find_from_city_state_province_matches_state_code() {
    let cities = find_from_city_state_province("springfield mo").unwrap();
    assert!(cities
        .iter()
        .any(|c| c.city == "Springfield" && c.province == "Missouri"));
}

#[test]
fn find_from_iso_code_accepts_iso2_and_iso3() {
    let by_iso2 = find_from_iso_code("DE").unwrap();
    assert!(!by_iso2.is_empty());
    assert_eq!(by_iso2, find_from_iso_code("DEU").unwrap());
}

#[test]
fn search_cities_with_default_options() {
    let cities = search_cities("london", default_search_options()).unwrap();
    assert!(cities.iter().any(|c| c.iso2 == "GB"));
    assert!(cities.iter().any(|c| c.iso2 == "CA"));
}

#[test]
fn get_city_mapping_returns_everything() {
    let all = get_city_mapping().unwrap();
    assert!(!all.is_empty());
    assert!(all.iter().any(|c| c.city == "Chicago"));
}

#[test]
fn default_search_options_are_loose() {
    let options = default_search_options();
    assert!(!options.case_sensitive);
    assert!(!options.exact_match);
}

#[test]
fn suspicious_input_is_rejected() {
    let err = lookup_via_city("<script>alert('xss')</script>").unwrap_err();
    assert!(err.is_validation());
    assert!(find_from_city_state_province("javascript:void(0)")
        .unwrap_err()
        .is_validation());
    assert!(find_from_iso_code("INVALID").unwrap_err().is_validation());
}

#[test]
fn empty_input_is_not_an_error() {
    assert!(lookup_via_city("").unwrap().is_empty());
    assert!(find_from_city_state_province("").unwrap().is_empty());
}

#[test]
fn cache_management() {
    assert_eq!(cache_max_size(), DEFAULT_MAX_CACHE_SIZE);
    assert_eq!(cache_max_size(), 1000);

    lookup_via_city("Berlin").unwrap();
    assert!(cache_size() >= 1);
    assert!(cache_size() <= cache_max_size());

    clear_cache();
    lookup_via_city("Hamburg").unwrap();
    assert!(cache_size() >= 1);
}

#[test]
fn cache_stats_track_lookups() {
    let before = get_cache_stats();
    lookup_via_city("Munich").unwrap();
    lookup_via_city("munich").unwrap();
    let after = get_cache_stats();

    assert!(after.hits + after.misses >= before.hits + before.misses + 2);
    assert!(after.hit_rate >= 0.0 && after.hit_rate <= 100.0);
    assert_eq!(after.max_size, 1000);
}

#[test]
fn concurrent_lookups_agree() {
    let handles: Vec<_> = (0..10)
        .map(|_| thread::spawn(|| lookup_via_city("Paris")))
        .collect();

    let results: Vec<Vec<CityData>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    assert!(!results[0].is_empty());
    assert!(results.iter().all(|r| r == &results[0]));
}

#[test]
fn records_and_stats_serialize_to_json() {
    let chicago = lookup_via_city("Chicago").unwrap();
    let json = serde_json::to_value(&chicago[0]).unwrap();
    assert_eq!(json["city"], "Chicago");
    assert_eq!(json["iso3"], "USA");

    let stats = serde_json::to_value(get_cache_stats()).unwrap();
    assert_eq!(stats["max_size"], 1000);
    assert!(stats.get("hit_rate").is_some());
}
