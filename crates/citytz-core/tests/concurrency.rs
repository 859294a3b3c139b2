use citytz_core::{
    CityIndex, CityRecord, CitySearch, DatasetProvider, EmbeddedDataset, LoadError, SearchOptions,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn identical_concurrent_lookups_load_once_and_agree() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);
    let index = Arc::new(CityIndex::new(move || -> Result<Vec<CityRecord>, LoadError> {
        counter.fetch_add(1, Ordering::SeqCst);
        EmbeddedDataset.load()
    }));
    let barrier = Arc::new(Barrier::new(10));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let index = Arc::clone(&index);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                index.lookup_exact("Chicago")
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(!results[0].is_empty());
    assert!(results.iter().all(|r| r == &results[0]));

    let stats = index.cache_stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.hits + stats.misses, 10);
    assert!(stats.misses >= 1);
}

#[test]
fn mixed_workload_stays_within_capacity() {
    let index = Arc::new(CityIndex::with_config(
        EmbeddedDataset,
        citytz_core::IndexConfig { cache_capacity: 8 },
    ));
    let queries = [
        "berlin", "paris", "london", "perth", "springfield", "portland", "chicago", "hamburg",
        "munich", "zurich", "dresden", "leipzig",
    ];

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for (i, q) in queries.iter().cycle().skip(t).take(50).enumerate() {
                    if i % 2 == 0 {
                        index.lookup_partial(q).unwrap();
                    } else {
                        index.search(q, SearchOptions::default()).unwrap();
                    }
                    assert!(index.cache_size() <= 8);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stats = index.cache_stats();
    assert_eq!(stats.hits + stats.misses, 400);
    assert!(stats.size <= 8);
    assert!(stats.evictions > 0);
}
