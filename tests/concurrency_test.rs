//! The engine and table are shared read-only across threads.

use confusable_distance::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_first_use() {
    const NUM_THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_THREADS));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // All threads race for the lazily built table
                barrier.wait();
                ConfusableTable::global() as *const ConfusableTable as usize
            })
        })
        .collect();

    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_parallel_distances_agree() {
    const NUM_THREADS: usize = 8;
    let engine = ConfusableDistance::new();
    let pairs = [
        ("HELLO", "HELL0", 0),
        ("admin", "adm1n", 1),
        ("hello", "world", 4),
        ("", "abc", 3),
        ("p\u{0430}ypal", "paypal", 0),
    ];

    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for j in 0..200 {
                    let (a, b, expected) = pairs[(i + j) % pairs.len()];
                    assert_eq!(engine.distance(a, b).unwrap(), expected, "{a:?} vs {b:?}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
