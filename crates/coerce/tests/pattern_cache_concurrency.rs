//! Concurrent first use of the date pattern cache.

use std::sync::{Arc, Barrier};
use std::thread;

use chrono::{TimeZone, Utc};
use rill_coerce::temporal::{cache, parse_date, parse_date_lenient};

const THREADS: usize = 16;

#[test]
fn concurrent_first_use_shares_one_compiled_pattern() {
    let pattern = "yyyy/MM/dd HH:mm:ss.SSS";
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache::compiled(pattern, false).unwrap()
            })
        })
        .collect();

    let compiled: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &compiled[0];
    assert!(compiled.iter().all(|c| Arc::ptr_eq(c, first)));
}

#[test]
fn concurrent_parses_agree() {
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let day = u32::try_from(i % 28).unwrap() + 1;
                let text = format!("{day:02}.03.2021 10:{day:02}");
                let parsed = if i % 2 == 0 {
                    parse_date(text.as_str(), "dd.MM.yyyy HH:mm")
                } else {
                    parse_date_lenient(text.as_str(), "dd.MM.yyyy HH:mm", true)
                };
                (day, parsed.unwrap().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (day, parsed) = handle.join().unwrap();
        let expected = Utc.with_ymd_and_hms(2021, 3, day, 10, day, 0).unwrap();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn strict_and_lenient_entries_are_distinct() {
    let strict = cache::compiled("HH 'h'", false).unwrap();
    let lenient = cache::compiled("HH 'h'", true).unwrap();
    assert!(!Arc::ptr_eq(&strict, &lenient));
    assert!(cache::len() >= 2);
}
