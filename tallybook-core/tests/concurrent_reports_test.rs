//! Concurrent report generation tests
//!
//! Several threads generate reports from one shared service while another
//! thread keeps adding records to the store underneath them.

use std::sync::{Arc, Barrier};
use std::thread;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tallybook_core::adapters::InMemoryStore;
use tallybook_core::config::ReportSettings;
use tallybook_core::domain::{DateWindow, ExpenseRecord};
use tallybook_core::ports::{FixedClock, ReportRepository};
use tallybook_core::reports::{RangeSelector, ReportQuery};
use tallybook_core::services::ReportService;

/// Number of concurrent reader threads
const THREAD_COUNT: usize = 6;

/// Reports generated per reader thread
const ITERATIONS_PER_THREAD: usize = 5;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

fn later() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 20).unwrap()
}

#[test]
fn test_concurrent_readers_share_one_service() {
    let store = Arc::new(InMemoryStore::demo(today()));
    let service = Arc::new(ReportService::new(
        store.clone(),
        Arc::new(FixedClock(today())),
        &ReportSettings::default(),
    ));

    let expected = serde_json::to_string(
        &service
            .generate(&ReportQuery::range(RangeSelector::LastMonth))
            .unwrap(),
    )
    .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT + 1));
    let mut handles = vec![];

    for _ in 0..THREAD_COUNT {
        let barrier = Arc::clone(&barrier);
        let service = Arc::clone(&service);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let mut outputs = Vec::new();
            for _ in 0..ITERATIONS_PER_THREAD {
                let snapshot = service
                    .generate(&ReportQuery::range(RangeSelector::LastMonth))
                    .unwrap();
                outputs.push(serde_json::to_string(&snapshot).unwrap());
            }
            outputs
        }));
    }

    // Writes are dated after today, outside every window the readers touch
    let writer = {
        let barrier = Arc::clone(&barrier);
        let store = Arc::clone(&store);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..50 {
                store
                    .add_expense(ExpenseRecord::new(
                        format!("late-{}", i),
                        later(),
                        "Corner Cafe",
                        "food",
                        Decimal::new(10, 0),
                    ))
                    .unwrap();
            }
        })
    };

    for handle in handles {
        for output in handle.join().unwrap() {
            assert_eq!(output, expected);
        }
    }
    writer.join().unwrap();

    let upcoming = store
        .list_expenses(&DateWindow::new(later(), later()))
        .unwrap();
    assert_eq!(upcoming.len(), 50);
}

#[test]
fn test_service_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReportService>();
    assert_send_sync::<InMemoryStore>();
}
