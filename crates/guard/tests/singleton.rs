//! Singleton lifecycle coverage.
//!
//! Kept in its own test binary so the process starts with no instance;
//! every other test binary is free to call `Validator::instance()`.

use dto_guard::Validator;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn instance_is_created_once_and_published_to_all_threads() {
    assert!(
        !Validator::has_instance(),
        "no instance may exist before the first access"
    );

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Validator::instance()
            })
        })
        .collect();

    let published: Vec<&'static Validator> = handles
        .into_iter()
        .filter_map(|handle| handle.join().ok())
        .collect();
    assert_eq!(published.len(), 8, "every racing thread observes an instance");

    let first = Validator::instance();
    assert!(
        published
            .iter()
            .all(|validator| std::ptr::eq(*validator, first)),
        "racing callers must never observe two distinct instances"
    );

    assert!(Validator::has_instance());
    assert!(std::ptr::eq(Validator::instance(), first));
}
