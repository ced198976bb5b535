//! The process-wide engine is initialized exactly once
//!
//! Kept in its own test binary so no other test touches the shared instance.

use scriptgate_config::{ConfigSource, MapConfigSource};
use scriptgate_policy::{PolicyEngine, ThreatLevel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_shared_engine_initialized_once() {
    assert!(PolicyEngine::try_shared().is_none());

    let inits = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let inits = Arc::clone(&inits);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                PolicyEngine::shared(|| {
                    inits.fetch_add(1, Ordering::SeqCst);
                    let level = if i % 2 == 0 { "High" } else { "Low" };
                    Arc::new(MapConfigSource::new().with("OSFunctionThreatLevel", level))
                        as Arc<dyn ConfigSource>
                })
            })
        })
        .collect();

    let engines: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(inits.load(Ordering::SeqCst), 1);
    for engine in &engines {
        assert!(Arc::ptr_eq(engine, &engines[0]));
    }

    let level = engines[0].state().max_threat_level;
    assert!(level == ThreatLevel::High || level == ThreatLevel::Low);

    // Later callers never re-initialize
    let again = PolicyEngine::shared(|| -> Arc<dyn ConfigSource> {
        panic!("shared engine initialized twice")
    });
    assert!(Arc::ptr_eq(&again, &engines[0]));
    assert!(PolicyEngine::try_shared().is_some());
}
