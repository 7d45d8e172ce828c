use std::sync::Arc;
use std::thread;

use dateop::{exports_for, forget_runtime, Exports, RuntimeId};


#[test]
fn same_runtime_same_table() {
    let first = exports_for(RuntimeId(1));
    let second = exports_for(RuntimeId(1));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn different_runtimes_different_tables() {
    let one = exports_for(RuntimeId(2));
    let two = exports_for(RuntimeId(3));
    assert!(!Arc::ptr_eq(&one, &two));
}

#[test]
fn forgotten_runtimes_are_rebuilt() {
    let before = exports_for(RuntimeId(4));
    assert!(forget_runtime(RuntimeId(4)));
    assert!(!forget_runtime(RuntimeId(4)));

    let after = exports_for(RuntimeId(4));
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn shared_between_threads() {
    let tables: Vec<Arc<Exports>> = (0..8)
        .map(|_| thread::spawn(|| exports_for(RuntimeId(5))))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }
}

#[test]
fn exported_constructors() {
    let exports = exports_for(RuntimeId(6));

    let utc = (exports.from_local_moment)(2009, 1, 13, 23, 31, 30, 0);
    assert_eq!(utc.epoch_millis(), Some(1_234_567_890_000));

    let by_name = exports.get("fromMoment").unwrap();
    assert_eq!(by_name(2009, 1, 13, 23, 31, 30, 0), (exports.from_moment)(2009, 1, 13, 23, 31, 30, 0));
}
