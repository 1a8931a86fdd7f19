//! Integration tests for the in-memory world state

use std::collections::BTreeSet;

use core_kernel::{ClaimKey, RangeScan, StoreError, WorldState};
use infra_state::MemoryWorldState;
use proptest::prelude::*;

fn collect_keys(state: &MemoryWorldState, start: &str, end: &str) -> Vec<String> {
    RangeScan::open(state, start, end)
        .unwrap()
        .map(|entry| entry.unwrap().key)
        .collect()
}

#[test]
fn test_range_scan_guard_releases_iterator() {
    let state = MemoryWorldState::with_entries([("CLAIM0", "{}"), ("CLAIM1", "{}")]);

    let keys = collect_keys(&state, "", "");

    assert_eq!(keys, vec!["CLAIM0", "CLAIM1"]);
    assert_eq!(state.open_iterators(), 0);
}

#[test]
fn test_range_scan_guard_releases_on_early_exit() {
    let state = MemoryWorldState::with_entries([("a", "1"), ("b", "2"), ("c", "3")]);

    let first = RangeScan::open(&state, "", "")
        .unwrap()
        .next()
        .unwrap()
        .unwrap();

    assert_eq!(first.key, "a");
    assert_eq!(state.open_iterators(), 0);
}

#[test]
fn test_claim_namespace_range() {
    let state = MemoryWorldState::with_entries([
        ("CAR0", "car"),
        ("CLAIM0", "c0"),
        ("CLAIM10", "c10"),
        ("CLAIM2", "c2"),
        ("CLAIN", "after"),
        ("ZZZ", "z"),
    ]);
    let (start, end) = ClaimKey::namespace_range();

    assert_eq!(
        collect_keys(&state, &start, &end),
        vec!["CLAIM0", "CLAIM10", "CLAIM2"]
    );
}

#[test]
fn test_snapshot_isolated_from_later_writes() {
    let mut state = MemoryWorldState::with_entries([("a", "1")]);
    let snapshot: Vec<_> = {
        let scan = RangeScan::open(&state, "", "").unwrap();
        scan.collect::<Result<Vec<_>, StoreError>>().unwrap()
    };
    state.put_state("b", b"2".to_vec()).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(state.len(), 2);
}

proptest! {
    #[test]
    fn prop_full_scan_is_sorted_and_complete(keys in proptest::collection::vec("[a-zA-Z0-9]{1,6}", 0..20)) {
        let mut state = MemoryWorldState::new();
        for key in &keys {
            state.put_state(key, key.as_bytes().to_vec()).unwrap();
        }

        let scanned = collect_keys(&state, "", "");
        let expected: Vec<String> = keys.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(scanned, expected);
        prop_assert_eq!(state.open_iterators(), 0);
    }
}
