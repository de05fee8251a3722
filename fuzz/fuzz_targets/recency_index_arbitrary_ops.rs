#![no_main]

use libfuzzer_sys::fuzz_target;
use replaykit::ds::RecencyIndex;

// Fuzz arbitrary operation sequences on RecencyIndex
//
// Tests random sequences of insert, touch, evict_front, remove, contains
// operations to find edge cases and invariant violations in the index/list
// bijection. Preconditions are respected here; violating them is a panic by
// contract and is covered by unit tests instead.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mut index: RecencyIndex<u64> = RecencyIndex::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = u64::from(data[idx + 1] % 32);

        match op {
            0 => {
                // Insert if absent
                if !index.contains(&key) {
                    index.insert(key);
                }
            }
            1 => {
                // Touch if present
                if index.contains(&key) {
                    index.touch(&key);
                }
            }
            2 => {
                // Evict if non-empty
                if !index.is_empty() {
                    let evicted = index.evict_front();
                    assert!(!index.contains(&evicted));
                }
            }
            3 => {
                // Remove (may be absent)
                let was_present = index.contains(&key);
                assert_eq!(index.remove(&key), was_present);
            }
            4 => {
                // Read-only probes
                let _ = index.contains(&key);
                let _ = index.len();
            }
            _ => unreachable!(),
        }

        // Validate invariants after each operation
        index.check_invariants().expect("bijection invariant violated");

        if index.is_empty() {
            assert_eq!(index.len(), 0);
        } else {
            assert!(index.iter().count() == index.len());
        }

        idx += 2;
    }
});
