#![no_main]

use libfuzzer_sys::fuzz_target;
use replaykit::ds::RecencyList;
use replaykit::ds::SlotId;

// Fuzz arbitrary operation sequences on RecencyList
//
// Drives push_back, pop_front, move_to_back, and remove with a mix of live
// and stale SlotIds, validating link structure after every operation.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: RecencyList<u32> = RecencyList::new();
    let mut ids: Vec<SlotId> = Vec::new();
    let mut next_value = 0u32;

    for &byte in data {
        match byte % 4 {
            0 => {
                let id = list.push_back(next_value);
                ids.push(id);
                next_value = next_value.wrapping_add(1);
            }
            1 => {
                let _ = list.pop_front();
            }
            2 => {
                // May address a stale id; move_to_back must report it.
                if let Some(&id) = ids.get(byte as usize % ids.len().max(1)) {
                    let _ = list.move_to_back(id);
                }
            }
            3 => {
                if let Some(&id) = ids.get(byte as usize % ids.len().max(1)) {
                    let _ = list.remove(id);
                }
            }
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
        assert_eq!(list.iter().count(), list.len());

        if list.is_empty() {
            assert!(list.front().is_none());
            assert!(list.back().is_none());
        }
    }
});
