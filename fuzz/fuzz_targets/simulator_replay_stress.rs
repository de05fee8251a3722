#![no_main]

use libfuzzer_sys::fuzz_target;
use replaykit::builder::SimBuilder;
use replaykit::sim::Simulator;

// Fuzz trace replay through the full simulator surface
//
// Byte pairs decode into add / add_withsize / check / remove operations at
// a fuzzed capacity and block unit. The capacity bound and index bijection
// must hold after every request.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // 1-64 blocks of capacity, block unit from a small menu.
    let capacity = 1 + (data[0] as usize) % 64;
    let block_unit = [0u64, 1, 16, 100][(data[1] as usize) % 4];

    let mut sim: Simulator<u64> = match SimBuilder::new(capacity)
        .block_unit(block_unit)
        .try_build()
    {
        Ok(sim) => sim,
        Err(_) => return,
    };

    let mut idx = 2;
    let mut expected_clock = 0u64;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let key = u64::from(data[idx + 1] % 128) * 256;

        match op {
            0..=4 => {
                sim.add(key);
                expected_clock += 1;
            }
            5 => {
                if block_unit > 0 {
                    let size = 1 + u64::from(data[idx + 1]) * 7;
                    let blocks = size.div_ceil(block_unit);
                    sim.add_withsize(key, size).expect("non-zero size admits");
                    expected_clock += blocks;
                } else {
                    sim.add(key);
                    expected_clock += 1;
                }
            }
            6 => {
                let _ = sim.check(&key);
            }
            7 => {
                let _ = sim.remove(&key);
            }
            _ => unreachable!(),
        }

        sim.check_invariants().expect("simulator invariant violated");
        assert!(sim.size() <= capacity);
        assert_eq!(sim.clock(), expected_clock);

        idx += 2;
    }
});
