#![no_main]

use libfuzzer_sys::fuzz_target;
use replaykit::observe::OracleValidator;
use replaykit::traits::EvictionObserver;

// Fuzz oracle interval accounting
//
// Feeds an arbitrary eviction stream (non-decreasing clocks) into a
// validator over fuzzed breakpoints and checks the rate-sequence contract:
// one rate per interval, every rate in [0, 1].
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // Build a strictly ascending breakpoint sequence from the first bytes.
    let bp_len = 2 + (data[0] as usize) % 6;
    let mut breakpoints = Vec::with_capacity(bp_len);
    let mut t = 0u64;
    for i in 0..bp_len {
        t += 1 + u64::from(*data.get(1 + i).unwrap_or(&1) % 16);
        breakpoints.push(t);
    }

    let oracle: Vec<u64> = data.iter().map(|&b| u64::from(b % 8)).collect();
    let mut validator = match OracleValidator::new(&oracle, &breakpoints) {
        Ok(validator) => validator,
        Err(_) => return,
    };
    let interval_count = validator.interval_count();

    let mut clock = 0u64;
    let stream = data.get(bp_len..).unwrap_or(&[]);
    for pair in stream.chunks_exact(2) {
        clock += u64::from(pair[0] % 4);
        let key = u64::from(pair[1] % 8);
        validator.on_evict(clock, &key);

        for &rate in validator.rates() {
            assert!((0.0..=1.0).contains(&rate));
        }
    }

    let events = validator.consumed();
    let rates = validator.finish();
    assert_eq!(rates.len(), interval_count);
    assert!(rates.iter().all(|r| (0.0..=1.0).contains(r)));
    assert!(events <= data.len());
});
