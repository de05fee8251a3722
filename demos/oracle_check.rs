use replaykit::builder::SimBuilder;
use replaykit::observe::OracleValidator;

fn main() {
    // Reference eviction choices for this trace, computed offline.
    let oracle = [1u64, 2];
    let breakpoints = [0u64, 3, 6];
    let validator = OracleValidator::new(&oracle, &breakpoints).unwrap();

    let mut sim = SimBuilder::new(2)
        .try_build_with_observer::<u64, _>(validator)
        .unwrap();
    for key in [1u64, 2, 3, 4, 3, 4] {
        sim.add(key);
    }

    for (interval, rate) in sim.into_observer().finish().iter().enumerate() {
        println!("interval {}: mismatch rate {:.2}", interval, rate);
    }
}

// Expected output:
// interval 0: mismatch rate 0.00
// interval 1: mismatch rate 0.00
//
// Explanation: the LRU choices for this trace (evict 1, then 2) coincide
// with the supplied optimal reference, so both intervals report zero.
