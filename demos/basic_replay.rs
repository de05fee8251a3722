use replaykit::builder::SimBuilder;

fn main() {
    let mut sim = SimBuilder::new(2).try_build::<u64>().unwrap();

    println!("add 1: hit={}", sim.add(1));
    println!("add 2: hit={}", sim.add(2));
    println!("add 1: hit={}", sim.add(1));
    println!("add 3: hit={}", sim.add(3));

    println!("resident 2? {}", sim.check(&2));
    println!("clock: {}", sim.clock());
}

// Expected output:
// add 1: hit=false
// add 2: hit=false
// add 1: hit=true
// add 3: hit=false
// resident 2? false
// clock: 4
//
// Explanation: capacity=2; re-adding 1 promotes it to MRU, so admitting 3
// evicts 2 (the least recently used key), not 1.
