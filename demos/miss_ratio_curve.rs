use replaykit::sim::{Request, sweep_parallel};

fn main() {
    // A looping scan over 64 objects.
    let trace: Vec<Request> = (0..512u64).map(|i| Request::new(i % 64)).collect();

    let points = sweep_parallel(&[8, 16, 32, 64], 0, &trace).unwrap();
    for point in points {
        println!(
            "capacity {:>2}: miss ratio {:.3}",
            point.capacity,
            point.miss_ratio()
        );
    }
}

// Expected output:
// capacity  8: miss ratio 1.000
// capacity 16: miss ratio 1.000
// capacity 32: miss ratio 1.000
// capacity 64: miss ratio 0.125
//
// Explanation: a cyclic scan is the LRU worst case; every capacity below
// the loop length misses on every request, then the full working set fits
// and only the 64 cold misses remain.
