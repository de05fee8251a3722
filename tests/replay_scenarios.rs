// ==============================================
// END-TO-END REPLAY SCENARIOS (integration)
// ==============================================
//
// Full traces played through the public surface: builder, simulator,
// admission splitting, oracle validation, eviction recording, and sweeps.

use replaykit::builder::SimBuilder;
use replaykit::observe::{EvictionLog, EvictionRecorder, OracleValidator};
use replaykit::sim::{Request, Simulator, replay, sweep, sweep_parallel};

// ==============================================
// Canonical single-trace scenarios
// ==============================================

#[test]
fn cold_fill_evicts_in_insertion_order() {
    // capacity=2, no splitting: add(1), add(2), add(3).
    let mut log = EvictionLog::with_capacity(4);
    {
        let mut sim = SimBuilder::new(2)
            .try_build_with_observer::<u64, _>(EvictionRecorder::new(&mut log))
            .unwrap();

        let hits: Vec<bool> = [1u64, 2, 3].into_iter().map(|k| sim.add(k)).collect();
        assert_eq!(hits, vec![false, false, false]);
        assert!(sim.check(&2));
        assert!(sim.check(&3));
        assert!(!sim.check(&1));
    }
    assert_eq!(log.entries(), &[1]);
}

#[test]
fn rehit_promotes_and_redirects_eviction() {
    // capacity=2: add(1), add(2), add(1), add(3).
    let mut sim = SimBuilder::new(2).try_build::<u64>().unwrap();
    assert!(!sim.add(1));
    assert!(!sim.add(2));
    assert!(sim.add(1));
    assert!(!sim.add(3));

    let resident: Vec<u64> = sim.resident().copied().collect();
    assert_eq!(resident, vec![1, 3]);
}

#[test]
fn sized_request_admits_a_block_run() {
    // capacity=4 blocks, unit=100: add_withsize(10, 250) => 3 blocks.
    let mut sim: Simulator<u64> = SimBuilder::new(4).block_unit(100).try_build().unwrap();
    let hit = sim.add_withsize(10, 250).unwrap();
    assert!(!hit);
    for key in [10u64, 11, 12] {
        assert!(sim.check(&key));
    }
    assert_eq!(sim.size(), 3);
}

// ==============================================
// Oracle validation round trips
// ==============================================

fn churn_trace() -> Vec<u64> {
    // Working set larger than capacity, with periodic re-references.
    (0..64u64).map(|i| (i * 5 + i / 7) % 12).collect()
}

fn recorded_evictions(capacity: usize, trace: &[u64]) -> Vec<u64> {
    let mut log = EvictionLog::with_capacity(trace.len());
    {
        let mut sim = SimBuilder::new(capacity)
            .try_build_with_observer::<u64, _>(EvictionRecorder::new(&mut log))
            .unwrap();
        for &key in trace {
            sim.add(key);
        }
    }
    log.into_inner()
}

#[test]
fn oracle_matching_own_evictions_scores_zero_everywhere() {
    let trace = churn_trace();
    let evictions = recorded_evictions(4, &trace);
    assert!(!evictions.is_empty());

    let breakpoints = [0u64, 16, 32, 48, 64];
    let validator = OracleValidator::new(&evictions, &breakpoints).unwrap();
    let mut sim = SimBuilder::new(4)
        .try_build_with_observer::<u64, _>(validator)
        .unwrap();
    for &key in &trace {
        sim.add(key);
    }

    let rates = sim.into_observer().finish();
    assert_eq!(rates.len(), 4);
    assert!(rates.iter().all(|&r| r == 0.0));
}

#[test]
fn oracle_disagreeing_everywhere_scores_one_in_active_intervals() {
    let trace = churn_trace();
    let evictions = recorded_evictions(4, &trace);
    // A reference that names a key the simulator never evicts.
    let wrong: Vec<u64> = evictions.iter().map(|_| u64::MAX).collect();

    let breakpoints = [0u64, 32, 64];
    let validator = OracleValidator::new(&wrong, &breakpoints).unwrap();
    let mut sim = SimBuilder::new(4)
        .try_build_with_observer::<u64, _>(validator)
        .unwrap();
    for &key in &trace {
        sim.add(key);
    }

    for rate in sim.into_observer().finish() {
        assert_eq!(rate, 1.0);
    }
}

#[test]
fn quiet_trace_reports_zero_rate_intervals() {
    // Capacity covers the whole working set: no evictions at all.
    let oracle: [u64; 0] = [];
    let breakpoints = [0u64, 8, 16];
    let validator = OracleValidator::new(&oracle, &breakpoints).unwrap();
    let mut sim = SimBuilder::new(16)
        .try_build_with_observer::<u64, _>(validator)
        .unwrap();
    for key in 0..8u64 {
        sim.add(key);
        sim.add(key);
    }

    assert_eq!(sim.into_observer().finish(), vec![0.0, 0.0]);
}

// ==============================================
// Composed observers
// ==============================================

#[test]
fn oracle_and_recorder_compose_without_interference() {
    let trace = churn_trace();
    let evictions = recorded_evictions(4, &trace);

    let breakpoints = [0u64, 32, 64];
    let mut log = EvictionLog::with_capacity(trace.len());
    let rates = {
        let validator = OracleValidator::new(&evictions, &breakpoints).unwrap();
        let recorder = EvictionRecorder::new(&mut log);
        let mut sim = SimBuilder::new(4)
            .try_build_with_observer::<u64, _>((validator, recorder))
            .unwrap();
        for &key in &trace {
            sim.add(key);
        }
        let (validator, _recorder) = sim.into_observer();
        validator.finish()
    };

    // Both observers saw the same eviction sequence.
    assert_eq!(log.entries(), evictions.as_slice());
    assert!(rates.iter().all(|&r| r == 0.0));
}

// ==============================================
// Sweeps
// ==============================================

#[test]
fn sweep_over_sized_trace_matches_direct_replay() {
    let trace: Vec<Request> = (0..128u64)
        .map(|i| Request::sized((i % 24) * 100, 150 + (i % 3) * 100))
        .collect();

    let points = sweep(&[8, 32], 100, &trace).unwrap();

    let mut sim: Simulator<u64> = SimBuilder::new(8).block_unit(100).try_build().unwrap();
    let (hits, misses) = replay(&mut sim, &trace).unwrap();
    assert_eq!(points[0].hits, hits);
    assert_eq!(points[0].misses, misses);
}

#[test]
fn parallel_sweep_is_deterministic() {
    let trace: Vec<Request> = (0..512u64).map(|i| Request::new((i * 11) % 64)).collect();
    let capacities = [1usize, 4, 16, 64];

    let first = sweep_parallel(&capacities, 0, &trace).unwrap();
    let second = sweep_parallel(&capacities, 0, &trace).unwrap();
    let sequential = sweep(&capacities, 0, &trace).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, sequential);

    // Capacity 64 holds the whole universe: only cold misses.
    let full = first.last().unwrap();
    assert_eq!(full.misses, 64);
}
