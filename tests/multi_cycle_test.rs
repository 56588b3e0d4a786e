use basket_harness::config::HarnessConfig;
use basket_harness::harness::{bootstrap, check_monotonic, CycleRunner};

#[test]
fn test_three_cycles_yield_four_strictly_increasing_snapshots() {
    let deployment = bootstrap(HarnessConfig::default()).unwrap();
    let mut runner = CycleRunner::new(deployment).unwrap();

    for _ in 0..3 {
        runner.run_cycle().unwrap();
    }

    let snapshots = runner.snapshots();
    assert_eq!(snapshots.len(), 4);
    check_monotonic(snapshots).unwrap();

    // Strictly increasing at every step, not merely start-to-end.
    for pair in snapshots.windows(2) {
        assert!(pair[1].bear_value > pair[0].bear_value);
        assert!(pair[1].bull_value > pair[0].bull_value);
        assert!(pair[1].treasury_balance > pair[0].treasury_balance);
    }
}

#[test]
fn test_snapshot_series_length_tracks_cycle_count() {
    let deployment = bootstrap(HarnessConfig::default()).unwrap();
    let mut runner = CycleRunner::new(deployment).unwrap();
    assert_eq!(runner.snapshots().len(), 1);
    runner.run_cycle().unwrap();
    assert_eq!(runner.snapshots().len(), 2);
    runner.run_cycle().unwrap();
    assert_eq!(runner.snapshots().len(), 3);
}
