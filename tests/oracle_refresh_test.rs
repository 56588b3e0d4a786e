use alloy::primitives::{Address, U256};
use basket_harness::env::ForkEnv;
use basket_harness::error::OracleError;
use basket_harness::oracle::{DriftingFeed, MockPriceFeed, PriceSource, RoundData};

const FEED: Address = Address::new([0x71; 20]);
const GENESIS: u64 = 1_700_000_000;

fn env_with_feed() -> ForkEnv {
    let mut env = ForkEnv::new(GENESIS);
    env.feeds.register(
        FEED,
        Box::new(DriftingFeed {
            base_answer: U256::from(100_000_000u64),
            drift_bps_per_day: 5,
            heartbeat_secs: 3_600,
            start: GENESIS,
        }),
    );
    env
}

#[test]
fn test_advance_keeps_the_feed_inside_the_freshness_window() {
    let mut env = env_with_feed();
    env.advance(30 * 86_400).unwrap();
    let round = env.feeds.read(FEED, env.now(), 3_600).unwrap();
    assert_eq!(round.updated_at, env.now());
}

#[test]
fn test_refresh_is_idempotent_at_constant_now() {
    let mut env = env_with_feed();
    env.advance(3_600).unwrap();
    let first = env.feeds.refresh(FEED, env.now()).unwrap();
    let second = env.feeds.refresh(FEED, env.now()).unwrap();
    assert_eq!(first.answer, second.answer);
    assert_eq!(first.round_id, second.round_id);
}

#[test]
fn test_skipping_the_refresh_trips_staleness() {
    let mut env = env_with_feed();
    env.advance(1).unwrap();
    // Move only the clock; the mocked round keeps its old timestamp.
    env.clock.advance(30 * 86_400);
    let err = env.feeds.read(FEED, env.now(), 3_600).unwrap_err();
    assert!(matches!(err, OracleError::StalePrice { .. }));
}

#[test]
fn test_upstream_failure_is_fatal_not_retried() {
    struct BrokenSource;
    impl PriceSource for BrokenSource {
        fn latest_round_data(&self, _now: u64) -> Result<RoundData, OracleError> {
            Err(OracleError::Source {
                feed: FEED,
                reason: "fork RPC went away".into(),
            })
        }
    }

    let mut env = ForkEnv::new(GENESIS);
    env.feeds.register(FEED, Box::new(BrokenSource));
    let err = env.advance(3_600).unwrap_err();
    assert!(matches!(err, OracleError::Source { .. }));
}

#[test]
fn test_mock_relays_the_latest_upstream_answer() {
    let mut feeds = MockPriceFeed::new();
    feeds.register(
        FEED,
        Box::new(DriftingFeed {
            base_answer: U256::from(100_000_000u64),
            drift_bps_per_day: 10,
            heartbeat_secs: 3_600,
            start: 0,
        }),
    );
    let day_one = feeds.refresh(FEED, 86_400).unwrap();
    let day_ten = feeds.refresh(FEED, 10 * 86_400).unwrap();
    assert!(day_ten.answer > day_one.answer);
    // The installed round is stamped at the refresh instant, not at the
    // upstream round boundary.
    assert_eq!(day_ten.updated_at, 10 * 86_400);
}
