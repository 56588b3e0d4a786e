use basket_harness::env::ForkEnv;
use basket_harness::error::{GovernanceError, HarnessError};
use basket_harness::protocol::splitter::BasketSplitter;
use basket_harness::protocol::vault::LendingVault;
use basket_harness::protocol::{DISTRIBUTOR_ADDR, TREASURY};

const GENESIS: u64 = 1_700_000_000;
const DELAY: u64 = 2 * 86_400;

fn splitter() -> BasketSplitter {
    BasketSplitter::new(10, 2_000, DELAY, LendingVault::new(450, GENESIS))
}

#[test]
fn test_finalize_without_proposal_fails() {
    let mut splitter = splitter();
    let err = splitter.finalize_fee_receivers(GENESIS).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Governance(GovernanceError::NoPendingChange)
    ));
}

#[test]
fn test_finalize_before_eligibility_reports_the_timestamps() {
    let mut env = ForkEnv::new(GENESIS);
    let mut splitter = splitter();
    let eligible_at = splitter
        .propose_fee_receivers(env.now(), TREASURY, DISTRIBUTOR_ADDR)
        .unwrap();
    assert_eq!(eligible_at, GENESIS + DELAY);

    env.clock.advance(DELAY - 1);
    match splitter.finalize_fee_receivers(env.now()).unwrap_err() {
        HarnessError::Governance(GovernanceError::DelayNotElapsed { now, eligible_at }) => {
            assert_eq!(now, GENESIS + DELAY - 1);
            assert_eq!(eligible_at, GENESIS + DELAY);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The pending change survives a failed finalize.
    env.clock.advance(1);
    splitter.finalize_fee_receivers(env.now()).unwrap();
}

#[test]
fn test_finalize_after_delay_installs_receivers_and_clears_pending() {
    let mut env = ForkEnv::new(GENESIS);
    let mut splitter = splitter();
    splitter
        .propose_fee_receivers(env.now(), TREASURY, DISTRIBUTOR_ADDR)
        .unwrap();
    env.clock.advance(DELAY);
    let receivers = splitter.finalize_fee_receivers(env.now()).unwrap();
    assert_eq!(receivers.treasury, TREASURY);
    assert_eq!(receivers.distributor, DISTRIBUTOR_ADDR);

    // Pending record was consumed; a second finalize has nothing to apply.
    let err = splitter.finalize_fee_receivers(env.now()).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Governance(GovernanceError::NoPendingChange)
    ));
}
