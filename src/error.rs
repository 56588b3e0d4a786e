use alloy::primitives::{Address, U256};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("governance error: {0}")]
    Governance(#[from] GovernanceError),
    #[error("cycle error: {0}")]
    Cycle(#[from] CycleError),
    #[error("invariant error: {0}")]
    Invariant(#[from] InvariantError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("feed {0} has no registered upstream source")]
    UnregisteredFeed(Address),
    #[error("feed {0} was never refreshed, no round installed")]
    MissingRound(Address),
    #[error("feed {feed} is stale: age {age_secs}s exceeds max {max_age_secs}s")]
    StalePrice {
        feed: Address,
        age_secs: u64,
        max_age_secs: u64,
    },
    #[error("upstream source failure for feed {feed}: {reason}")]
    Source { feed: Address, reason: String },
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance of token {token} for {owner}: have {have}, need {need}")]
    InsufficientBalance {
        token: Address,
        owner: Address,
        have: U256,
        need: U256,
    },
    #[error("256-bit overflow in {0}")]
    Overflow(&'static str),
    #[error("zero denominator in {0}")]
    ZeroDenominator(&'static str),
}

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("fee receivers were never finalized")]
    ReceiversUnset,
    #[error("no pending fee-receiver change to finalize")]
    NoPendingChange,
    #[error("governance delay not elapsed: now {now}, eligible at {eligible_at}")]
    DelayNotElapsed { now: u64, eligible_at: u64 },
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("no yield accrued over {elapsed_secs}s accrual window")]
    NoYieldAccrued { elapsed_secs: u64 },
    #[error("harvest moved no funds to the distributor: balance before {before}, after {after}")]
    EmptyHarvest { before: U256, after: U256 },
    #[error("distributor holds no stablecoin to distribute")]
    NothingToDistribute,
    #[error("pool reserve ratio skewed beyond {max_bps} bps, refusing to distribute")]
    PoolRatioSkewed { max_bps: u64 },
    #[error("cycle phase out of order: expected {expected}, found {found}")]
    PhaseOrder {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum InvariantError {
    #[error(
        "{metric} should increase at cycle {cycle}: previous {previous}, observed {observed}"
    )]
    Monotonicity {
        metric: Metric,
        cycle: usize,
        previous: U256,
        observed: U256,
    },
    #[error("need at least 2 snapshots to check monotonicity, got {0}")]
    TooFewSnapshots(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    StakedBear,
    StakedBull,
    Treasury,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::StakedBear => write!(f, "staked BEAR value"),
            Metric::StakedBull => write!(f, "staked BULL value"),
            Metric::Treasury => write!(f, "treasury stablecoin balance"),
        }
    }
}
