//! Harvest/distribute cycle runner.
//!
//! One cycle walks a fixed phase order over the live deployment:
//!
//! ```text
//! Idle -> Accruing -> Harvested -> Distributed -> Vested -> Settled
//! ```
//!
//! `Settled` becomes the next cycle's `Idle`; no cycle may start before the
//! previous one settled. The only state carried between cycles is the
//! monotonic clock and the collaborators' balances.

use crate::error::{CycleError, HarnessError, Result};
use crate::harness::bootstrap::Deployment;
use crate::harness::snapshot::{PositionSnapshot, SnapshotSeries};
use crate::protocol::{DISTRIBUTOR_ADDR, HARVEST_CALLER, STABLECOIN, TREASURY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Accruing,
    Harvested,
    Distributed,
    Vested,
    Settled,
}

impl CyclePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            CyclePhase::Idle => "idle",
            CyclePhase::Accruing => "accruing",
            CyclePhase::Harvested => "harvested",
            CyclePhase::Distributed => "distributed",
            CyclePhase::Vested => "vested",
            CyclePhase::Settled => "settled",
        }
    }
}

pub struct CycleRunner {
    deployment: Deployment,
    phase: CyclePhase,
    series: SnapshotSeries,
}

impl CycleRunner {
    /// Wrap a bootstrapped deployment and capture the baseline snapshot.
    pub fn new(deployment: Deployment) -> Result<Self> {
        let mut runner = Self {
            deployment,
            phase: CyclePhase::Idle,
            series: SnapshotSeries::new(),
        };
        let baseline = runner.snapshot()?;
        runner.series.push(baseline);
        Ok(runner)
    }

    pub fn snapshots(&self) -> &[PositionSnapshot] {
        self.series.as_slice()
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    fn snapshot(&self) -> Result<PositionSnapshot> {
        let d = &self.deployment;
        let now = d.env.now();
        Ok(PositionSnapshot {
            bear_value: d
                .bear_vault
                .convert_to_assets(d.actor_bear_shares, now)?,
            bull_value: d
                .bull_vault
                .convert_to_assets(d.actor_bull_shares, now)?,
            treasury_balance: d.env.ledger.balance_of(STABLECOIN, TREASURY),
        })
    }

    fn enter(&mut self, from: CyclePhase, to: CyclePhase) -> Result<()> {
        if self.phase != from {
            return Err(HarnessError::Cycle(CycleError::PhaseOrder {
                expected: from.as_str(),
                found: self.phase.as_str(),
            }));
        }
        self.phase = to;
        Ok(())
    }

    /// Run one full accrue/harvest/distribute/vest cycle and return the
    /// (before, after) snapshot pair. The after snapshot is also appended to
    /// the series.
    pub fn run_cycle(&mut self) -> Result<(PositionSnapshot, PositionSnapshot)> {
        let before = self.snapshot()?;

        // Accrual window.
        self.enter(CyclePhase::Idle, CyclePhase::Accruing)?;
        let accrual = self.deployment.config.accrual_window_secs;
        self.deployment.env.advance(accrual)?;

        // Harvest, gated on the distributor actually receiving funds.
        let distributor_before = self
            .deployment
            .env
            .ledger
            .balance_of(STABLECOIN, DISTRIBUTOR_ADDR);
        let receipt = self
            .deployment
            .splitter
            .harvest_yield(&mut self.deployment.env, HARVEST_CALLER)?;
        let distributor_after = self
            .deployment
            .env
            .ledger
            .balance_of(STABLECOIN, DISTRIBUTOR_ADDR);
        if distributor_after <= distributor_before {
            return Err(HarnessError::Cycle(CycleError::EmptyHarvest {
                before: distributor_before,
                after: distributor_after,
            }));
        }
        self.enter(CyclePhase::Accruing, CyclePhase::Harvested)?;

        // Distribution into both vaults.
        let d = &mut self.deployment;
        d.distributor.distribute_rewards(
            &mut d.env,
            &d.splitter,
            &d.router,
            &d.pool,
            &mut d.bear_vault,
            &mut d.bull_vault,
        )?;
        self.enter(CyclePhase::Harvested, CyclePhase::Distributed)?;

        // Vesting window, then settle.
        let vest = self.deployment.config.vest_window_secs;
        self.deployment.env.advance(vest)?;
        self.enter(CyclePhase::Distributed, CyclePhase::Vested)?;

        let after = self.snapshot()?;
        self.series.push(after);
        self.enter(CyclePhase::Vested, CyclePhase::Settled)?;

        tracing::info!(
            "[CYCLE] settled cycle {}: gross_yield={} bear={} bull={} treasury={}",
            self.series.len() - 1,
            receipt.gross_yield,
            after.bear_value,
            after.bull_value,
            after.treasury_balance,
        );

        // Settled is the next cycle's idle state.
        self.phase = CyclePhase::Idle;
        Ok((before, after))
    }
}
