//! Basket splitter: mints the bear/bull pair from stablecoin, deploys idle
//! stablecoin into the external lending vault and splits harvested yield
//! between the harvest caller, the treasury and the reward distributor.
//!
//! Fee receivers change through an explicit two-step: a pending record with
//! an eligibility timestamp, finalized only once the simulated clock passes
//! it. There is no implicit finalize path.

use crate::env::ForkEnv;
use crate::error::{CycleError, GovernanceError, HarnessError, Result};
use crate::math::bps_cut;
use crate::protocol::vault::LendingVault;
use crate::protocol::{BEAR_TOKEN, BULL_TOKEN, SPLITTER_ADDR, STABLECOIN};
use alloy::primitives::{Address, U256};

#[derive(Debug, Clone, Copy)]
pub struct FeeReceivers {
    pub treasury: Address,
    pub distributor: Address,
}

#[derive(Debug, Clone, Copy)]
struct PendingFeeReceivers {
    receivers: FeeReceivers,
    eligible_at: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct HarvestReceipt {
    pub gross_yield: U256,
    pub caller_cut: U256,
    pub treasury_cut: U256,
    pub distributor_cut: U256,
}

pub struct BasketSplitter {
    pub caller_fee_bps: u64,
    pub treasury_fee_bps: u64,
    pub governance_delay_secs: u64,
    receivers: Option<FeeReceivers>,
    pending: Option<PendingFeeReceivers>,
    /// The splitter's external yield adapter. Live contract on a real fork.
    pub adapter: LendingVault,
}

impl BasketSplitter {
    pub fn new(
        caller_fee_bps: u64,
        treasury_fee_bps: u64,
        governance_delay_secs: u64,
        adapter: LendingVault,
    ) -> Self {
        Self {
            caller_fee_bps,
            treasury_fee_bps,
            governance_delay_secs,
            receivers: None,
            pending: None,
            adapter,
        }
    }

    pub fn fee_receivers(&self) -> Option<FeeReceivers> {
        self.receivers
    }

    /// Stablecoin required to mint `amount` of each basket leg. Par pricing:
    /// one unit of stablecoin backs one bear plus one bull unit.
    pub fn preview_mint(&self, amount: U256) -> U256 {
        amount
    }

    /// Pull `preview_mint(amount)` stablecoin from `caller` and mint `amount`
    /// of each leg to it.
    pub fn mint(&self, env: &mut ForkEnv, caller: Address, amount: U256) -> Result<()> {
        let required = self.preview_mint(amount);
        env.ledger
            .transfer(STABLECOIN, caller, SPLITTER_ADDR, required)?;
        env.ledger.mint(BEAR_TOKEN, caller, amount);
        env.ledger.mint(BULL_TOKEN, caller, amount);
        tracing::debug!("[SPLITTER] minted {amount} bear + {amount} bull to {caller}");
        Ok(())
    }

    /// Push the splitter's whole stablecoin balance into the lending adapter.
    pub fn deploy_to_adapter(&mut self, env: &mut ForkEnv) -> Result<U256> {
        let idle = env.ledger.balance_of(STABLECOIN, SPLITTER_ADDR);
        env.ledger.burn(STABLECOIN, SPLITTER_ADDR, idle)?;
        self.adapter.deposit(idle, env.now())?;
        tracing::info!("[SPLITTER] deployed {idle} stablecoin to adapter");
        Ok(idle)
    }

    /// Realize adapter yield and split it caller/treasury/distributor.
    pub fn harvest_yield(&mut self, env: &mut ForkEnv, caller: Address) -> Result<HarvestReceipt> {
        let receivers = self.receivers.ok_or(GovernanceError::ReceiversUnset)?;
        let now = env.now();
        let elapsed_secs = now.saturating_sub(self.adapter.last_accrual());
        let gross = self.adapter.collect(now)?;
        if gross.is_zero() {
            return Err(HarnessError::Cycle(CycleError::NoYieldAccrued {
                elapsed_secs,
            }));
        }
        // Yield arrives as freshly withdrawn stablecoin.
        env.ledger.mint(STABLECOIN, SPLITTER_ADDR, gross);

        let caller_cut = bps_cut(gross, self.caller_fee_bps, "caller fee")?;
        let treasury_cut = bps_cut(gross, self.treasury_fee_bps, "treasury fee")?;
        let distributor_cut = gross - caller_cut - treasury_cut;

        env.ledger
            .transfer(STABLECOIN, SPLITTER_ADDR, caller, caller_cut)?;
        env.ledger
            .transfer(STABLECOIN, SPLITTER_ADDR, receivers.treasury, treasury_cut)?;
        env.ledger.transfer(
            STABLECOIN,
            SPLITTER_ADDR,
            receivers.distributor,
            distributor_cut,
        )?;

        tracing::info!(
            "[SPLITTER] harvested {gross}: caller={caller_cut} treasury={treasury_cut} distributor={distributor_cut}"
        );
        Ok(HarvestReceipt {
            gross_yield: gross,
            caller_cut,
            treasury_cut,
            distributor_cut,
        })
    }

    /// First half of the governed fee-receiver change: record the pending
    /// receivers with an eligibility timestamp.
    pub fn propose_fee_receivers(
        &mut self,
        now: u64,
        treasury: Address,
        distributor: Address,
    ) -> Result<u64> {
        let eligible_at = now.saturating_add(self.governance_delay_secs);
        self.pending = Some(PendingFeeReceivers {
            receivers: FeeReceivers {
                treasury,
                distributor,
            },
            eligible_at,
        });
        tracing::info!(
            "[SPLITTER] proposed fee receivers treasury={treasury} distributor={distributor}, eligible at {eligible_at}"
        );
        Ok(eligible_at)
    }

    /// Second half: fails until the clock passes the eligibility timestamp.
    pub fn finalize_fee_receivers(&mut self, now: u64) -> Result<FeeReceivers> {
        let pending = self.pending.ok_or(GovernanceError::NoPendingChange)?;
        if now < pending.eligible_at {
            return Err(HarnessError::Governance(GovernanceError::DelayNotElapsed {
                now,
                eligible_at: pending.eligible_at,
            }));
        }
        self.receivers = Some(pending.receivers);
        self.pending = None;
        tracing::info!("[SPLITTER] finalized fee receivers at {now}");
        Ok(pending.receivers)
    }
}
