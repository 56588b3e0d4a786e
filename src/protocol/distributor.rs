//! Reward distributor: converts harvested stablecoin into the basket pair and
//! streams it into both staking vaults.

use crate::env::ForkEnv;
use crate::error::{CycleError, HarnessError, Result};
use crate::protocol::pool::BasketPool;
use crate::protocol::router::ZapRouter;
use crate::protocol::splitter::BasketSplitter;
use crate::protocol::staked::StakedVault;
use alloy::primitives::{Address, U256};

#[derive(Debug, Clone, Copy)]
pub struct DistributionReceipt {
    pub stable_spent: U256,
    pub bear_donated: U256,
    pub bull_donated: U256,
}

/// Bound at construction to its own ledger account, the stablecoin it
/// distributes and the price feed it gates on; the live collaborator
/// contracts are handed in per call.
pub struct RewardDistributor {
    pub address: Address,
    pub stablecoin: Address,
    pub feed: Address,
    pub max_price_age_secs: u64,
    pub max_pool_drift_bps: u64,
}

impl RewardDistributor {
    pub fn new(
        address: Address,
        stablecoin: Address,
        feed: Address,
        max_price_age_secs: u64,
        max_pool_drift_bps: u64,
    ) -> Self {
        Self {
            address,
            stablecoin,
            feed,
            max_price_age_secs,
            max_pool_drift_bps,
        }
    }

    /// Convert the distributor's whole stablecoin balance into bear/bull and
    /// donate one leg to each vault. Gates on feed freshness and on the pool
    /// trading near par before moving anything.
    pub fn distribute_rewards(
        &self,
        env: &mut ForkEnv,
        splitter: &BasketSplitter,
        router: &ZapRouter,
        pool: &BasketPool,
        bear_vault: &mut StakedVault,
        bull_vault: &mut StakedVault,
    ) -> Result<DistributionReceipt> {
        let balance = env.ledger.balance_of(self.stablecoin, self.address);
        if balance.is_zero() {
            return Err(HarnessError::Cycle(CycleError::NothingToDistribute));
        }
        let now = env.now();
        env.feeds.read(self.feed, now, self.max_price_age_secs)?;
        if !pool.ratio_near_par(self.max_pool_drift_bps) {
            return Err(HarnessError::Cycle(CycleError::PoolRatioSkewed {
                max_bps: self.max_pool_drift_bps,
            }));
        }

        let (bear_out, bull_out) = router.zap_to_basket(env, splitter, self.address, balance)?;
        bear_vault.donate_yield(&mut env.ledger, self.address, bear_out, now)?;
        bull_vault.donate_yield(&mut env.ledger, self.address, bull_out, now)?;

        tracing::info!(
            "[DISTRIBUTOR] distributed {balance} stablecoin: bear={bear_out} bull={bull_out}"
        );
        Ok(DistributionReceipt {
            stable_spent: balance,
            bear_donated: bear_out,
            bull_donated: bull_out,
        })
    }
}
