//! Bear/bull liquidity pool backing the basket pair.
//!
//! The distributor gates on this pool's reserve ratio before pushing rewards:
//! a pair trading far from par means someone skewed the pricing surface and
//! conversions through it would leak value.

use crate::env::TokenLedger;
use crate::error::Result;
use crate::math::ratio_within_bps;
use crate::protocol::{BEAR_TOKEN, BULL_TOKEN, POOL_ADDR};
use alloy::primitives::{Address, U256};

#[derive(Debug, Clone, Copy)]
pub struct BasketPool {
    bear_reserve: U256,
    bull_reserve: U256,
}

impl BasketPool {
    pub fn new() -> Self {
        Self {
            bear_reserve: U256::ZERO,
            bull_reserve: U256::ZERO,
        }
    }

    pub fn reserves(&self) -> (U256, U256) {
        (self.bear_reserve, self.bull_reserve)
    }

    pub fn add_liquidity(
        &mut self,
        ledger: &mut TokenLedger,
        from: Address,
        bear_amount: U256,
        bull_amount: U256,
    ) -> Result<()> {
        ledger.transfer(BEAR_TOKEN, from, POOL_ADDR, bear_amount)?;
        ledger.transfer(BULL_TOKEN, from, POOL_ADDR, bull_amount)?;
        self.bear_reserve = self.bear_reserve.saturating_add(bear_amount);
        self.bull_reserve = self.bull_reserve.saturating_add(bull_amount);
        tracing::debug!(
            "[POOL] liquidity added: bear_reserve={} bull_reserve={}",
            self.bear_reserve,
            self.bull_reserve
        );
        Ok(())
    }

    /// True when the bear/bull reserve ratio is within `max_bps` of par.
    pub fn ratio_near_par(&self, max_bps: u64) -> bool {
        ratio_within_bps(
            self.bear_reserve,
            self.bull_reserve,
            U256::from(1u64),
            U256::from(1u64),
            max_bps,
        )
    }
}

impl Default for BasketPool {
    fn default() -> Self {
        Self::new()
    }
}
