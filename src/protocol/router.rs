//! Zap router: one-call conversion from stablecoin into the basket pair.

use crate::env::ForkEnv;
use crate::error::Result;
use crate::protocol::splitter::BasketSplitter;
use alloy::primitives::{Address, U256};

pub struct ZapRouter;

impl ZapRouter {
    /// Convert `stable_amount` held by `from` into basket legs via the
    /// splitter's mint path. Returns the (bear, bull) amounts credited to
    /// `from`. Par mint yields equal legs.
    pub fn zap_to_basket(
        &self,
        env: &mut ForkEnv,
        splitter: &BasketSplitter,
        from: Address,
        stable_amount: U256,
    ) -> Result<(U256, U256)> {
        splitter.mint(env, from, stable_amount)?;
        tracing::debug!("[ROUTER] zapped {stable_amount} stablecoin for {from}");
        Ok((stable_amount, stable_amount))
    }
}
