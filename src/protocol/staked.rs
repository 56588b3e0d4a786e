//! ERC-4626-shaped staking vault with streamed yield donation.
//!
//! Donated yield does not hit the exchange rate at once: it vests linearly
//! over a fixed window, and `convert_to_assets` only counts the vested
//! portion. A donation arriving mid-stream settles the vested part into
//! principal and restarts the stream with the unvested remainder folded in.

use crate::env::TokenLedger;
use crate::error::Result;
use crate::math::mul_div;
use alloy::primitives::{Address, U256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
struct DonationStream {
    amount: U256,
    start: u64,
    window_secs: u64,
}

impl DonationStream {
    fn vested(&self, now: u64) -> U256 {
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= self.window_secs || self.window_secs == 0 {
            return self.amount;
        }
        // window_secs > 0 here, division is safe.
        self.amount * U256::from(elapsed) / U256::from(self.window_secs)
    }
}

pub struct StakedVault {
    /// The basket leg this vault stakes.
    pub asset: Address,
    /// The vault's own ledger account holding staked + donated tokens.
    pub address: Address,
    vest_window_secs: u64,
    total_shares: U256,
    principal_assets: U256,
    stream: Option<DonationStream>,
    shares: BTreeMap<Address, U256>,
}

impl StakedVault {
    pub fn new(asset: Address, address: Address, vest_window_secs: u64) -> Self {
        Self {
            asset,
            address,
            vest_window_secs,
            total_shares: U256::ZERO,
            principal_assets: U256::ZERO,
            stream: None,
            shares: BTreeMap::new(),
        }
    }

    pub fn total_shares(&self) -> U256 {
        self.total_shares
    }

    pub fn shares_of(&self, owner: Address) -> U256 {
        self.shares.get(&owner).copied().unwrap_or(U256::ZERO)
    }

    /// Assets backing the vault as of `now`: principal plus the vested slice
    /// of any in-flight donation stream.
    pub fn total_assets(&self, now: u64) -> U256 {
        let vested = self.stream.map_or(U256::ZERO, |s| s.vested(now));
        self.principal_assets.saturating_add(vested)
    }

    pub fn deposit(
        &mut self,
        ledger: &mut TokenLedger,
        owner: Address,
        amount: U256,
        now: u64,
    ) -> Result<U256> {
        ledger.transfer(self.asset, owner, self.address, amount)?;
        let total_assets = self.total_assets(now);
        let shares = if self.total_shares.is_zero() || total_assets.is_zero() {
            amount
        } else {
            mul_div(amount, self.total_shares, total_assets, "share mint")?
        };
        self.principal_assets = self.principal_assets.saturating_add(amount);
        self.total_shares = self.total_shares.saturating_add(shares);
        let entry = self.shares.entry(owner).or_insert(U256::ZERO);
        *entry = entry.saturating_add(shares);
        tracing::debug!("[STAKED] {owner} deposited {amount} into {}, got {shares} shares", self.address);
        Ok(shares)
    }

    pub fn convert_to_assets(&self, shares: U256, now: u64) -> Result<U256> {
        if self.total_shares.is_zero() {
            return Ok(U256::ZERO);
        }
        Ok(mul_div(
            shares,
            self.total_assets(now),
            self.total_shares,
            "share conversion",
        )?)
    }

    /// Yield-donation entry point used by the distributor: pull `amount` of
    /// the asset from `from` and start streaming it over the vest window.
    pub fn donate_yield(
        &mut self,
        ledger: &mut TokenLedger,
        from: Address,
        amount: U256,
        now: u64,
    ) -> Result<()> {
        ledger.transfer(self.asset, from, self.address, amount)?;
        let unvested = self.settle_stream(now);
        self.stream = Some(DonationStream {
            amount: unvested.saturating_add(amount),
            start: now,
            window_secs: self.vest_window_secs,
        });
        tracing::debug!(
            "[STAKED] {} received {amount} donated yield, streaming over {}s",
            self.address,
            self.vest_window_secs
        );
        Ok(())
    }

    /// Fold the vested part of the current stream into principal; returns the
    /// unvested remainder.
    fn settle_stream(&mut self, now: u64) -> U256 {
        let Some(stream) = self.stream.take() else {
            return U256::ZERO;
        };
        let vested = stream.vested(now);
        self.principal_assets = self.principal_assets.saturating_add(vested);
        stream.amount - vested
    }
}
