//! Simulated fork environment.
//!
//! `ForkEnv` is the explicit context threaded through every operation: the
//! simulated clock, the mocked feeds and the token ledger. Nothing in the
//! harness reads hidden process-wide state, so independent test runs never
//! interfere with each other.

use crate::clock::SimulatedClock;
use crate::error::{LedgerError, OracleError};
use crate::oracle::MockPriceFeed;
use alloy::primitives::{Address, U256};
use std::collections::BTreeMap;

/// In-memory ERC20-equivalent balance book, keyed (token, owner).
#[derive(Debug, Default, Clone)]
pub struct TokenLedger {
    balances: BTreeMap<(Address, Address), U256>,
}

impl TokenLedger {
    pub fn balance_of(&self, token: Address, owner: Address) -> U256 {
        self.balances
            .get(&(token, owner))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    pub fn mint(&mut self, token: Address, owner: Address, amount: U256) {
        let entry = self.balances.entry((token, owner)).or_insert(U256::ZERO);
        *entry = entry.saturating_add(amount);
    }

    pub fn burn(
        &mut self,
        token: Address,
        owner: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(token, owner);
        if have < amount {
            return Err(LedgerError::InsufficientBalance {
                token,
                owner,
                have,
                need: amount,
            });
        }
        self.balances.insert((token, owner), have - amount);
        Ok(())
    }

    pub fn transfer(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        self.burn(token, from, amount)?;
        self.mint(token, to, amount);
        Ok(())
    }
}

pub struct ForkEnv {
    pub clock: SimulatedClock,
    pub feeds: MockPriceFeed,
    pub ledger: TokenLedger,
}

impl ForkEnv {
    pub fn new(genesis_timestamp: u64) -> Self {
        Self {
            clock: SimulatedClock::new(genesis_timestamp),
            feeds: MockPriceFeed::new(),
            ledger: TokenLedger::default(),
        }
    }

    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// Time/oracle advance: move the clock forward by `secs`, then re-install
    /// every registered feed's latest upstream answer at the new now so no
    /// downstream consumer trips a staleness check.
    pub fn advance(&mut self, secs: u64) -> Result<u64, OracleError> {
        let now = self.clock.advance(secs);
        self.feeds.refresh_all(now)?;
        tracing::debug!("[FORK] advanced {secs}s, now={now}");
        Ok(now)
    }
}
