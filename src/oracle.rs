//! Mocked Chainlink-shaped price feeds.
//!
//! A fork test cannot let real feed timestamps age past the protocol's
//! freshness window while simulated time jumps forward, so every feed the
//! deployment reads is overridden here: `refresh` re-reads the upstream
//! source's latest answer and re-installs it timestamped at the simulated
//! "now". The upstream itself is an injectable [`PriceSource`], never a
//! live RPC.

use crate::error::OracleError;
use alloy::primitives::{Address, U256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: U256,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Upstream price source standing in for the live feed on the fork.
pub trait PriceSource {
    fn latest_round_data(&self, now: u64) -> Result<RoundData, OracleError>;
}

/// Deterministic stand-in for a live aggregator: the answer drifts a fixed
/// number of bps per elapsed day and a new upstream round appears once per
/// heartbeat, so two reads at the same simulated instant observe the same
/// round.
#[derive(Debug, Clone)]
pub struct DriftingFeed {
    pub base_answer: U256,
    pub drift_bps_per_day: u64,
    pub heartbeat_secs: u64,
    pub start: u64,
}

impl PriceSource for DriftingFeed {
    fn latest_round_data(&self, now: u64) -> Result<RoundData, OracleError> {
        let elapsed = now.saturating_sub(self.start);
        let drift_bps = self.drift_bps_per_day.saturating_mul(elapsed / 86_400);
        let answer = self.base_answer
            + self.base_answer * U256::from(drift_bps) / U256::from(crate::math::BPS_SCALE);
        let heartbeat = self.heartbeat_secs.max(1);
        let round_id = 1 + elapsed / heartbeat;
        let round_start = self.start + (elapsed / heartbeat) * heartbeat;
        Ok(RoundData {
            round_id,
            answer,
            started_at: round_start,
            updated_at: round_start,
            answered_in_round: round_id,
        })
    }
}

struct FeedSlot {
    source: Box<dyn PriceSource>,
    installed: Option<RoundData>,
}

/// Per-address mocked feed responses, keyed the way the simulation keys
/// everything else: by contract address.
#[derive(Default)]
pub struct MockPriceFeed {
    slots: BTreeMap<Address, FeedSlot>,
}

impl MockPriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, feed: Address, source: Box<dyn PriceSource>) {
        self.slots.insert(
            feed,
            FeedSlot {
                source,
                installed: None,
            },
        );
    }

    /// Re-read the upstream answer and install it at `now`. Refreshing twice
    /// at the same instant keeps the installed round id unchanged instead of
    /// fabricating a duplicate round.
    pub fn refresh(&mut self, feed: Address, now: u64) -> Result<RoundData, OracleError> {
        let slot = self
            .slots
            .get_mut(&feed)
            .ok_or(OracleError::UnregisteredFeed(feed))?;
        let upstream = slot.source.latest_round_data(now)?;
        let round_id = match slot.installed {
            Some(prev) if prev.updated_at == now => prev.round_id,
            Some(prev) => prev.round_id + 1,
            None => upstream.round_id,
        };
        let installed = RoundData {
            round_id,
            answer: upstream.answer,
            started_at: now,
            updated_at: now,
            answered_in_round: round_id,
        };
        slot.installed = Some(installed);
        tracing::debug!(
            "[ORACLE] refreshed feed {feed}: round_id={} answer={} updated_at={now}",
            installed.round_id,
            installed.answer,
        );
        Ok(installed)
    }

    /// Refresh every registered feed. Called after each clock advance.
    pub fn refresh_all(&mut self, now: u64) -> Result<(), OracleError> {
        let feeds: Vec<Address> = self.slots.keys().copied().collect();
        for feed in feeds {
            self.refresh(feed, now)?;
        }
        Ok(())
    }

    /// Freshness-checked read, the consumer-facing `latestRoundData` path.
    pub fn read(
        &self,
        feed: Address,
        now: u64,
        max_age_secs: u64,
    ) -> Result<RoundData, OracleError> {
        let slot = self
            .slots
            .get(&feed)
            .ok_or(OracleError::UnregisteredFeed(feed))?;
        let round = slot.installed.ok_or(OracleError::MissingRound(feed))?;
        let age_secs = now.saturating_sub(round.updated_at);
        if age_secs > max_age_secs {
            return Err(OracleError::StalePrice {
                feed,
                age_secs,
                max_age_secs,
            });
        }
        Ok(round)
    }
}
