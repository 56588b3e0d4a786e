use crate::error::HarnessError;
use crate::math::BPS_SCALE;
use alloy::primitives::U256;
use std::env;

const DEFAULT_GENESIS_TIMESTAMP: u64 = 1_700_000_000;
const DEFAULT_ACCRUAL_WINDOW_SECS: u64 = 30 * 86_400;
const DEFAULT_VEST_WINDOW_SECS: u64 = 3_600;
const DEFAULT_GOVERNANCE_DELAY_SECS: u64 = 2 * 86_400;
const DEFAULT_CALLER_FEE_BPS: u64 = 10;
const DEFAULT_TREASURY_FEE_BPS: u64 = 2_000;
const DEFAULT_VAULT_RATE_BPS_PER_YEAR: u64 = 450;
const DEFAULT_MAX_PRICE_AGE_SECS: u64 = 3_600;
const DEFAULT_MAX_POOL_DRIFT_BPS: u64 = 250;
const DEFAULT_FEED_HEARTBEAT_SECS: u64 = 3_600;
const DEFAULT_FEED_DRIFT_BPS_PER_DAY: u64 = 5;
// 6-decimal stablecoin units throughout.
const DEFAULT_OPERATOR_FUNDING: u64 = 10_000_000_000_000; // 10M units
const DEFAULT_STAKE_AMOUNT: u64 = 100_000_000_000; // 100k units
const DEFAULT_POOL_SEED_LIQUIDITY: u64 = 500_000_000_000; // 500k units
const DEFAULT_FEED_BASE_ANSWER: u64 = 100_000_000; // 1.00 at 8 decimals

fn parse_u64_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// Harness tuning knobs. Everything is overridable from the environment with
/// `HARNESS_*` keys so a soak run can stretch windows or rates without a
/// rebuild.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub genesis_timestamp: u64,
    pub accrual_window_secs: u64,
    pub vest_window_secs: u64,
    pub governance_delay_secs: u64,
    pub caller_fee_bps: u64,
    pub treasury_fee_bps: u64,
    pub vault_rate_bps_per_year: u64,
    pub max_price_age_secs: u64,
    pub max_pool_drift_bps: u64,
    pub feed_heartbeat_secs: u64,
    pub feed_drift_bps_per_day: u64,
    pub feed_base_answer: U256,
    pub operator_funding: U256,
    pub stake_amount: U256,
    pub pool_seed_liquidity: U256,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            genesis_timestamp: DEFAULT_GENESIS_TIMESTAMP,
            accrual_window_secs: DEFAULT_ACCRUAL_WINDOW_SECS,
            vest_window_secs: DEFAULT_VEST_WINDOW_SECS,
            governance_delay_secs: DEFAULT_GOVERNANCE_DELAY_SECS,
            caller_fee_bps: DEFAULT_CALLER_FEE_BPS,
            treasury_fee_bps: DEFAULT_TREASURY_FEE_BPS,
            vault_rate_bps_per_year: DEFAULT_VAULT_RATE_BPS_PER_YEAR,
            max_price_age_secs: DEFAULT_MAX_PRICE_AGE_SECS,
            max_pool_drift_bps: DEFAULT_MAX_POOL_DRIFT_BPS,
            feed_heartbeat_secs: DEFAULT_FEED_HEARTBEAT_SECS,
            feed_drift_bps_per_day: DEFAULT_FEED_DRIFT_BPS_PER_DAY,
            feed_base_answer: U256::from(DEFAULT_FEED_BASE_ANSWER),
            operator_funding: U256::from(DEFAULT_OPERATOR_FUNDING),
            stake_amount: U256::from(DEFAULT_STAKE_AMOUNT),
            pool_seed_liquidity: U256::from(DEFAULT_POOL_SEED_LIQUIDITY),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            genesis_timestamp: parse_u64_env("HARNESS_GENESIS_TIMESTAMP", defaults.genesis_timestamp),
            accrual_window_secs: parse_u64_env(
                "HARNESS_ACCRUAL_WINDOW_SECS",
                defaults.accrual_window_secs,
            ),
            vest_window_secs: parse_u64_env("HARNESS_VEST_WINDOW_SECS", defaults.vest_window_secs),
            governance_delay_secs: parse_u64_env(
                "HARNESS_GOVERNANCE_DELAY_SECS",
                defaults.governance_delay_secs,
            ),
            caller_fee_bps: parse_u64_env("HARNESS_CALLER_FEE_BPS", defaults.caller_fee_bps),
            treasury_fee_bps: parse_u64_env("HARNESS_TREASURY_FEE_BPS", defaults.treasury_fee_bps),
            vault_rate_bps_per_year: parse_u64_env(
                "HARNESS_VAULT_RATE_BPS_PER_YEAR",
                defaults.vault_rate_bps_per_year,
            ),
            max_price_age_secs: parse_u64_env(
                "HARNESS_MAX_PRICE_AGE_SECS",
                defaults.max_price_age_secs,
            ),
            max_pool_drift_bps: parse_u64_env(
                "HARNESS_MAX_POOL_DRIFT_BPS",
                defaults.max_pool_drift_bps,
            ),
            feed_heartbeat_secs: parse_u64_env(
                "HARNESS_FEED_HEARTBEAT_SECS",
                defaults.feed_heartbeat_secs,
            ),
            feed_drift_bps_per_day: parse_u64_env(
                "HARNESS_FEED_DRIFT_BPS_PER_DAY",
                defaults.feed_drift_bps_per_day,
            ),
            feed_base_answer: U256::from(parse_u64_env(
                "HARNESS_FEED_BASE_ANSWER",
                DEFAULT_FEED_BASE_ANSWER,
            )),
            operator_funding: U256::from(parse_u64_env(
                "HARNESS_OPERATOR_FUNDING",
                DEFAULT_OPERATOR_FUNDING,
            )),
            stake_amount: U256::from(parse_u64_env("HARNESS_STAKE_AMOUNT", DEFAULT_STAKE_AMOUNT)),
            pool_seed_liquidity: U256::from(parse_u64_env(
                "HARNESS_POOL_SEED_LIQUIDITY",
                DEFAULT_POOL_SEED_LIQUIDITY,
            )),
        }
    }

    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.accrual_window_secs == 0 {
            return Err(HarnessError::Config(
                "HARNESS_ACCRUAL_WINDOW_SECS must be positive: harvest requires a strictly positive accrual window".into(),
            ));
        }
        if self.vest_window_secs == 0 {
            return Err(HarnessError::Config(
                "HARNESS_VEST_WINDOW_SECS must be positive".into(),
            ));
        }
        if self.caller_fee_bps.saturating_add(self.treasury_fee_bps) >= BPS_SCALE {
            return Err(HarnessError::Config(format!(
                "fee split leaves nothing for the distributor: caller {} bps + treasury {} bps >= {}",
                self.caller_fee_bps, self.treasury_fee_bps, BPS_SCALE
            )));
        }
        if self.treasury_fee_bps == 0 {
            return Err(HarnessError::Config(
                "HARNESS_TREASURY_FEE_BPS must be positive: treasury growth is a checked invariant".into(),
            ));
        }
        if self.vault_rate_bps_per_year == 0 {
            return Err(HarnessError::Config(
                "HARNESS_VAULT_RATE_BPS_PER_YEAR must be positive".into(),
            ));
        }
        if self.stake_amount.is_zero() || self.operator_funding < self.stake_amount {
            return Err(HarnessError::Config(
                "operator funding must cover a positive stake amount".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        HarnessConfig::default().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_fee_split_with_no_distributor_share() {
        let config = HarnessConfig {
            caller_fee_bps: 5_000,
            treasury_fee_bps: 5_000,
            ..HarnessConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_survives_extreme_env_sourced_fee_bps() {
        // Fee knobs come straight from the environment; validation must
        // reject absurd values without tripping an overflow panic.
        let config = HarnessConfig {
            caller_fee_bps: u64::MAX,
            treasury_fee_bps: u64::MAX,
            ..HarnessConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_accrual_window() {
        let config = HarnessConfig {
            accrual_window_secs: 0,
            ..HarnessConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
