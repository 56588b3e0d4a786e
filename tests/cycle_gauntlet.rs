//! Randomized configuration gauntlet: monotonic growth must hold for every
//! sampled combination of rates, windows, fee splits and stake sizes, not
//! just the default tuning.

use alloy::primitives::U256;
use basket_harness::config::HarnessConfig;
use basket_harness::harness::{bootstrap, check_monotonic, CycleRunner};

const SAMPLES: usize = 48;
const CYCLES_PER_SAMPLE: usize = 2;

#[derive(Clone, Copy)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        self.state
    }

    fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        low + (self.next_u64() % (high - low))
    }
}

fn sampled_config(rng: &mut Lcg) -> HarnessConfig {
    HarnessConfig {
        accrual_window_secs: rng.range_u64(86_400, 90 * 86_400),
        vest_window_secs: rng.range_u64(600, 7_200),
        governance_delay_secs: rng.range_u64(3_600, 7 * 86_400),
        caller_fee_bps: rng.range_u64(1, 100),
        treasury_fee_bps: rng.range_u64(100, 3_000),
        vault_rate_bps_per_year: rng.range_u64(50, 5_000),
        feed_drift_bps_per_day: rng.range_u64(0, 50),
        stake_amount: U256::from(rng.range_u64(1_000_000_000, 1_000_000_000_000)),
        ..HarnessConfig::default()
    }
}

#[test]
fn test_monotonic_growth_holds_across_sampled_configs() {
    let mut rng = Lcg::new(0x5eed_cafe_f00d_0001);
    for sample in 0..SAMPLES {
        let config = sampled_config(&mut rng);
        let deployment = bootstrap(config.clone())
            .unwrap_or_else(|err| panic!("sample {sample} bootstrap failed: {err}"));
        let mut runner = CycleRunner::new(deployment).unwrap();
        for cycle in 0..CYCLES_PER_SAMPLE {
            runner
                .run_cycle()
                .unwrap_or_else(|err| panic!("sample {sample} cycle {cycle} failed: {err}"));
        }
        assert_eq!(runner.snapshots().len(), CYCLES_PER_SAMPLE + 1);
        check_monotonic(runner.snapshots()).unwrap_or_else(|err| {
            panic!(
                "sample {sample} violated monotonicity (rate={} accrual={}s vest={}s): {err}",
                config.vault_rate_bps_per_year,
                config.accrual_window_secs,
                config.vest_window_secs
            )
        });
    }
}

#[test]
fn test_gauntlet_rejects_degenerate_fee_splits() {
    let config = HarnessConfig {
        caller_fee_bps: 9_000,
        treasury_fee_bps: 1_000,
        ..HarnessConfig::default()
    };
    assert!(bootstrap(config).is_err());
}
