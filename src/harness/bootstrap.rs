//! One-shot deployment bootstrap.
//!
//! Mirrors the fork test's setUp: every step is a hard dependency on the
//! previous one and any failure aborts the run through `?`. No partial-state
//! recovery is attempted.

use crate::config::HarnessConfig;
use crate::env::ForkEnv;
use crate::error::Result;
use crate::oracle::DriftingFeed;
use crate::protocol::distributor::RewardDistributor;
use crate::protocol::pool::BasketPool;
use crate::protocol::router::ZapRouter;
use crate::protocol::splitter::BasketSplitter;
use crate::protocol::staked::StakedVault;
use crate::protocol::vault::LendingVault;
use crate::protocol::{
    ACTOR, BEAR_TOKEN, BEAR_VAULT_ADDR, BULL_TOKEN, BULL_VAULT_ADDR, DISTRIBUTOR_ADDR, OPERATOR,
    STABLECOIN, TREASURY, USD_FEED,
};
use alloy::primitives::U256;

/// The wired deployment a bootstrap produces: the fork context plus every
/// collaborator, ready for the cycle runner.
pub struct Deployment {
    pub config: HarnessConfig,
    pub env: ForkEnv,
    pub splitter: BasketSplitter,
    pub bear_vault: StakedVault,
    pub bull_vault: StakedVault,
    pub pool: BasketPool,
    pub router: ZapRouter,
    pub distributor: RewardDistributor,
    pub actor_bear_shares: U256,
    pub actor_bull_shares: U256,
}

/// Deploy and wire the whole protocol in dependency order, seed one staked
/// actor position and push the splitter's stablecoin into the lending vault.
pub fn bootstrap(config: HarnessConfig) -> Result<Deployment> {
    config.validate()?;

    // Fork state.
    let mut env = ForkEnv::new(config.genesis_timestamp);

    // Operator funding.
    env.ledger.mint(STABLECOIN, OPERATOR, config.operator_funding);

    // Register the feed and do one initial advance so nothing downstream
    // observes a never-refreshed price at construction time.
    env.feeds.register(
        USD_FEED,
        Box::new(DriftingFeed {
            base_answer: config.feed_base_answer,
            drift_bps_per_day: config.feed_drift_bps_per_day,
            heartbeat_secs: config.feed_heartbeat_secs,
            start: config.genesis_timestamp,
        }),
    );
    env.advance(1)?;

    // Splitter (owning its lending adapter), staking vaults, router.
    let adapter = LendingVault::new(config.vault_rate_bps_per_year, env.now());
    let mut splitter = BasketSplitter::new(
        config.caller_fee_bps,
        config.treasury_fee_bps,
        config.governance_delay_secs,
        adapter,
    );
    let mut bear_vault = StakedVault::new(BEAR_TOKEN, BEAR_VAULT_ADDR, config.vest_window_secs);
    let mut bull_vault = StakedVault::new(BULL_TOKEN, BULL_VAULT_ADDR, config.vest_window_secs);
    let router = ZapRouter;

    // Liquidity pool backing the pair, seeded by the operator at par.
    let mut pool = BasketPool::new();
    splitter.mint(&mut env, OPERATOR, config.pool_seed_liquidity)?;
    pool.add_liquidity(
        &mut env.ledger,
        OPERATOR,
        config.pool_seed_liquidity,
        config.pool_seed_liquidity,
    )?;

    // Distributor, bound to its account, the stablecoin and the feed.
    let distributor = RewardDistributor::new(
        DISTRIBUTOR_ADDR,
        STABLECOIN,
        USD_FEED,
        config.max_price_age_secs,
        config.max_pool_drift_bps,
    );

    // Two-step fee-receiver change: propose, wait out the delay, finalize.
    splitter.propose_fee_receivers(env.now(), TREASURY, DISTRIBUTOR_ADDR)?;
    env.advance(config.governance_delay_secs)?;
    splitter.finalize_fee_receivers(env.now())?;

    // Seed the actor: fund, mint basket tokens, stake both halves.
    env.ledger
        .transfer(STABLECOIN, OPERATOR, ACTOR, config.stake_amount)?;
    let required = splitter.preview_mint(config.stake_amount);
    splitter.mint(&mut env, ACTOR, required)?;
    let now = env.now();
    let actor_bear_shares =
        bear_vault.deposit(&mut env.ledger, ACTOR, config.stake_amount, now)?;
    let actor_bull_shares =
        bull_vault.deposit(&mut env.ledger, ACTOR, config.stake_amount, now)?;

    // Push the accumulated stablecoin into the external yield vault.
    let deployed = splitter.deploy_to_adapter(&mut env)?;

    tracing::info!(
        "[BOOT] deployment ready: deployed={deployed} actor_bear_shares={actor_bear_shares} actor_bull_shares={actor_bull_shares}"
    );
    Ok(Deployment {
        config,
        env,
        splitter,
        bear_vault,
        bull_vault,
        pool,
        router,
        distributor,
        actor_bear_shares,
        actor_bull_shares,
    })
}
