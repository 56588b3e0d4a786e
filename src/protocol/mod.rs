//! Simulated collaborator contracts.
//!
//! The harness treats these as the black-box deployment a fork test would
//! drive: a basket splitter with a governed fee split, two ERC-4626-shaped
//! staking vaults with streamed yield donation, an external lending vault,
//! a bear/bull liquidity pool, a zap router and the reward distributor.
//! They are reference models, not the production accounting contracts; the
//! one property the harness contract relies on is that a strictly positive
//! accrual window produces strictly positive, fully-split yield.

pub mod distributor;
pub mod pool;
pub mod router;
pub mod splitter;
pub mod staked;
pub mod vault;

use alloy::primitives::Address;

// Canonical sentinel addresses for the simulated deployment.
pub const OPERATOR: Address = Address::new([0xA1; 20]);
pub const ACTOR: Address = Address::new([0xB2; 20]);
pub const TREASURY: Address = Address::new([0xC3; 20]);
pub const HARVEST_CALLER: Address = Address::new([0xD4; 20]);

pub const STABLECOIN: Address = Address::new([0x51; 20]);
pub const BEAR_TOKEN: Address = Address::new([0x52; 20]);
pub const BULL_TOKEN: Address = Address::new([0x53; 20]);

pub const SPLITTER_ADDR: Address = Address::new([0x61; 20]);
pub const BEAR_VAULT_ADDR: Address = Address::new([0x62; 20]);
pub const BULL_VAULT_ADDR: Address = Address::new([0x63; 20]);
pub const POOL_ADDR: Address = Address::new([0x64; 20]);
pub const ROUTER_ADDR: Address = Address::new([0x65; 20]);
pub const DISTRIBUTOR_ADDR: Address = Address::new([0x66; 20]);
pub const LENDING_VAULT_ADDR: Address = Address::new([0x67; 20]);
pub const USD_FEED: Address = Address::new([0x71; 20]);
