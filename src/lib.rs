//! Basket-protocol fork-test harness.
//!
//! Everything here runs against a simulated fork: a monotonic clock, a set of
//! mocked Chainlink-shaped price feeds and an in-memory token ledger. The
//! harness bootstraps a full basket-protocol deployment, drives
//! harvest/distribute cycles over it and checks that staked value and the
//! treasury balance strictly grow every cycle.

pub mod clock;
pub mod config;
pub mod env;
pub mod error;
pub mod harness;
pub mod math;
pub mod oracle;
pub mod protocol;
