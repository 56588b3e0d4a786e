//! The verification engine: bootstrap once, run harvest/distribute cycles,
//! check strict value growth across the resulting snapshot series.

pub mod bootstrap;
pub mod cycle;
pub mod invariants;
pub mod snapshot;

pub use bootstrap::{bootstrap, Deployment};
pub use cycle::CycleRunner;
pub use invariants::check_monotonic;
pub use snapshot::{PositionSnapshot, SnapshotSeries};
