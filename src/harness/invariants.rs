//! Cross-cycle invariants.
//!
//! The harness contract is strict monotonic growth, not non-decrease: every
//! cycle harvests a real, positive yield amount, so bear value, bull value
//! and the treasury balance must each move strictly upward between adjacent
//! snapshots. Failures are labeled with the metric and the cycle index so a
//! regression is diagnosable from the first line of output.

use crate::error::{InvariantError, Metric};
use crate::harness::snapshot::PositionSnapshot;
use alloy::primitives::U256;

fn check_metric(
    metric: Metric,
    cycle: usize,
    previous: U256,
    observed: U256,
) -> Result<(), InvariantError> {
    if observed > previous {
        return Ok(());
    }
    Err(InvariantError::Monotonicity {
        metric,
        cycle,
        previous,
        observed,
    })
}

/// Assert strict increase of all three tracked metrics for every adjacent
/// snapshot pair. `snapshots[0]` is the pre-cycle baseline; index `i` in the
/// reported error is the cycle whose settlement violated the property.
pub fn check_monotonic(snapshots: &[PositionSnapshot]) -> Result<(), InvariantError> {
    if snapshots.len() < 2 {
        return Err(InvariantError::TooFewSnapshots(snapshots.len()));
    }
    for (i, pair) in snapshots.windows(2).enumerate() {
        let cycle = i + 1;
        check_metric(Metric::StakedBear, cycle, pair[0].bear_value, pair[1].bear_value)?;
        check_metric(Metric::StakedBull, cycle, pair[0].bull_value, pair[1].bull_value)?;
        check_metric(
            Metric::Treasury,
            cycle,
            pair[0].treasury_balance,
            pair[1].treasury_balance,
        )?;
    }
    Ok(())
}
