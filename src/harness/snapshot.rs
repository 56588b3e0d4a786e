use alloy::primitives::U256;
use serde::Serialize;

/// Value metrics captured at a cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionSnapshot {
    pub bear_value: U256,
    pub bull_value: U256,
    pub treasury_balance: U256,
}

/// Append-only snapshot sequence: one entry per cycle boundary, so N cycles
/// produce N+1 entries.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SnapshotSeries {
    snapshots: Vec<PositionSnapshot>,
}

impl SnapshotSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: PositionSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn as_slice(&self) -> &[PositionSnapshot] {
        &self.snapshots
    }

    pub fn last(&self) -> Option<&PositionSnapshot> {
        self.snapshots.last()
    }
}
