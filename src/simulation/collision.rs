//! Collision resolution
//!
//! A single pure predicate over the street grid and the signal fixtures.
//! Motion is all-or-nothing per tick: the world either commits the candidate
//! unchanged or rejects it outright.

use super::grid::GridSpec;
use super::signal::SignalFixture;
use super::types::Position;

/// Whether a candidate vehicle position must be rejected.
///
/// Blocked when the candidate leaves the grid's bounding square, when both of
/// its nearest grid-line indices are odd (a block interior), or when it falls
/// inside any fixture's footprint. Alignment with a single road axis is
/// accepted even off that road's centerline.
///
/// No side effects; safe to call speculatively before any state is committed.
pub fn is_blocked(grid: &GridSpec, fixtures: &[SignalFixture], candidate: Position) -> bool {
    if !grid.in_bounds(&candidate) {
        return true;
    }

    if !grid.on_road(&candidate) {
        return true;
    }

    fixtures.iter().any(|fixture| fixture.blocks(&candidate))
}
