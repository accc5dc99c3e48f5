//! Splitting at a three-phase invariant (eutectic- or peritectic-like).

use std::sync::Arc;

use crate::compset::{phase_names, spread, CompositionSet};
use crate::start_point::{Direction, StartPoint};

/// Two start points around the invariant the tracer just hit.
///
/// `prev_compsets` is the two-phase region the tracer came from, `new_compsets` the
/// region seen after the step. The region with the wider composition spread is the
/// "large" one (it keeps widening away from the invariant); the other pinches to zero
/// width there. Output:
/// 1. `new_compsets` at the previous temperature, in the current `direction`;
/// 2. the opposing small region: small-region phases missing from the large region,
///    then large-region phases missing from the small region. Going large → small keeps
///    `direction` and the previous temperature; otherwise (equal spreads included) the
///    direction flips and the new temperature is used.
///
/// Returns `None` if either list is empty.
pub fn find_three_phase_start_points(
    new_compsets: &[Arc<CompositionSet>],
    prev_compsets: &[Arc<CompositionSet>],
    direction: Direction,
) -> Option<[StartPoint; 2]> {
    let prev_temperature = prev_compsets.first()?.temperature;
    let new_temperature = new_compsets.first()?.temperature;
    let prev_spread = spread(prev_compsets);
    let new_spread = spread(new_compsets);

    let continued = StartPoint::new(prev_temperature, direction, new_compsets.to_vec());

    let (large, small, opposing_direction, opposing_temperature) = if new_spread < prev_spread {
        (prev_compsets, new_compsets, direction, prev_temperature)
    } else {
        (new_compsets, prev_compsets, direction.opposite(), new_temperature)
    };
    let large_phases = phase_names(large);
    let small_phases = phase_names(small);
    let opposing: Vec<Arc<CompositionSet>> = small
        .iter()
        .filter(|c| !large_phases.contains(&c.phase_name.as_str()))
        .chain(
            large
                .iter()
                .filter(|c| !small_phases.contains(&c.phase_name.as_str())),
        )
        .cloned()
        .collect();

    tracing::debug!(
        prev_spread,
        new_spread,
        direction = ?opposing_direction,
        temperature = opposing_temperature,
        "three_phase_split"
    );
    let opposing = StartPoint::new(opposing_temperature, opposing_direction, opposing);
    Some([continued, opposing])
}
