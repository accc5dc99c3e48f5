//! Search for the region on the other side of a congruent point.

use std::sync::Arc;

use crate::compset::{distinct_phases, mean_composition, phase_order, CompositionSet};
use crate::solver::{centered_grid, Conditions, EquilibriumSolver, System};
use crate::start_point::{Direction, StartPoint, StartPointsList};

use super::cfg::{NearbyCfg, NEARBY_TRIAL_FRACTION};
use super::{independent_axis, SearchError};

/// Find and enqueue the start point across a congruent point from `compsets`.
///
/// Trial temperatures are `T − dT/10` (negative) then `T + dT/10` (positive). At each,
/// the hull is sampled on a composition window around the mean of `compsets`, and grid
/// points are tested in hull order for:
/// 1. exactly two distinct phases (single-phase hull pairs are not two-phase regions);
/// 2. at least one phase shared with `compsets`;
/// 3. a composition-sorted phase order different from that of `compsets`.
///
/// The first match the frontier accepts is returned; a rejected duplicate keeps the scan
/// going. Trial compsets carry the reference temperature `temperature`.
///
/// A miss yields `Ok(None)` when `cfg.graceful`, else `SearchError::Unresolved`.
#[allow(clippy::too_many_arguments)]
pub fn find_nearby_region_start_point<S: EquilibriumSolver + ?Sized>(
    solver: &S,
    system: &System,
    conditions: &Conditions,
    compsets: &[Arc<CompositionSet>],
    temperature: f64,
    dt: f64,
    frontier: &mut StartPointsList,
    cfg: NearbyCfg,
) -> Result<Option<StartPoint>, SearchError> {
    let (x_cond, indep_idx) = independent_axis(system, conditions)?;
    let average = mean_composition(compsets);
    let current_order = phase_order(compsets);
    let current_phases = distinct_phases(compsets);
    let window = conditions.with_composition(
        &x_cond.component,
        centered_grid(average, cfg.cutoff_search_distance, cfg.step),
    );

    let trials = [
        (temperature - dt * NEARBY_TRIAL_FRACTION, Direction::Negative),
        (temperature + dt * NEARBY_TRIAL_FRACTION, Direction::Positive),
    ];
    for (trial_t, trial_direction) in trials {
        let hull = solver.convex_hull(system, &window.at_temperature(trial_t))?;
        for point in 0..hull.num_points() {
            let trial = hull.compsets_at(point, temperature, indep_idx)?;
            let trial_phases = distinct_phases(&trial);
            if trial_phases.len() != 2 {
                continue;
            }
            if trial_phases.is_disjoint(&current_phases) {
                continue;
            }
            if phase_order(&trial) == current_order {
                continue;
            }
            let sp = StartPoint::from_owned(
                trial_t - trial_direction.sign() * dt,
                trial_direction,
                trial,
            );
            if frontier.add_start_point(sp.clone()) {
                tracing::debug!(
                    trial_t,
                    direction = ?trial_direction,
                    grid_index = ?hull.multi_index(point),
                    start_point = %sp,
                    "nearby_region_found"
                );
                return Ok(Some(sp));
            }
        }
    }

    tracing::debug!(temperature, composition = average, "nearby_region_missed");
    if cfg.graceful {
        Ok(None)
    } else {
        Err(SearchError::Unresolved {
            compsets: compsets.to_vec(),
        })
    }
}
