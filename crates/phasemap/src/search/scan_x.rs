//! Composition scan at a fixed temperature.

use crate::compset::mean_composition;
use crate::solver::{linspace, Conditions, EquilibriumSolver, System};
use crate::start_point::{Direction, StartPoint};

use super::cfg::XScanCfg;
use super::{independent_axis, SearchError};

/// Start points for the two-phase region nearest the requested composition at `temperature`.
///
/// The requested composition is the mean of the independent condition's values. The hull
/// spans the whole composition axis; the extracted pair is only trusted if a full
/// equilibrium at its mean composition also shows two phases. On success the pair of
/// start points `(T − dT, +)` and `(T + dT, −)` is returned, both built on the verified
/// equilibrium compsets; otherwise the result is empty. A condition without values
/// requests nothing and also yields an empty result.
pub fn find_x_start_point<S: EquilibriumSolver + ?Sized>(
    solver: &S,
    system: &System,
    conditions: &Conditions,
    temperature: f64,
    dt: f64,
    cfg: XScanCfg,
) -> Result<Vec<StartPoint>, SearchError> {
    let (x_cond, indep_idx) = independent_axis(system, conditions)?;
    if x_cond.values.is_empty() {
        tracing::debug!(temperature, component = %x_cond.component, "x_scan_no_request");
        return Ok(Vec::new());
    }
    let requested = x_cond.values.iter().sum::<f64>() / x_cond.values.len() as f64;
    let at_t = conditions.at_temperature(temperature);
    let full_range = at_t.with_composition(&x_cond.component, linspace(0.0, 1.0, cfg.grid_points));

    let hull = solver.convex_hull(system, &full_range)?;
    let cs = solver.extract_two_phase_region(
        &hull,
        temperature,
        indep_idx,
        requested,
        cfg.max_discrepancy,
    )?;
    if cs.len() != 2 {
        tracing::debug!(temperature, requested, found = cs.len(), "x_scan_no_region");
        return Ok(Vec::new());
    }

    let point = at_t.with_composition(&x_cond.component, vec![mean_composition(&cs)]);
    let eq_cs = solver.equilibrium(system, &point, indep_idx)?;
    if eq_cs.len() != 2 {
        tracing::debug!(temperature, phases = eq_cs.len(), "x_scan_unverified");
        return Ok(Vec::new());
    }
    let below = StartPoint::from_owned(temperature - dt, Direction::Positive, eq_cs);
    let above = StartPoint::new(temperature + dt, Direction::Negative, below.compsets().to_vec());
    tracing::debug!(temperature, start_point = %below, "x_scan_found");
    Ok(vec![below, above])
}
