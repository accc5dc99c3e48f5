//! Temperature scan along a pure-component edge.

use std::collections::BTreeSet;

use crate::compset::distinct_phases;
use crate::solver::{edge_grid, Conditions, EquilibriumSolver, System, TemperatureRange};
use crate::start_point::{Direction, StartPoint};

use super::cfg::{EdgeScanCfg, ENERGY_SCAN_STEP};
use super::{independent_axis, SearchError};

/// Transition of the stable pure-component phase between two adjacent temperatures.
#[derive(Clone, Debug, PartialEq)]
struct Transition {
    /// Lower bracket temperature.
    temperature: f64,
    phases: BTreeSet<String>,
}

/// Start points seeded from every phase transition of `pure_component`.
///
/// Binary systems only: `conditions` must carry exactly one composition condition.
/// `temperatures.step` is the tracing step `dT`; the energy scan itself runs at 1 K.
/// Each transition is probed at `transition − 2` (negative) and `transition + 2`
/// (positive) on compositions within `cfg.x_distance` of the pure edge; the first hull
/// point showing exactly the two transition phases yields a start point per trial.
pub fn find_t_start_point<S: EquilibriumSolver + ?Sized>(
    solver: &S,
    system: &System,
    conditions: &Conditions,
    temperatures: TemperatureRange,
    pure_component: &str,
    cfg: EdgeScanCfg,
) -> Result<Vec<StartPoint>, SearchError> {
    let (x_cond, indep_idx) = independent_axis(system, conditions)?;
    let dt = temperatures.step;

    let mut pure = vec![pure_component.to_string()];
    if system.has_vacancies() {
        pure.push("VA".to_string());
    }
    let surface = solver.calculate(
        &pure,
        &system.phases,
        &temperatures.with_step(ENERGY_SCAN_STEP),
        conditions.pressure,
    )?;
    let stable = surface.min_energy_phases();
    let transitions: Vec<Transition> = stable
        .windows(2)
        .enumerate()
        .filter_map(|(k, pair)| match (pair[0], pair[1]) {
            (Some(lo), Some(hi)) if lo != hi => Some(Transition {
                temperature: surface.temperatures[k],
                phases: [lo.to_string(), hi.to_string()].into_iter().collect(),
            }),
            _ => None,
        })
        .collect();
    tracing::debug!(
        pure_component,
        transitions = transitions.len(),
        "pure_edge_transitions"
    );

    let probe = conditions.with_composition(
        &x_cond.component,
        edge_grid(pure_component == x_cond.component, cfg.x_distance, cfg.num_x),
    );
    let mut found = Vec::new();
    for transition in &transitions {
        let trials = [
            (transition.temperature - cfg.probe_offset, Direction::Negative),
            (transition.temperature + cfg.probe_offset, Direction::Positive),
        ];
        for (trial_t, trial_direction) in trials {
            let hull = solver.convex_hull(system, &probe.at_temperature(trial_t))?;
            for point in 0..hull.num_points() {
                let trial = hull.compsets_at(point, transition.temperature, indep_idx)?;
                let phases = distinct_phases(&trial);
                if phases.len() != 2 || !phases.iter().all(|p| transition.phases.contains(*p)) {
                    continue;
                }
                let sp = StartPoint::from_owned(
                    trial_t - trial_direction.sign() * dt,
                    trial_direction,
                    trial,
                );
                tracing::debug!(trial_t, start_point = %sp, "pure_edge_found");
                found.push(sp);
                break;
            }
        }
    }
    Ok(found)
}
