//! Start-point search strategies.
//!
//! Purpose
//! - Produce new tracing origins at the places a boundary tracer cannot continue on its
//!   own: a three-phase invariant (`find_three_phase_start_points`), a congruent point
//!   (`find_nearby_region_start_point`), a composition scan at fixed temperature
//!   (`find_x_start_point`), and the transitions along a pure-component edge
//!   (`find_t_start_point`).
//!
//! Why this design
//! - The hull is sampled, so every strategy filters grid points by phase count and
//!   phase identity instead of trusting a single point. Points that fail the filters
//!   are numerical artifacts and are skipped silently.
//! - A miss is a normal outcome (`None` / empty `Vec`); only usage errors and solver
//!   failures are `Err`.
//! - Emitted temperatures are pre-shifted by `∓dT` so the first tracing step lands on
//!   the temperature that was actually probed.
//!
//! References
//! - Code cross-refs: `solver::{EquilibriumSolver, HullResult, Conditions}`,
//!   `start_point::{StartPoint, StartPointsList, Direction}`, `cfg`.

pub mod cfg;
mod invariant;
mod nearby;
mod scan_t;
mod scan_x;

use std::fmt;
use std::sync::Arc;

pub use cfg::{EdgeScanCfg, NearbyCfg, XScanCfg};
pub use invariant::find_three_phase_start_points;
pub use nearby::find_nearby_region_start_point;
pub use scan_t::find_t_start_point;
pub use scan_x::find_x_start_point;

use crate::compset::CompositionSet;
use crate::solver::{Conditions, SolverError, System, XCondition};

/// Errors surfaced by the search strategies.
#[derive(Debug)]
pub enum SearchError {
    /// Non-graceful miss: no start point found next to these composition sets.
    Unresolved { compsets: Vec<Arc<CompositionSet>> },
    /// A binary-only strategy received this many composition conditions (needs one).
    DegreesOfFreedom { count: usize },
    /// The independent component is not part of the system.
    UnknownComponent { name: String },
    /// The collaborator failed.
    Solver(SolverError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Unresolved { compsets } => {
                write!(f, "could not find start point for neighbor to compsets: [")?;
                for (k, c) in compsets.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, "]")
            }
            SearchError::DegreesOfFreedom { count } => write!(
                f,
                "expected exactly one composition degree of freedom, got {count}"
            ),
            SearchError::UnknownComponent { name } => {
                write!(f, "component {name} is not part of the system")
            }
            SearchError::Solver(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SolverError> for SearchError {
    fn from(err: SolverError) -> Self {
        SearchError::Solver(err)
    }
}

/// The single composition condition and its column in solver composition arrays.
fn independent_axis<'c>(
    system: &System,
    conditions: &'c Conditions,
) -> Result<(&'c XCondition, usize), SearchError> {
    let x = conditions
        .independent()
        .ok_or(SearchError::DegreesOfFreedom {
            count: conditions.composition.len(),
        })?;
    let idx = system
        .component_index(&x.component)
        .ok_or_else(|| SearchError::UnknownComponent {
            name: x.component.clone(),
        })?;
    Ok((x, idx))
}
