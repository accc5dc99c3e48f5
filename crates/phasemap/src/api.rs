//! Curated surface for driver code (UNSTABLE).
//!
//! Breaking changes are allowed; prefer these re-exports over deep paths so callers
//! move together when modules are reorganized.

// Values and tolerances
pub use crate::compset::{
    composition_sorted, is_close, mean_composition, phase_order, spread, CompositionSet, EqTol,
};
// Frontier
pub use crate::start_point::{Direction, StartPoint, StartPointsList};
// Collaborator seam
pub use crate::solver::{
    centered_grid, edge_grid, linspace, Conditions, EnergySurface, EquilibriumSolver,
    HullResult, SolverError, System, TemperatureRange, XCondition,
};
// Strategies
pub use crate::search::{
    cfg::{ENERGY_SCAN_STEP, MISCIBILITY_GAP_TOL, NEARBY_TRIAL_FRACTION},
    find_nearby_region_start_point, find_t_start_point, find_three_phase_start_points,
    find_x_start_point, EdgeScanCfg, NearbyCfg, SearchError, XScanCfg,
};
