//! Start-point discovery and frontier management for binary phase-diagram mapping.
//!
//! A mapping driver pops `StartPoint`s from a `StartPointsList`, traces a boundary from
//! each (outside this crate), and calls one of the `search` strategies wherever tracing
//! stops: at a three-phase invariant, at a congruent point, or when seeding from a fixed
//! temperature or a pure-component edge. New points go back into the same frontier.
//!
//! Layout
//! - `compset`: composition sets and tolerance-based closeness.
//! - `start_point`: `Direction`, `StartPoint`, `StartPointsList`.
//! - `solver`: the equilibrium / convex-hull collaborator seam.
//! - `search`: the four strategies and their configs.
//!
//! Everything is synchronous and single-threaded; the frontier is owned by the driver
//! and passed explicitly.

pub mod api;
pub mod compset;
pub mod search;
pub mod solver;
pub mod start_point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compset::{CompositionSet, EqTol};
pub use start_point::{Direction, StartPoint, StartPointsList};

/// Common exports for driver code.
pub mod prelude {
    pub use crate::compset::{is_close, CompositionSet, EqTol};
    pub use crate::search::{
        find_nearby_region_start_point, find_t_start_point, find_three_phase_start_points,
        find_x_start_point, EdgeScanCfg, NearbyCfg, SearchError, XScanCfg,
    };
    pub use crate::solver::{
        Conditions, EnergySurface, EquilibriumSolver, HullResult, SolverError, System,
        TemperatureRange,
    };
    pub use crate::start_point::{Direction, StartPoint, StartPointsList};
}
