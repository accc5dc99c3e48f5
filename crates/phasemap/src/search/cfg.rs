//! Search configuration and fixed constants.
//!
//! Policy
//! - Per-call knobs live in small `Copy` configs with defaults taken from practice on
//!   binary CALPHAD databases. Constants below are structural and rarely touched.

/// Nearby-region trial temperatures sit at `T ± dT * NEARBY_TRIAL_FRACTION`.
pub const NEARBY_TRIAL_FRACTION: f64 = 0.1;
/// Temperature step (K) of the pure-component energy scan.
pub const ENERGY_SCAN_STEP: f64 = 1.0;
/// Same-phase hull pairs wider than this are treated as a miscibility gap.
pub const MISCIBILITY_GAP_TOL: f64 = 0.1;

/// Nearby-region (congruent point) search.
#[derive(Clone, Copy, Debug)]
pub struct NearbyCfg {
    /// Half-width of the composition window around the current mean composition.
    pub cutoff_search_distance: f64,
    /// Composition sampling step inside the window.
    pub step: f64,
    /// Return `Ok(None)` on a miss instead of `SearchError::Unresolved`.
    pub graceful: bool,
}

impl Default for NearbyCfg {
    fn default() -> Self {
        Self {
            cutoff_search_distance: 0.1,
            step: 0.005,
            graceful: true,
        }
    }
}

/// Fixed-temperature composition scan.
#[derive(Clone, Copy, Debug)]
pub struct XScanCfg {
    /// Minimum composition split for a hull pair to count as two-phase.
    pub max_discrepancy: f64,
    /// Number of hull samples across `[0, 1]`.
    pub grid_points: usize,
}

impl Default for XScanCfg {
    fn default() -> Self {
        Self {
            max_discrepancy: 0.01,
            grid_points: 101,
        }
    }
}

/// Pure-edge temperature scan.
#[derive(Clone, Copy, Debug)]
pub struct EdgeScanCfg {
    /// Distance from the pure edge probed for the two-phase sliver.
    pub x_distance: f64,
    /// Number of compositions probed.
    pub num_x: usize,
    /// Trial temperatures sit at `transition ± probe_offset` (K).
    pub probe_offset: f64,
}

impl Default for EdgeScanCfg {
    fn default() -> Self {
        Self {
            x_distance: 0.05,
            num_x: 40,
            probe_offset: 2.0,
        }
    }
}
