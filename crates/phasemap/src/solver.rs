//! Seam to the equilibrium / convex-hull collaborator.
//!
//! Purpose
//! - Describe what the start-point search consumes from a thermodynamic solver without
//!   tying the crate to one: `EquilibriumSolver` is implemented by whoever owns the
//!   database and the numerical engine (hull sampling options live there too).
//! - Give hull output an explicit layout (`HullResult`) instead of implicit array
//!   conventions, and express condition changes as overlays on an immutable base
//!   (`Conditions::at_temperature`, `Conditions::with_composition`).
//!
//! Axis order
//! - A hull grid is row-major over the condition axes (last axis fastest), then the
//!   phase slot. Flat row `point * slots + slot` indexes `phases`, the rows of
//!   `compositions` (columns = components in sorted order) and `site_fractions`.
//! - An energy surface is `temperatures × sample points`; column `j` belongs to
//!   `point_phases[j]`.

use std::fmt;

use nalgebra::{DMatrix, DVector};

use crate::compset::{distinct_phases, mean_composition, spread, CompositionSet};
use crate::search::cfg::MISCIBILITY_GAP_TOL;

/// Failure reported by the collaborator, or a malformed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverError {
    pub reason: String,
}

impl SolverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solver failure: {}", self.reason)
    }
}

impl std::error::Error for SolverError {}

/// Components and candidate phases of the system being mapped.
#[derive(Clone, Debug)]
pub struct System {
    pub components: Vec<String>,
    pub phases: Vec<String>,
}

impl System {
    pub fn new<C, P>(components: C, phases: P) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            phases: phases.into_iter().map(Into::into).collect(),
        }
    }

    /// Column of `component` in solver composition arrays (components sorted by name).
    pub fn component_index(&self, component: &str) -> Option<usize> {
        let mut sorted: Vec<&str> = self.components.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.iter().position(|c| *c == component)
    }

    pub fn has_vacancies(&self) -> bool {
        self.components.iter().any(|c| c == "VA")
    }
}

/// Mole-fraction condition `X(component)` over one or more values.
#[derive(Clone, Debug, PartialEq)]
pub struct XCondition {
    pub component: String,
    pub values: Vec<f64>,
}

/// State-variable conditions for one collaborator call.
///
/// Treat a `Conditions` value as a base: per-trial variants are new values built with
/// the overlay methods, never in-place edits.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditions {
    pub temperature: f64,
    pub pressure: f64,
    pub composition: Vec<XCondition>,
}

impl Conditions {
    /// Binary conditions with a single independent composition axis.
    pub fn binary(temperature: f64, pressure: f64, component: &str, values: Vec<f64>) -> Self {
        Self {
            temperature,
            pressure,
            composition: vec![XCondition {
                component: component.to_string(),
                values,
            }],
        }
    }

    pub fn at_temperature(&self, temperature: f64) -> Self {
        Self {
            temperature,
            ..self.clone()
        }
    }

    /// Replace the values of `X(component)`, adding the condition if absent.
    pub fn with_composition(&self, component: &str, values: Vec<f64>) -> Self {
        let mut out = self.clone();
        match out.composition.iter_mut().find(|x| x.component == component) {
            Some(x) => x.values = values,
            None => out.composition.push(XCondition {
                component: component.to_string(),
                values,
            }),
        }
        out
    }

    /// The single composition condition, if there is exactly one.
    pub fn independent(&self) -> Option<&XCondition> {
        match self.composition.as_slice() {
            [x] => Some(x),
            _ => None,
        }
    }
}

/// Half-open temperature range `[min, max)` sampled every `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn with_step(&self, step: f64) -> Self {
        Self { step, ..*self }
    }

    /// Sample temperatures; empty if `step <= 0` or the range is empty.
    pub fn values(&self) -> Vec<f64> {
        if !(self.step > 0.0) || !(self.max > self.min) {
            return Vec::new();
        }
        let n = ((self.max - self.min) / self.step).ceil() as usize;
        (0..n).map(|k| self.min + k as f64 * self.step).collect()
    }
}

/// `n` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let d = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|k| if k + 1 == n { hi } else { lo + k as f64 * d })
                .collect()
        }
    }
}

/// Values `center ± half_width` every `step`, clipped to the composition domain `[0, 1]`.
pub fn centered_grid(center: f64, half_width: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) {
        return vec![center.clamp(0.0, 1.0)];
    }
    let lo = (center - half_width).max(0.0);
    let hi = (center + half_width).min(1.0);
    // absorb rounding so the upper end is kept whenever it sits on the step lattice
    let n = ((hi - lo) / step + 1e-9).floor() as usize + 1;
    (0..n).map(|k| (lo + k as f64 * step).min(hi)).collect()
}

/// Compositions within `distance` of a pure edge: `[1 − d, 1]` when the pure component is
/// the independent one, else `[0, d]`.
pub fn edge_grid(pure_is_independent: bool, distance: f64, n: usize) -> Vec<f64> {
    if pure_is_independent {
        linspace(1.0 - distance, 1.0, n)
    } else {
        linspace(0.0, distance, n)
    }
}

/// Convex-hull output over a grid of conditions (see module docs for the layout).
#[derive(Clone, Debug)]
pub struct HullResult {
    grid_shape: Vec<usize>,
    slots: usize,
    phases: Vec<String>,
    compositions: DMatrix<f64>,
    site_fractions: Vec<DVector<f64>>,
}

impl HullResult {
    pub fn new(
        grid_shape: Vec<usize>,
        slots: usize,
        phases: Vec<String>,
        compositions: DMatrix<f64>,
        site_fractions: Vec<DVector<f64>>,
    ) -> Result<Self, SolverError> {
        let rows = grid_shape.iter().product::<usize>() * slots;
        if phases.len() != rows || compositions.nrows() != rows || site_fractions.len() != rows {
            return Err(SolverError::new(format!(
                "hull payload shape mismatch: grid {grid_shape:?} × {slots} slots needs {rows} rows, \
                 got phases={}, compositions={}, site_fractions={}",
                phases.len(),
                compositions.nrows(),
                site_fractions.len()
            )));
        }
        Ok(Self {
            grid_shape,
            slots,
            phases,
            compositions,
            site_fractions,
        })
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.grid_shape.iter().product()
    }

    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn grid_shape(&self) -> &[usize] {
        &self.grid_shape
    }

    /// Grid coordinates of flat point `point` (row-major).
    pub fn multi_index(&self, point: usize) -> Vec<usize> {
        let mut idx = vec![0; self.grid_shape.len()];
        let mut rest = point;
        for (axis, &dim) in self.grid_shape.iter().enumerate().rev() {
            if dim == 0 {
                continue;
            }
            idx[axis] = rest % dim;
            rest /= dim;
        }
        idx
    }

    /// Number of component columns in the composition payload.
    #[inline]
    pub fn num_components(&self) -> usize {
        self.compositions.ncols()
    }

    /// One composition set per slot of grid point `point`, projected on component column
    /// `independent_index` and stamped with `temperature`.
    ///
    /// Fails if the payload has no column `independent_index` (e.g. a collaborator that
    /// leaves out the `VA` column) or `point` is past the grid.
    pub fn compsets_at(
        &self,
        point: usize,
        temperature: f64,
        independent_index: usize,
    ) -> Result<Vec<CompositionSet>, SolverError> {
        if independent_index >= self.num_components() {
            return Err(SolverError::new(format!(
                "hull has {} composition columns, independent component is column {independent_index}",
                self.num_components()
            )));
        }
        if point >= self.num_points() {
            return Err(SolverError::new(format!(
                "grid point {point} out of range for grid {:?}",
                self.grid_shape
            )));
        }
        Ok((0..self.slots)
            .map(|slot| {
                let row = point * self.slots + slot;
                CompositionSet::new(
                    self.phases[row].clone(),
                    temperature,
                    self.compositions[(row, independent_index)],
                    self.site_fractions[row].clone(),
                )
            })
            .collect())
    }
}

/// Single-phase molar energies sampled over temperature.
#[derive(Clone, Debug)]
pub struct EnergySurface {
    pub temperatures: Vec<f64>,
    pub point_phases: Vec<String>,
    pub gm: DMatrix<f64>,
}

impl EnergySurface {
    pub fn new(
        temperatures: Vec<f64>,
        point_phases: Vec<String>,
        gm: DMatrix<f64>,
    ) -> Result<Self, SolverError> {
        if gm.nrows() != temperatures.len() || gm.ncols() != point_phases.len() {
            return Err(SolverError::new(format!(
                "energy surface is {}×{}, expected {}×{}",
                gm.nrows(),
                gm.ncols(),
                temperatures.len(),
                point_phases.len()
            )));
        }
        Ok(Self {
            temperatures,
            point_phases,
            gm,
        })
    }

    /// Phase of the lowest finite energy at each temperature (`None` if none is finite).
    pub fn min_energy_phases(&self) -> Vec<Option<&str>> {
        self.gm
            .row_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, g)| g.is_finite())
                    .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(j, _)| self.point_phases[j].as_str())
            })
            .collect()
    }
}

/// The thermodynamic engine the search strategies drive.
///
/// Implementors own the database and any sampling options; all calls are blocking.
pub trait EquilibriumSolver {
    /// Lowest-energy phase combination at every point of the condition grid.
    fn convex_hull(&self, system: &System, conditions: &Conditions)
        -> Result<HullResult, SolverError>;

    /// True multi-phase equilibrium at a single condition point.
    fn equilibrium(
        &self,
        system: &System,
        conditions: &Conditions,
        independent_index: usize,
    ) -> Result<Vec<CompositionSet>, SolverError>;

    /// Single-phase energies for `components` over `temperatures` at `pressure`.
    fn calculate(
        &self,
        components: &[String],
        phases: &[String],
        temperatures: &TemperatureRange,
        pressure: f64,
    ) -> Result<EnergySurface, SolverError>;

    /// Two-phase region of `hull` nearest `target` composition.
    ///
    /// Default: among grid points holding two distinct phases whose compositions differ
    /// by more than `discrepancy_tol` (or one phase split by more than
    /// `MISCIBILITY_GAP_TOL`, a miscibility gap), the one whose mean composition is
    /// closest to `target`; ties keep grid order. Empty if none qualifies.
    fn extract_two_phase_region(
        &self,
        hull: &HullResult,
        temperature: f64,
        independent_index: usize,
        target: f64,
        discrepancy_tol: f64,
    ) -> Result<Vec<CompositionSet>, SolverError> {
        let mut best: Option<(f64, Vec<CompositionSet>)> = None;
        for point in 0..hull.num_points() {
            let cs = hull.compsets_at(point, temperature, independent_index)?;
            let width = spread(&cs);
            let two_phase = match distinct_phases(&cs).len() {
                2 => width > discrepancy_tol,
                1 => cs.len() >= 2 && width > MISCIBILITY_GAP_TOL,
                _ => false,
            };
            if !two_phase {
                continue;
            }
            let dist = (mean_composition(&cs) - target).abs();
            if best.as_ref().map_or(true, |(d, _)| dist < *d) {
                best = Some((dist, cs));
            }
        }
        Ok(best.map(|(_, cs)| cs).unwrap_or_default())
    }
}
