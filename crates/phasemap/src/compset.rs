//! Composition sets: one phase's equilibrium state at a point of a binary diagram.
//!
//! - `CompositionSet`: phase name, temperature, independent mole fraction and site fractions.
//! - `EqTol`: tolerances behind `is_close` (no `PartialEq`; call sites pass tolerances).
//! - Slice helpers (`mean_composition`, `composition_sorted`, `phase_order`, `spread`) accept
//!   anything that is `AsRef<CompositionSet>`, so both owned sets and `Arc`-shared sets work.
//!
//! Composition sets are produced by the solver collaborator and never mutated afterwards;
//! start points share them through `Arc`.

use std::collections::BTreeSet;
use std::fmt;

use nalgebra::DVector;
use serde::Serialize;

/// One phase at equilibrium in a binary system.
#[derive(Clone, Debug, Serialize)]
pub struct CompositionSet {
    pub phase_name: String,
    pub temperature: f64,
    /// Mole fraction of the independent component.
    pub composition: f64,
    /// Internal degrees of freedom (site occupancies), in the solver's constituent order.
    pub site_fractions: DVector<f64>,
}

impl CompositionSet {
    pub fn new(
        phase_name: impl Into<String>,
        temperature: f64,
        composition: f64,
        site_fractions: DVector<f64>,
    ) -> Self {
        Self {
            phase_name: phase_name.into(),
            temperature,
            composition,
            site_fractions,
        }
    }
}

impl AsRef<CompositionSet> for CompositionSet {
    #[inline]
    fn as_ref(&self) -> &CompositionSet {
        self
    }
}

impl fmt::Display for CompositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<CompositionSet({}) T={:.2}, X={:.3}>",
            self.phase_name, self.temperature, self.composition
        )
    }
}

/// Equivalence tolerances for composition sets and start points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqTol {
    /// Absolute tolerance on the independent mole fraction.
    pub comp: f64,
    /// Absolute tolerance on temperature (K).
    pub temp: f64,
}

impl Default for EqTol {
    fn default() -> Self {
        Self {
            comp: 0.01,
            temp: 1.0,
        }
    }
}

/// Same phase, and composition and temperature both strictly within tolerance.
#[inline]
pub fn is_close(a: &CompositionSet, b: &CompositionSet, tol: EqTol) -> bool {
    a.phase_name == b.phase_name
        && (a.composition - b.composition).abs() < tol.comp
        && (a.temperature - b.temperature).abs() < tol.temp
}

/// Arithmetic mean of the compositions. NaN for an empty slice.
pub fn mean_composition<C: AsRef<CompositionSet>>(compsets: &[C]) -> f64 {
    let sum: f64 = compsets.iter().map(|c| c.as_ref().composition).sum();
    sum / compsets.len() as f64
}

/// Composition sets ordered by ascending composition (stable for ties).
pub fn composition_sorted<C: AsRef<CompositionSet>>(compsets: &[C]) -> Vec<&C> {
    let mut sorted: Vec<&C> = compsets.iter().collect();
    sorted.sort_by(|a, b| {
        a.as_ref()
            .composition
            .partial_cmp(&b.as_ref().composition)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Phase names in ascending-composition order.
pub fn phase_order<C: AsRef<CompositionSet>>(compsets: &[C]) -> Vec<&str> {
    composition_sorted(compsets)
        .into_iter()
        .map(|c| c.as_ref().phase_name.as_str())
        .collect()
}

/// Phase names in input order.
pub fn phase_names<C: AsRef<CompositionSet>>(compsets: &[C]) -> Vec<&str> {
    compsets
        .iter()
        .map(|c| c.as_ref().phase_name.as_str())
        .collect()
}

/// Set of distinct phase names.
pub fn distinct_phases<C: AsRef<CompositionSet>>(compsets: &[C]) -> BTreeSet<&str> {
    compsets
        .iter()
        .map(|c| c.as_ref().phase_name.as_str())
        .collect()
}

/// Composition spread `max − min`; 0 for an empty slice.
pub fn spread<C: AsRef<CompositionSet>>(compsets: &[C]) -> f64 {
    if compsets.is_empty() {
        return 0.0;
    }
    let (lo, hi) = compsets
        .iter()
        .map(|c| c.as_ref().composition)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });
    (hi - lo).abs()
}
