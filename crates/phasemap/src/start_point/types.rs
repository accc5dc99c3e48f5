//! `Direction` and `StartPoint`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::compset::{is_close, mean_composition, phase_order, CompositionSet, EqTol};

/// Sign of the temperature step used to continue exploration from a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }

    /// `+1.0` or `-1.0`.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// A tracing origin. Immutable once built; compsets are shared, never copied.
///
/// Invariants:
/// - `composition` is the mean of the compset compositions unless built with
///   `with_composition`.
#[derive(Clone, Debug, Serialize)]
pub struct StartPoint {
    temperature: f64,
    direction: Direction,
    compsets: Vec<Arc<CompositionSet>>,
    composition: f64,
}

impl StartPoint {
    /// Callers pass at least one compset; an empty list yields a NaN composition.
    pub fn new(temperature: f64, direction: Direction, compsets: Vec<Arc<CompositionSet>>) -> Self {
        let composition = mean_composition(&compsets);
        Self {
            temperature,
            direction,
            compsets,
            composition,
        }
    }

    pub fn with_composition(
        temperature: f64,
        direction: Direction,
        compsets: Vec<Arc<CompositionSet>>,
        composition: f64,
    ) -> Self {
        Self {
            temperature,
            direction,
            compsets,
            composition,
        }
    }

    /// Wrap freshly computed compsets.
    pub fn from_owned(temperature: f64, direction: Direction, compsets: Vec<CompositionSet>) -> Self {
        Self::new(
            temperature,
            direction,
            compsets.into_iter().map(Arc::new).collect(),
        )
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
    #[inline]
    pub fn compsets(&self) -> &[Arc<CompositionSet>] {
        &self.compsets
    }
    #[inline]
    pub fn composition(&self) -> f64 {
        self.composition
    }

    /// Phase names sorted by ascending composition.
    pub fn phase_order(&self) -> Vec<&str> {
        phase_order(&self.compsets)
    }

    /// Tolerance-based equivalence (see module docs).
    ///
    /// The closeness match is checked from both sides so the relation stays symmetric
    /// for lists holding near-identical sets of the same phase.
    pub fn is_duplicate(&self, other: &StartPoint, tol: EqTol) -> bool {
        if self.direction != other.direction || self.compsets.len() != other.compsets.len() {
            return false;
        }
        let covered = |xs: &[Arc<CompositionSet>], ys: &[Arc<CompositionSet>]| {
            xs.iter().all(|c| ys.iter().any(|o| is_close(c, o, tol)))
        };
        covered(&self.compsets, &other.compsets)
            && covered(&other.compsets, &self.compsets)
            && self.phase_order() == other.phase_order()
    }
}

impl fmt::Display for StartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phases: Vec<&str> = self.compsets.iter().map(|c| c.phase_name.as_str()).collect();
        let dir = match self.direction {
            Direction::Positive => "+",
            Direction::Negative => "-",
        };
        write!(
            f,
            "<StartPoint T={:.2}, dT=({}), X={:.3}, Phases={}>",
            self.temperature,
            dir,
            self.composition,
            phases.join("/")
        )
    }
}
