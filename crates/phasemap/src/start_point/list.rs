//! Frontier of start points for one mapping run.

use std::collections::VecDeque;
use std::fmt;

use crate::compset::EqTol;

use super::types::StartPoint;

/// Visited record plus FIFO queue of pending start points.
///
/// Invariants:
/// - No two entries of `visited` are duplicates, and no two entries of `remaining`
///   are duplicates, unless added through `force_add_start_point`.
/// - `visited` only grows.
#[derive(Clone, Debug, Default)]
pub struct StartPointsList {
    visited: Vec<StartPoint>,
    remaining: VecDeque<StartPoint>,
    tol: EqTol,
}

impl StartPointsList {
    pub fn new(tol: EqTol) -> Self {
        Self {
            visited: Vec::new(),
            remaining: VecDeque::new(),
            tol,
        }
    }

    #[inline]
    pub fn tolerances(&self) -> EqTol {
        self.tol
    }

    /// Duplicate of anything visited or pending.
    pub fn contains_start_point(&self, sp: &StartPoint) -> bool {
        self.visited_start_point(sp) || self.remaining.iter().any(|p| sp.is_duplicate(p, self.tol))
    }

    /// Duplicate of a visited point (pending points ignored).
    pub fn visited_start_point(&self, sp: &StartPoint) -> bool {
        self.visited.iter().any(|p| sp.is_duplicate(p, self.tol))
    }

    /// Enqueue `sp` unless it is already known. Returns whether it was enqueued.
    pub fn add_start_point(&mut self, sp: StartPoint) -> bool {
        if self.contains_start_point(&sp) {
            tracing::trace!(start_point = %sp, "start_point_rejected_duplicate");
            return false;
        }
        self.remaining.push_back(sp);
        true
    }

    /// Enqueue `sp` without the duplicate check.
    pub fn force_add_start_point(&mut self, sp: StartPoint) {
        self.remaining.push_back(sp);
    }

    /// Record a terminal observation straight into `visited` (never traced).
    /// Returns whether it was recorded.
    pub fn add_end_point(&mut self, sp: StartPoint) -> bool {
        if self.contains_start_point(&sp) {
            return false;
        }
        self.visited.push(sp);
        true
    }

    /// Pop pending points until one has not been visited yet; mark it visited.
    ///
    /// A point enqueued twice (forced, or before its twin was visited) is handed out once.
    pub fn get_next_start_point(&mut self) -> Option<StartPoint> {
        while let Some(candidate) = self.remaining.pop_front() {
            if self.visited_start_point(&candidate) {
                tracing::trace!(start_point = %candidate, "start_point_stale");
                continue;
            }
            self.visited.push(candidate.clone());
            return Some(candidate);
        }
        None
    }

    pub fn visited(&self) -> &[StartPoint] {
        &self.visited
    }

    pub fn remaining(&self) -> impl Iterator<Item = &StartPoint> {
        self.remaining.iter()
    }

    #[inline]
    pub fn len_remaining(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl fmt::Display for StartPointsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, p) in self.remaining.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
