//! Start points and the de-duplicating frontier.
//!
//! Purpose
//! - `StartPoint` is a tracing origin: temperature, exploration `Direction`, and the
//!   composition sets of the boundary being traced.
//! - `StartPointsList` is the per-run frontier: a FIFO of pending points plus the
//!   visited record, with tolerance-based duplicate suppression.
//!
//! Equivalence
//! - Two start points are duplicates when direction and compset count agree, every
//!   compset of each has a close partner in the other (`compset::is_close`), and the
//!   phase names sorted by composition match. The last condition keeps the two sides
//!   of a congruent point apart.
//!
//! References
//! - Code cross-refs: `compset::{CompositionSet, EqTol}`, `search::*` (producers).

mod list;
mod types;

pub use list::StartPointsList;
pub use types::{Direction, StartPoint};

#[cfg(test)]
mod tests;
