//! Frontier and equivalence tests.

use std::sync::Arc;

use nalgebra::DVector;
use proptest::prelude::*;

use super::*;
use crate::compset::{CompositionSet, EqTol};

fn cs(phase: &str, t: f64, x: f64) -> Arc<CompositionSet> {
    Arc::new(CompositionSet::new(
        phase,
        t,
        x,
        DVector::from_vec(vec![x, 1.0 - x]),
    ))
}

fn two_phase(t: f64, dir: Direction, xa: f64, xb: f64) -> StartPoint {
    StartPoint::new(t, dir, vec![cs("LIQUID", t, xa), cs("FCC_A1", t, xb)])
}

#[test]
fn composition_defaults_to_mean_unless_given() {
    let sp = two_phase(800.0, Direction::Positive, 0.2, 0.4);
    assert!((sp.composition() - 0.3).abs() < 1e-12);
    let fixed = StartPoint::with_composition(
        800.0,
        Direction::Positive,
        sp.compsets().to_vec(),
        0.9,
    );
    assert_eq!(fixed.composition(), 0.9);
}

#[test]
fn direction_opposite_and_sign() {
    assert_eq!(Direction::Positive.opposite(), Direction::Negative);
    assert_eq!(Direction::Negative.opposite(), Direction::Positive);
    assert_eq!(Direction::Positive.sign(), 1.0);
    assert_eq!(Direction::Negative.sign(), -1.0);
}

#[test]
fn opposite_direction_is_never_duplicate() {
    let tol = EqTol::default();
    let a = two_phase(800.0, Direction::Positive, 0.2, 0.4);
    let b = StartPoint::new(800.0, Direction::Negative, a.compsets().to_vec());
    assert!(a.is_duplicate(&a, tol));
    assert!(!a.is_duplicate(&b, tol));
    assert!(!b.is_duplicate(&a, tol));
}

#[test]
fn opposite_phase_order_is_never_duplicate() {
    // Both sides of a congruent point: compositions within tolerance, order swapped.
    let tol = EqTol::default();
    let left = StartPoint::new(
        900.0,
        Direction::Negative,
        vec![cs("LIQUID", 900.0, 0.335), cs("CU2MG", 900.0, 0.330)],
    );
    let right = StartPoint::new(
        900.0,
        Direction::Negative,
        vec![cs("LIQUID", 900.0, 0.330), cs("CU2MG", 900.0, 0.335)],
    );
    assert_ne!(left.phase_order(), right.phase_order());
    assert!(!left.is_duplicate(&right, tol));
    assert!(!right.is_duplicate(&left, tol));
}

#[test]
fn compset_count_mismatch_short_circuits() {
    let tol = EqTol::default();
    let a = two_phase(800.0, Direction::Positive, 0.2, 0.4);
    let b = StartPoint::new(
        800.0,
        Direction::Positive,
        vec![cs("LIQUID", 800.0, 0.2), cs("FCC_A1", 800.0, 0.4), cs("HCP_A3", 800.0, 0.9)],
    );
    assert!(!a.is_duplicate(&b, tol));
}

#[test]
fn display_matches_frontier_log_format() {
    let sp = two_phase(800.0, Direction::Negative, 0.2, 0.4);
    assert_eq!(
        sp.to_string(),
        "<StartPoint T=800.00, dT=(-), X=0.300, Phases=LIQUID/FCC_A1>"
    );
    let mut list = StartPointsList::default();
    list.add_start_point(sp);
    assert!(list.to_string().starts_with("[<StartPoint T=800.00"));
}

#[test]
fn add_twice_keeps_one_entry() {
    let mut list = StartPointsList::new(EqTol::default());
    let sp = two_phase(800.0, Direction::Positive, 0.2, 0.4);
    assert!(list.add_start_point(sp.clone()));
    assert!(!list.add_start_point(sp.clone()));
    // Within tolerance counts as the same point.
    assert!(!list.add_start_point(two_phase(800.4, Direction::Positive, 0.203, 0.398)));
    assert_eq!(list.len_remaining(), 1);
}

#[test]
fn forced_duplicates_are_handed_out_once() {
    let mut list = StartPointsList::default();
    let sp = two_phase(800.0, Direction::Positive, 0.2, 0.4);
    list.force_add_start_point(sp.clone());
    list.force_add_start_point(sp.clone());
    assert_eq!(list.len_remaining(), 2);
    assert!(list.get_next_start_point().is_some());
    assert!(list.get_next_start_point().is_none());
    assert!(list.is_exhausted());
    assert_eq!(list.visited().len(), 1);
}

#[test]
fn end_points_block_later_start_points() {
    let mut list = StartPointsList::default();
    let end = two_phase(1200.0, Direction::Positive, 0.0, 0.01);
    assert!(list.add_end_point(end.clone()));
    assert!(!list.add_end_point(end.clone()));
    assert!(list.visited_start_point(&end));
    assert!(!list.add_start_point(end));
    assert!(list.get_next_start_point().is_none());
}

#[test]
fn fifo_order_and_visited_growth() {
    let mut list = StartPointsList::default();
    let pts = [
        two_phase(700.0, Direction::Positive, 0.1, 0.3),
        two_phase(800.0, Direction::Positive, 0.2, 0.4),
        two_phase(900.0, Direction::Negative, 0.3, 0.5),
    ];
    for p in &pts {
        assert!(list.add_start_point(p.clone()));
    }
    let mut seen = Vec::new();
    while let Some(p) = list.get_next_start_point() {
        seen.push(p.temperature());
    }
    assert_eq!(seen, vec![700.0, 800.0, 900.0]);
    let visited = list.visited();
    assert!(visited.len() >= seen.len());
    for (i, a) in visited.iter().enumerate() {
        for b in &visited[i + 1..] {
            assert!(!a.is_duplicate(b, list.tolerances()));
        }
    }
}

fn phase_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("LIQUID"), Just("FCC_A1"), Just("BCC_A2")]
}

fn start_point(dir: Direction) -> impl Strategy<Value = StartPoint> {
    (
        phase_name(),
        phase_name(),
        0.0..1.0f64,
        0.0..1.0f64,
        799.0..801.0f64,
    )
        .prop_map(move |(pa, pb, xa, xb, t)| {
            StartPoint::new(t, dir, vec![cs(pa, t, xa), cs(pb, t, xb)])
        })
}

proptest! {
    #[test]
    fn duplicate_relation_is_symmetric(
        a in start_point(Direction::Positive),
        b in start_point(Direction::Positive),
        comp in 0.001..0.5f64,
    ) {
        let tol = EqTol { comp, temp: 1.0 };
        prop_assert_eq!(a.is_duplicate(&b, tol), b.is_duplicate(&a, tol));
    }

    #[test]
    fn flipped_direction_never_matches(a in start_point(Direction::Negative)) {
        let flipped = StartPoint::new(a.temperature(), a.direction().opposite(), a.compsets().to_vec());
        prop_assert!(!a.is_duplicate(&flipped, EqTol::default()));
    }
}
