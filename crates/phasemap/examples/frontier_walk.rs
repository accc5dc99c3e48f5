//! Walk a small synthetic frontier and print the visited start points as JSON.
//!
//! A eutectic at `--temperature` splits into two start points; a handful of near-copies
//! are then offered to the frontier to show duplicate rejection under the given
//! tolerances. Run with `RUST_LOG=trace` to see every rejection.
//!
//! cargo run -p phasemap --example frontier_walk -- --temperature 1000 --comp-tol 0.01

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use nalgebra::DVector;
use phasemap::compset::{CompositionSet, EqTol};
use phasemap::search::find_three_phase_start_points;
use phasemap::start_point::{Direction, StartPoint, StartPointsList};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frontier_walk")]
#[command(about = "Split a eutectic and drain the resulting frontier")]
struct Args {
    /// Eutectic temperature (K)
    #[arg(long, default_value_t = 1000.0)]
    temperature: f64,
    /// Temperature step of the synthetic tracer (K)
    #[arg(long, default_value_t = 1.0)]
    dt: f64,
    /// Composition tolerance for duplicate detection
    #[arg(long, default_value_t = 0.01)]
    comp_tol: f64,
    /// Temperature tolerance for duplicate detection (K)
    #[arg(long, default_value_t = 1.0)]
    temp_tol: f64,
}

fn cs(phase: &str, t: f64, x: f64) -> Arc<CompositionSet> {
    Arc::new(CompositionSet::new(phase, t, x, DVector::from_vec(vec![x, 1.0 - x])))
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let args = Args::parse();
    if args.dt <= 0.0 {
        bail!("dt must be positive, got {}", args.dt);
    }
    let t = args.temperature;
    tracing::info!(
        temperature = t,
        dt = args.dt,
        comp_tol = args.comp_tol,
        temp_tol = args.temp_tol,
        "run"
    );

    // cooling through the eutectic: LIQUID + FCC above, three phases at T
    let prev = vec![cs("FCC_A1", t + args.dt, 0.12), cs("LIQUID", t + args.dt, 0.41)];
    let new = vec![
        cs("FCC_A1", t, 0.10),
        cs("LIQUID", t, 0.40),
        cs("BCC_A2", t, 0.85),
    ];
    let Some(split) = find_three_phase_start_points(&new, &prev, Direction::Negative) else {
        bail!("no compsets to split");
    };

    let mut frontier = StartPointsList::new(EqTol {
        comp: args.comp_tol,
        temp: args.temp_tol,
    });
    for sp in split.iter().cloned() {
        frontier.add_start_point(sp);
    }
    // near-copies of the split points, as a second tracer would report them
    for sp in &split {
        let echo = StartPoint::new(
            sp.temperature() + 0.5 * args.temp_tol,
            sp.direction(),
            sp.compsets().to_vec(),
        );
        let accepted = frontier.add_start_point(echo);
        tracing::info!(accepted, "echo");
    }
    // the liquidus branch ran into the pure-MG edge: terminal, never traced from
    let edge = StartPoint::new(
        t + 40.0,
        Direction::Positive,
        vec![cs("FCC_A1", t + 40.0, 0.98), cs("LIQUID", t + 40.0, 0.995)],
    );
    let recorded = frontier.add_end_point(edge);
    // a split point is already pending, so it cannot also become terminal
    let rejected = !frontier.add_end_point(split[1].clone());
    tracing::info!(recorded, rejected, "end_points");

    let mut walked = Vec::new();
    while let Some(sp) = frontier.get_next_start_point() {
        tracing::info!(start_point = %sp, "visit");
        walked.push(sp);
    }
    tracing::info!(
        visited = frontier.visited().len(),
        walked = walked.len(),
        "done"
    );
    println!("{}", serde_json::to_string_pretty(&walked)?);
    Ok(())
}
