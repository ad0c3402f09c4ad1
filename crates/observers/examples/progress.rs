//! Watch the Newton solver work on a few simple objectives.
//!
//! # Usage
//!
//! ```text
//! cargo run --example progress -- parabola
//! cargo run --example progress -- cosine
//! RUST_LOG=newt_solvers=trace cargo run --example progress -- flat
//! ```
//!
//! # Modes
//!
//! - **parabola** — Minimize (x - 3)² from x = 10. Converges in a few
//!   iterations since the finite-difference model is exact for a quadratic.
//!
//! - **cosine** — Maximize cos(x) from x = 0.5. Newton's method finds the
//!   stationary point at x = 0.
//!
//! - **flat** — Minimize a linear function. At the dyadic start the curvature
//!   estimate is exactly zero and the solver takes one damped gradient step.
//!   Afterwards the estimate is rounding noise: tiny but nonzero, so Newton
//!   steps are taken and the iterate runs away to around -2e15 before the
//!   step falls below `tol`. Only exact-zero or non-finite curvature falls back.

use std::error::Error;

use newt_core::{Function, ObjectiveOutput};
use newt_observers::{Progress, Trace};
use newt_solvers::optimization::newton;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "parabola".into());
    match mode.as_str() {
        "parabola" => parabola(),
        "cosine" => cosine(),
        "flat" => flat(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: progress [parabola|cosine|flat]");
            std::process::exit(1);
        }
    }
}

fn parabola() -> Result<(), Box<dyn Error>> {
    let config = newton::Config::default().with_verbose(true);
    let solution = newton::minimize_fn(|x| (x - 3.0).powi(2), 10.0, &config)?;
    report(&solution);
    Ok(())
}

fn cosine() -> Result<(), Box<dyn Error>> {
    let model = Function::new(f64::cos);
    let mut progress = Progress::stdout();

    let solution = newton::maximize(
        &model,
        &ObjectiveOutput,
        0.5,
        &newton::Config::default(),
        &mut progress,
    )?;
    progress.finish()?;

    report(&solution);
    Ok(())
}

fn flat() -> Result<(), Box<dyn Error>> {
    let model = Function::new(|x: f64| 2.0 * x);
    let config = newton::Config::new(10, 0.5, 1e-8)?;
    let mut trace = Trace::new(["x", "objective", "step"]);

    let solution = newton::minimize(&model, &ObjectiveOutput, 0.0, &config, &mut trace)?;

    for (name, points) in trace.iter() {
        println!("{name}: {} newton points", points.len());
    }
    report(&solution);
    Ok(())
}

fn report<I, O>(solution: &newton::Solution<I, O>) {
    println!(
        "status={:?}, x={:.12}, f(x)={:.12}, iters={}, converged={}",
        solution.status,
        solution.x,
        solution.objective,
        solution.iters,
        solution.converged()
    );
}
