//! Reusable observers for the newt solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver event exposing the relevant data.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Progress`] — writes one line per event to any [`std::io::Write`]
//! - [`Trace`] — records named series of per-iteration values
//!
//! [`Observer`]: newt_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod progress;
mod trace;

pub use progress::Progress;
pub use trace::{Trace, Traceable};
