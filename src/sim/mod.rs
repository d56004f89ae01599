//! Simulation Sequencer Module
//!
//! The temporal half of the core: a per-session state machine that steps
//! the shared active index over wall-clock time and publishes it to any
//! number of readers.

pub mod sequencer;

pub use sequencer::{RunState, Sequencer, SimulationSnapshot};
