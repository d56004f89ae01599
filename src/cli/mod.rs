//! CLI Module
//!
//! Command-line interface for the Resviz simulation core. This is the
//! minimal native stand-in for the excluded browser presentation layer: it
//! subscribes to the sequencer like any other reader and renders snapshots
//! as text or JSON.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resviz - plain vs. residual network degradation simulator
#[derive(Parser, Debug)]
#[command(name = "resviz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON simulation config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a timed simulation, printing each transition as it fires
    #[command(name = "run")]
    Run {
        /// Network depth (number of transformation blocks)
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// Override the tick interval in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Emit each snapshot as a JSON line instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print the full degradation table for a depth, without timing
    #[command(name = "table")]
    Table {
        /// Network depth (number of transformation blocks)
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// Emit the table as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}
