//! Network variant selector
//!
//! Each visualization lane renders one of the two simulated architectures.
//! The variant is chosen per lane and never mutated; both lanes read the
//! same active index from the sequencer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two simulated network architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkVariant {
    /// Sequentially stacked layers; the signal degrades aggressively
    Plain,
    /// Skip-connected layers; shortcut paths preserve most of the signal
    Residual,
}

impl NetworkVariant {
    /// Both variants, in lane display order (plain first)
    pub fn all() -> [NetworkVariant; 2] {
        [NetworkVariant::Plain, NetworkVariant::Residual]
    }
}

impl fmt::Display for NetworkVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkVariant::Plain => write!(f, "Plain Network"),
            NetworkVariant::Residual => write!(f, "Residual Network"),
        }
    }
}
