//! Simulation Configuration
//!
//! Owns the tunable knobs the simulation core treats as read-only inputs:
//! the allowed network depth range and the tick interval between sequencer
//! steps. Depth validation happens here, at the boundary, so the model and
//! sequencer can assume a valid depth for the lifetime of a run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ResvizError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Shallowest network the controls allow
const DEFAULT_MIN_DEPTH: u32 = 2;

/// Deepest network the controls allow
const DEFAULT_MAX_DEPTH: u32 = 10;

/// Milliseconds between sequencer steps
const DEFAULT_TICK_MS: u64 = 600;

// ============================================================================
// Simulation Configuration
// ============================================================================

/// Tunable simulation parameters
///
/// Depth bounds govern what `validate_depth` accepts; the tick interval is
/// the spacing between active-index transitions. Changing the config has no
/// effect on a run already in flight.
///
/// # Example
/// ```
/// use resviz::config::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.validate_depth(3).unwrap(), 3);
/// assert!(config.validate_depth(1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Minimum allowed network depth (inclusive)
    pub min_depth: u32,
    /// Maximum allowed network depth (inclusive)
    pub max_depth: u32,
    /// Interval between sequencer steps in milliseconds
    pub tick_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl SimulationConfig {
    /// Validate a requested depth against the configured bounds
    ///
    /// # Arguments
    /// * `depth` - Requested number of transformation blocks
    ///
    /// # Returns
    /// The depth unchanged if it lies within `min_depth..=max_depth`
    pub fn validate_depth(&self, depth: u32) -> Result<u32> {
        if depth < self.min_depth || depth > self.max_depth {
            return Err(ResvizError::DepthOutOfRange {
                depth,
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        Ok(depth)
    }

    /// Get the tick interval as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check internal consistency of the config itself
    ///
    /// Rejects an empty depth range, a zero minimum depth (the degradation
    /// normalization divides by depth), and a zero tick interval.
    pub fn validate(&self) -> Result<()> {
        if self.min_depth == 0 {
            return Err(ResvizError::InvalidConfig {
                reason: "min_depth must be at least 1".to_string(),
            });
        }
        if self.min_depth > self.max_depth {
            return Err(ResvizError::InvalidConfig {
                reason: format!(
                    "min_depth {} exceeds max_depth {}",
                    self.min_depth, self.max_depth
                ),
            });
        }
        if self.tick_ms == 0 {
            return Err(ResvizError::InvalidConfig {
                reason: "tick_ms must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to a JSON file
    ///
    /// # Arguments
    /// * `path` - Destination path for the JSON config file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        info!("Saved simulation config to {}", path.display());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
