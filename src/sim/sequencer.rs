//! Simulation Sequencer
//!
//! Drives the active-block index from 0 to depth + 1 over wall-clock time,
//! one step per tick interval. The sequencer owns the only mutable state in
//! the core: the published [`SimulationSnapshot`]. Both rendering lanes
//! derive their visuals from this single authoritative value, so they can
//! never drift apart.
//!
//! Cancellation discipline: every run carries a fresh run id, and each
//! scheduled transition refuses to apply unless the published snapshot
//! still belongs to its own, still-running run. The check and the write
//! happen under the watch channel's lock, so a transition from a
//! superseded run can never land after a newer run's reset.

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::SimulationConfig;
use crate::error::Result;

/// Run states for the simulation sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run in flight; depth may be changed and a new run started
    #[default]
    Idle,
    /// A run is in flight; start controls should be disabled
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "Idle"),
            RunState::Running => write!(f, "Running"),
        }
    }
}

/// The sequencer's published state
///
/// `active_index` is the progress counter: 0 = nothing processed,
/// `1..=depth` = that many blocks completed, `depth + 1` = final output
/// stage reached. Within one run it only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Identity of the run this snapshot belongs to
    pub run_id: Uuid,
    /// Depth the run was started with (0 before the first run)
    pub depth: u32,
    /// How far the simulated signal has progressed
    pub active_index: u32,
    /// Whether a run is in flight
    pub run_state: RunState,
    /// When the run started
    pub started_at: DateTime<Utc>,
}

impl SimulationSnapshot {
    /// The state before any run has been started
    fn initial() -> Self {
        Self {
            run_id: Uuid::nil(),
            depth: 0,
            active_index: 0,
            run_state: RunState::Idle,
            started_at: Utc::now(),
        }
    }

    /// Whether the final output stage has been reached
    pub fn output_reached(&self) -> bool {
        self.depth > 0 && self.active_index > self.depth
    }
}

/// Timed state machine stepping the active index across the network depth
///
/// One sequencer instance per visualization session; nothing is shared
/// process-wide. `start` validates the depth, supersedes any run already in
/// flight, and schedules `depth + 1` transitions spaced by the configured
/// tick. Dropping the sequencer revokes all pending transitions.
///
/// Must be used from within a Tokio runtime: `start` spawns the driver
/// task that performs the timed transitions.
///
/// # Example
/// ```no_run
/// use resviz::config::SimulationConfig;
/// use resviz::sim::Sequencer;
///
/// # async fn demo() -> resviz::Result<()> {
/// let mut sequencer = Sequencer::new(SimulationConfig::default());
/// let mut updates = sequencer.subscribe();
/// sequencer.start(3)?;
/// while updates.changed().await.is_ok() {
///     let snapshot = *updates.borrow_and_update();
///     println!("active index: {}", snapshot.active_index);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Sequencer {
    config: SimulationConfig,
    updates: watch::Sender<SimulationSnapshot>,
    driver: Option<JoinHandle<()>>,
}

impl Sequencer {
    /// Create a new idle sequencer
    ///
    /// # Arguments
    /// * `config` - Depth bounds and tick interval for all runs
    pub fn new(config: SimulationConfig) -> Self {
        let (updates, _) = watch::channel(SimulationSnapshot::initial());
        Self {
            config,
            updates,
            driver: None,
        }
    }

    /// Begin a run at the given depth
    ///
    /// Validates `depth` against the configured bounds first; an
    /// out-of-range depth is rejected without touching any state, so a run
    /// already in flight keeps running. A valid `start` while Running
    /// supersedes the prior run: its pending transitions are revoked before
    /// the new run's reset is published.
    ///
    /// # Arguments
    /// * `depth` - Number of transformation blocks for this run
    pub fn start(&mut self, depth: u32) -> Result<()> {
        let depth = self.config.validate_depth(depth)?;

        self.abort_driver();

        let run_id = Uuid::new_v4();
        let tick = self.config.tick_interval();
        info!("Starting run {run_id} (depth {depth}, tick {}ms)", self.config.tick_ms);

        // One mutation installs the reset: run id, index 0, Running.
        self.updates.send_replace(SimulationSnapshot {
            run_id,
            depth,
            active_index: 0,
            run_state: RunState::Running,
            started_at: Utc::now(),
        });

        let updates = self.updates.clone();
        self.driver = Some(tokio::spawn(async move {
            let final_step = depth + 1;
            for step in 1..=final_step {
                tokio::time::sleep(tick).await;

                let applied = updates.send_if_modified(|snapshot| {
                    // Only the current run's still-pending transitions may
                    // mutate the snapshot; anything else is stale.
                    if snapshot.run_id != run_id || snapshot.run_state != RunState::Running {
                        return false;
                    }
                    snapshot.active_index = step;
                    if step == final_step {
                        snapshot.run_state = RunState::Idle;
                    }
                    true
                });

                if !applied {
                    debug!("Run {run_id} superseded; dropping step {step}");
                    return;
                }
                debug!("Run {run_id} advanced to index {step}");
            }
            info!("Run {run_id} complete");
        }));

        Ok(())
    }

    /// Cancel the run in flight, if any
    ///
    /// Revokes every pending transition and returns the sequencer to Idle.
    /// The active index is left where the run reached; only `start` resets
    /// it to 0.
    pub fn cancel(&mut self) {
        self.abort_driver();
        let cancelled = self.updates.send_if_modified(|snapshot| {
            if snapshot.run_state != RunState::Running {
                return false;
            }
            snapshot.run_state = RunState::Idle;
            true
        });
        if cancelled {
            info!("Run {} cancelled at index {}", self.run_id(), self.active_index());
        }
    }

    /// Subscribe to snapshot updates
    ///
    /// Every published change is observed in order; within one run the
    /// active index strictly increases with no skips and no repeats.
    pub fn subscribe(&self) -> watch::Receiver<SimulationSnapshot> {
        self.updates.subscribe()
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> SimulationSnapshot {
        *self.updates.borrow()
    }

    /// Get the current active index
    pub fn active_index(&self) -> u32 {
        self.updates.borrow().active_index
    }

    /// Get the current run state
    pub fn run_state(&self) -> RunState {
        self.updates.borrow().run_state
    }

    /// Get the id of the current (or last) run
    pub fn run_id(&self) -> Uuid {
        self.updates.borrow().run_id
    }

    /// Check if a run is in flight
    pub fn is_running(&self) -> bool {
        self.run_state() == RunState::Running
    }

    /// Get the configuration this sequencer was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn abort_driver(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        // Pending transitions must not outlive their owner.
        self.abort_driver();
    }
}

// ============================================================================
// Tests
// ============================================================================
