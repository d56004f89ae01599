//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use log::info;
use serde_json::json;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::model::{comparison, lane_view, NetworkVariant};
use crate::sim::{RunState, Sequencer, SimulationSnapshot};

/// Run a timed simulation and print every transition until it completes.
pub async fn run(config: &SimulationConfig, depth: u32, json: bool) -> Result<()> {
    info!("Running comparison at depth {depth}");

    let mut sequencer = Sequencer::new(config.clone());
    let mut updates = sequencer.subscribe();
    sequencer.start(depth)?;

    if json {
        print_snapshot_json(&sequencer.snapshot())?;
    } else {
        println!(
            "Run {} started: depth {depth}, tick {}ms",
            sequencer.run_id(),
            config.tick_ms
        );
        print_snapshot(&sequencer.snapshot());
    }

    while updates.changed().await.is_ok() {
        let snapshot = *updates.borrow_and_update();
        if json {
            print_snapshot_json(&snapshot)?;
        } else {
            print_snapshot(&snapshot);
        }
        if snapshot.run_state == RunState::Idle {
            break;
        }
    }

    if !json {
        println!("Run complete.");
    }
    Ok(())
}

/// Print the degradation table for every block of both variants.
pub fn table(config: &SimulationConfig, depth: u32, json: bool) -> Result<()> {
    info!("Printing degradation table for depth {depth}");

    let depth = config.validate_depth(depth)?;

    if json {
        let lanes = comparison(depth + 1, depth);
        println!("{}", serde_json::to_string_pretty(&lanes)?);
        return Ok(());
    }

    for variant in NetworkVariant::all() {
        let lane = lane_view(variant, depth + 1, depth);
        println!("{variant} (depth {depth})");
        for block in &lane.blocks {
            println!("  block {:>2}: {}", block.index, block.degradation.css_filter());
        }
        println!("  output:   {}", lane.output.css_filter());
    }
    Ok(())
}

fn print_snapshot(snapshot: &SimulationSnapshot) {
    if snapshot.output_reached() {
        let [plain, residual] = comparison(snapshot.active_index, snapshot.depth);
        println!(
            "[{}/{}] final output  plain: {}  residual: {}",
            snapshot.active_index,
            snapshot.depth + 1,
            plain.output_css_filter(),
            residual.output_css_filter()
        );
        return;
    }

    if snapshot.active_index == 0 {
        println!("[0/{}] input ready, nothing processed", snapshot.depth + 1);
        return;
    }

    let index = snapshot.active_index;
    let plain = crate::model::degradation_for(NetworkVariant::Plain, index, snapshot.depth);
    let residual = crate::model::degradation_for(NetworkVariant::Residual, index, snapshot.depth);
    println!(
        "[{}/{}] block {index}  plain: {}  residual: {}",
        index,
        snapshot.depth + 1,
        plain.css_filter(),
        residual.css_filter()
    );
}

fn print_snapshot_json(snapshot: &SimulationSnapshot) -> Result<()> {
    let lanes = comparison(snapshot.active_index, snapshot.depth);
    let line = json!({
        "snapshot": snapshot,
        "lanes": lanes,
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}
