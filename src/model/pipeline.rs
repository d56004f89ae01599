//! Pipeline views for the rendering layer
//!
//! The sequencer publishes one authoritative active index; both lanes are
//! derived views over it. These helpers compute, for a lane, which blocks
//! count as processed and which filter each one carries, so the renderer
//! never keeps per-lane state that could drift.

use serde::{Deserialize, Serialize};

use crate::model::degradation::{degradation_for, DegradationDescriptor};
use crate::model::variant::NetworkVariant;

/// One transformation block as the renderer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockView {
    /// Block position, 1-based
    pub index: u32,
    /// Whether the simulated signal has passed through this block
    pub processed: bool,
    /// Degradation after this block, applied once processed
    pub degradation: DegradationDescriptor,
}

impl BlockView {
    /// CSS filter to apply to this block's thumbnail right now
    ///
    /// Unprocessed blocks render untouched, matching the pre-run state.
    pub fn css_filter(&self) -> String {
        if self.processed {
            self.degradation.css_filter()
        } else {
            "none".to_string()
        }
    }
}

/// One lane (variant) of the visualization at a given active index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneView {
    /// Which architecture this lane renders
    pub variant: NetworkVariant,
    /// Total transformation blocks in the pipeline
    pub depth: u32,
    /// Per-block render state, in pipeline order
    pub blocks: Vec<BlockView>,
    /// Whether the final output stage has been reached
    pub output_revealed: bool,
    /// Degradation of the final output (full-intensity descriptor)
    pub output: DegradationDescriptor,
}

impl LaneView {
    /// CSS filter for the final output thumbnail right now
    pub fn output_css_filter(&self) -> String {
        if self.output_revealed {
            self.output.css_filter()
        } else {
            "none".to_string()
        }
    }
}

/// Build the render view of one lane from the shared active index
///
/// Block `i` (1-based) counts as processed once `active_index >= i`; the
/// output stage is revealed at `active_index = depth + 1`.
///
/// # Arguments
/// * `variant` - Which lane to build
/// * `active_index` - The sequencer's current progress counter
/// * `depth` - Total transformation blocks
pub fn lane_view(variant: NetworkVariant, active_index: u32, depth: u32) -> LaneView {
    let blocks = (1..=depth)
        .map(|index| BlockView {
            index,
            processed: active_index >= index,
            degradation: degradation_for(variant, index, depth),
        })
        .collect();

    LaneView {
        variant,
        depth,
        blocks,
        output_revealed: active_index > depth,
        output: degradation_for(variant, depth, depth),
    }
}

/// Build both lanes from the one shared active index
///
/// Returned in lane display order: plain first, residual second. Both lanes
/// agree on which blocks are processed at every index by construction.
pub fn comparison(active_index: u32, depth: u32) -> [LaneView; 2] {
    NetworkVariant::all().map(|variant| lane_view(variant, active_index, depth))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_blocks_processed_before_first_tick() {
        let lane = lane_view(NetworkVariant::Plain, 0, 4);
        assert_eq!(lane.blocks.len(), 4);
        assert!(lane.blocks.iter().all(|b| !b.processed));
        assert!(!lane.output_revealed);
        assert_eq!(lane.output_css_filter(), "none");
    }

    #[test]
    fn test_processed_follows_active_index() {
        let lane = lane_view(NetworkVariant::Residual, 2, 4);
        let processed: Vec<bool> = lane.blocks.iter().map(|b| b.processed).collect();
        assert_eq!(processed, vec![true, true, false, false]);
        assert!(!lane.output_revealed);
    }

    #[test]
    fn test_output_revealed_only_at_final_stage() {
        let at_depth = lane_view(NetworkVariant::Plain, 4, 4);
        assert!(at_depth.blocks.iter().all(|b| b.processed));
        assert!(!at_depth.output_revealed);

        let done = lane_view(NetworkVariant::Plain, 5, 4);
        assert!(done.output_revealed);
        assert_eq!(done.output_css_filter(), done.output.css_filter());
    }

    #[test]
    fn test_unprocessed_block_renders_untouched() {
        let lane = lane_view(NetworkVariant::Plain, 1, 3);
        assert_eq!(lane.blocks[0].css_filter(), lane.blocks[0].degradation.css_filter());
        assert_eq!(lane.blocks[1].css_filter(), "none");
        assert_eq!(lane.blocks[2].css_filter(), "none");
    }

    #[test]
    fn test_output_is_full_intensity() {
        let lane = lane_view(NetworkVariant::Plain, 0, 3);
        assert_eq!(
            lane.output,
            crate::model::degradation_for(NetworkVariant::Plain, 3, 3)
        );
    }

    #[test]
    fn test_lanes_stay_in_lockstep() {
        for active_index in 0..=6 {
            let [plain, residual] = comparison(active_index, 5);
            assert_eq!(plain.variant, NetworkVariant::Plain);
            assert_eq!(residual.variant, NetworkVariant::Residual);
            for (p, r) in plain.blocks.iter().zip(residual.blocks.iter()) {
                assert_eq!(p.processed, r.processed);
            }
            assert_eq!(plain.output_revealed, residual.output_revealed);
        }
    }
}
