//! Degradation Model
//!
//! The declarative half of the core: a pure mapping from
//! (variant, block index, depth) to a visual degradation descriptor, plus
//! the derived per-lane views the renderer consumes. Everything here is
//! stateless and deterministic.

pub mod degradation;
pub mod pipeline;
pub mod variant;

pub use degradation::{degradation_for, DegradationDescriptor};
pub use pipeline::{comparison, lane_view, BlockView, LaneView};
pub use variant::NetworkVariant;
