//! Degradation Model
//!
//! Pure mapping from (variant, block index, depth) to a visual degradation
//! descriptor: how corrupted the signal is presumed to be after that many
//! transformation blocks. No state, no side effects; equal inputs always
//! produce bit-identical outputs.
//!
//! The per-variant curves are linear in `intensity = index / depth`. The
//! plain curve dominates the residual curve on every channel at every
//! shared index, which is the behavioral guarantee the whole visualization
//! exists to demonstrate.

use serde::{Deserialize, Serialize};

use crate::model::variant::NetworkVariant;

// ============================================================================
// Constants
// ============================================================================

/// Per-variant degradation curve coefficients
struct DegradationCurve {
    /// Blur radius in pixels at full intensity
    blur_px: f32,
    /// Desaturation fraction at full intensity
    desaturation: f32,
    /// Brightness lost at full intensity
    dim: f32,
    /// Brightness never drops below this floor
    brightness_floor: f32,
}

/// Plain network: degradation is aggressive
const PLAIN_CURVE: DegradationCurve = DegradationCurve {
    blur_px: 5.0,
    desaturation: 0.8,
    dim: 0.5,
    brightness_floor: 0.4,
};

/// Residual network: skip connections keep degradation much milder
const RESIDUAL_CURVE: DegradationCurve = DegradationCurve {
    blur_px: 1.5,
    desaturation: 0.2,
    dim: 0.15,
    brightness_floor: 0.85,
};

impl DegradationCurve {
    fn for_variant(variant: NetworkVariant) -> &'static DegradationCurve {
        match variant {
            NetworkVariant::Plain => &PLAIN_CURVE,
            NetworkVariant::Residual => &RESIDUAL_CURVE,
        }
    }
}

// ============================================================================
// Degradation Descriptor
// ============================================================================

/// Visual degradation of the signal after some number of blocks
///
/// A value object: computed on demand, never stored. The renderer turns it
/// into a CSS-equivalent filter via [`DegradationDescriptor::css_filter`].
///
/// # Example
/// ```
/// use resviz::model::{degradation_for, NetworkVariant};
///
/// let plain = degradation_for(NetworkVariant::Plain, 3, 3);
/// let residual = degradation_for(NetworkVariant::Residual, 3, 3);
/// assert!(plain.blur_px > residual.blur_px);
/// assert!(plain.brightness < residual.brightness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegradationDescriptor {
    /// Blur radius in pixels (>= 0)
    pub blur_px: f32,
    /// Desaturation fraction (0 = full color, 1 = grayscale)
    pub desaturation: f32,
    /// Brightness multiplier (1 = unchanged, smaller = darker)
    pub brightness: f32,
}

impl DegradationDescriptor {
    /// The no-degradation descriptor (nothing processed yet)
    pub fn identity() -> Self {
        Self {
            blur_px: 0.0,
            desaturation: 0.0,
            brightness: 1.0,
        }
    }

    /// Check whether this descriptor leaves the image untouched
    pub fn is_identity(&self) -> bool {
        self.blur_px == 0.0 && self.desaturation == 0.0 && self.brightness == 1.0
    }

    /// Render the descriptor as a CSS filter value
    ///
    /// # Returns
    /// `"none"` for the identity descriptor, otherwise
    /// `blur(..px) grayscale(..) brightness(..)`.
    pub fn css_filter(&self) -> String {
        if self.is_identity() {
            return "none".to_string();
        }
        format!(
            "blur({:.2}px) grayscale({:.2}) brightness({:.2})",
            self.blur_px, self.desaturation, self.brightness
        )
    }
}

impl Default for DegradationDescriptor {
    fn default() -> Self {
        Self::identity()
    }
}

// ============================================================================
// Model Function
// ============================================================================

/// Compute the degradation after `index` blocks of a `depth`-block network
///
/// `index` is 1-based block position; `index = 0` means nothing has been
/// processed and always yields the identity descriptor for both variants.
/// The final output stage reuses `index = depth`.
///
/// `index` is clamped to `[0, depth]` and `depth = 0` yields the identity
/// descriptor, so no input can divide by zero. The configuration boundary
/// rejects such depths before a run ever starts.
///
/// # Arguments
/// * `variant` - Which simulated architecture the lane renders
/// * `index` - Blocks completed so far (clamped to `0..=depth`)
/// * `depth` - Total transformation blocks in the pipeline
pub fn degradation_for(variant: NetworkVariant, index: u32, depth: u32) -> DegradationDescriptor {
    if depth == 0 || index == 0 {
        return DegradationDescriptor::identity();
    }

    let index = index.min(depth);
    let intensity = index as f32 / depth as f32;
    let curve = DegradationCurve::for_variant(variant);

    DegradationDescriptor {
        blur_px: intensity * curve.blur_px,
        desaturation: intensity * curve.desaturation,
        brightness: (1.0 - intensity * curve.dim).max(curve.brightness_floor),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_identity_at_index_zero() {
        for variant in NetworkVariant::all() {
            let d = degradation_for(variant, 0, 5);
            assert!(d.is_identity());
            assert_eq!(d, DegradationDescriptor::identity());
        }
    }

    #[test]
    fn test_full_intensity_plain() {
        let d = degradation_for(NetworkVariant::Plain, 3, 3);
        assert_relative_eq!(d.blur_px, 5.0);
        assert_relative_eq!(d.desaturation, 0.8);
        assert_relative_eq!(d.brightness, 0.5);
    }

    #[test]
    fn test_full_intensity_residual() {
        let d = degradation_for(NetworkVariant::Residual, 3, 3);
        assert_relative_eq!(d.blur_px, 1.5);
        assert_relative_eq!(d.desaturation, 0.2);
        assert_relative_eq!(d.brightness, 0.85);
    }

    #[test]
    fn test_half_intensity_scales_linearly() {
        let d = degradation_for(NetworkVariant::Plain, 2, 4);
        assert_relative_eq!(d.blur_px, 2.5);
        assert_relative_eq!(d.desaturation, 0.4);
        assert_relative_eq!(d.brightness, 0.75);
    }

    // Plain must be strictly more degraded than residual at every shared
    // index: more blur, more desaturation, lower brightness.
    #[test_case(1, 2)]
    #[test_case(1, 10)]
    #[test_case(3, 5)]
    #[test_case(5, 5)]
    #[test_case(10, 10)]
    fn test_plain_strictly_dominates_residual(index: u32, depth: u32) {
        let plain = degradation_for(NetworkVariant::Plain, index, depth);
        let residual = degradation_for(NetworkVariant::Residual, index, depth);

        assert!(plain.blur_px > residual.blur_px);
        assert!(plain.desaturation > residual.desaturation);
        assert!(plain.brightness < residual.brightness);
    }

    #[test]
    fn test_monotone_in_index() {
        for variant in NetworkVariant::all() {
            for depth in 2..=10 {
                let mut prev = degradation_for(variant, 0, depth);
                for index in 1..=depth {
                    let next = degradation_for(variant, index, depth);
                    assert!(next.blur_px >= prev.blur_px);
                    assert!(next.desaturation >= prev.desaturation);
                    assert!(next.brightness <= prev.brightness);
                    prev = next;
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = degradation_for(NetworkVariant::Plain, 4, 7);
        let b = degradation_for(NetworkVariant::Plain, 4, 7);
        assert_eq!(a.blur_px.to_bits(), b.blur_px.to_bits());
        assert_eq!(a.desaturation.to_bits(), b.desaturation.to_bits());
        assert_eq!(a.brightness.to_bits(), b.brightness.to_bits());
    }

    #[test]
    fn test_index_clamped_to_depth() {
        let at_depth = degradation_for(NetworkVariant::Plain, 3, 3);
        let beyond = degradation_for(NetworkVariant::Plain, 99, 3);
        assert_eq!(beyond, at_depth);
    }

    #[test]
    fn test_zero_depth_is_identity() {
        assert!(degradation_for(NetworkVariant::Plain, 1, 0).is_identity());
    }

    #[test]
    fn test_brightness_floor_binds_at_full_residual_intensity() {
        // 1 - 0.15 = 0.85 meets the residual floor exactly at intensity 1;
        // the floor keeps deeper hypothetical curves from going darker.
        let d = degradation_for(NetworkVariant::Residual, 10, 10);
        assert_relative_eq!(d.brightness, 0.85);
    }

    #[test]
    fn test_css_filter_identity() {
        assert_eq!(DegradationDescriptor::identity().css_filter(), "none");
    }

    #[test]
    fn test_css_filter_format() {
        let d = degradation_for(NetworkVariant::Plain, 3, 3);
        assert_eq!(
            d.css_filter(),
            "blur(5.00px) grayscale(0.80) brightness(0.50)"
        );
    }
}
