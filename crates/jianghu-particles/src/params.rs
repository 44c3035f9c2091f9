//! Per-particle parameter derivation

use crate::rand::SeedSamples;
use serde::{Deserialize, Serialize};

/// Longest stagger a particle can get, in seconds
pub const MAX_STAGGER_DELAY: f64 = 3.0 + 2.5 + 9.0 * 0.3;

/// Everything a resolver needs to know about one particle, derived purely
/// from its index.
///
/// Computed once when the particle is created and kept for its mounted
/// lifetime; re-deriving per frame would still give the same values, but
/// the field stores them so profiles never drift from the parameters that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedParameters {
    pub index: usize,
    pub samples: SeedSamples,
    /// Horizontal placement, percent of frame width (0 to 100)
    pub spread_position: f64,
    /// Size multiplier (0.5 to 1.2)
    pub size: f64,
    /// Shape sub-variant selector (0 to 9)
    pub shape_variant: u8,
    /// Seconds before the particle's first pass (0 to 8.2)
    pub stagger_delay: f64,
}

impl DerivedParameters {
    pub fn derive(index: usize) -> Self {
        let samples = SeedSamples::for_index(index);

        let spread_position = samples.s1 * 100.0;
        let size = 0.5 + samples.s2 * 0.7;
        let shape_variant = ((samples.s6 * 10.0).floor() as u8).min(9);
        // Two samples plus an index ramp so neighbouring particles never start together
        let stagger_delay = samples.s1 * 3.0 + samples.s4 * 2.5 + (index % 10) as f64 * 0.3;

        Self {
            index,
            samples,
            spread_position,
            size,
            shape_variant,
            stagger_delay,
        }
    }
}
