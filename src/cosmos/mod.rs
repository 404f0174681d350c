//! Cosmos module: the anchor catalog and the environment model.
//!
//! This module holds the static data describing each viewpoint along the
//! scale axis and the mutable environment state the rest of the app reads.

pub mod anchors;
pub mod environment;

// Re-export commonly used items
pub use anchors::{Anchor, Backdrop, ANCHORS};
pub use environment::{EnvField, EnvPatch, Environment};

/// Clamp a value to the normalized [0,1] scale axis.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
