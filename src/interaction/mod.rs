//! Interaction module: the state machine driving the scale scrubber.
//!
//! Pointer gestures feed the store, which owns the mode, the scale position,
//! the snapped anchor, the stress model, and the pending snap/warp timers.

pub mod gestures;
pub mod store;
pub mod stress;
pub mod timers;

// Re-export the surface the presentation layer talks to
pub use store::{WarpMode, WarpStore};
