//! Viewport state: which sections have been seen, which one is active, and
//! where the pointer is.

pub mod pointer;
pub mod tracker;

pub use pointer::{PointerPosition, HIGHLIGHT_SIZE};
pub use tracker::{
    Intersection, SubscriptionId, TrackerEvent, ViewportTracker, DEFAULT_REVEAL_THRESHOLD,
};
