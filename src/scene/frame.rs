//! Flat, back-to-front list of 2D primitives for one frame.

use serde::Serialize;

use super::camera::Viewport;
use crate::models::RgbColor;

/// A single thing to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum Primitive {
    /// Filled circle (a sphere seen from any side)
    Disc {
        /// Centre in surface pixels
        center: [f32; 2],
        /// Radius in surface pixels
        radius: f32,
        /// Fill color
        color: RgbColor,
        /// Opacity, 0 to 1
        alpha: f32,
        /// Distance from the camera
        depth: f32,
    },
    /// Stroked open path (a torus knot's centre line)
    Polyline {
        /// Points in surface pixels
        points: Vec<[f32; 2]>,
        /// Stroke width in surface pixels
        width: f32,
        /// Stroke color
        color: RgbColor,
        /// Opacity, 0 to 1
        alpha: f32,
        /// Distance from the camera
        depth: f32,
    },
}

impl Primitive {
    /// Distance from the camera, used for ordering.
    #[must_use]
    pub fn depth(&self) -> f32 {
        match self {
            Self::Disc { depth, .. } | Self::Polyline { depth, .. } => *depth,
        }
    }
}

/// Everything the backend needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    /// Surface size the primitives were projected for
    pub viewport: Viewport,
    /// Timestamp of the frame, milliseconds
    pub time_ms: f64,
    /// Primitives, farthest first
    pub primitives: Vec<Primitive>,
}

impl FrameView {
    /// Builds a frame, ordering primitives from far to near.
    #[must_use]
    pub fn new(viewport: Viewport, time_ms: f64, mut primitives: Vec<Primitive>) -> Self {
        primitives.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
        Self {
            viewport,
            time_ms,
            primitives,
        }
    }

    /// True when nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
