//! Colored point lights.

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

use super::shape::serialize_vec3;
use crate::models::{RgbColor, NEON_PALETTE};

/// Intensity of every scene light.
pub const LIGHT_INTENSITY: f32 = 2.0;

/// Range past which a light contributes nothing.
pub const LIGHT_DISTANCE: f32 = 200.0;

/// Light that reaches every shape regardless of position.
pub const AMBIENT_LEVEL: f32 = 0.35;

/// A colored point light with linear falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointLight {
    /// Light color
    pub color: RgbColor,
    /// Peak intensity
    pub intensity: f32,
    /// Falloff range
    pub distance: f32,
    /// World position
    #[serde(serialize_with = "serialize_vec3")]
    pub position: Vec3,
}

impl PointLight {
    /// Creates light `index` at a random position, stacked in depth by index.
    pub fn spawn(index: usize, rng: &mut impl Rng) -> Self {
        Self {
            color: NEON_PALETTE[index % NEON_PALETTE.len()],
            intensity: LIGHT_INTENSITY,
            distance: LIGHT_DISTANCE,
            position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 80.0,
                (rng.gen::<f32>() - 0.5) * 60.0,
                40.0 + index as f32 * 20.0,
            ),
        }
    }

    /// Intensity reaching `point`.
    #[must_use]
    pub fn contribution(&self, point: Vec3) -> f32 {
        if self.distance <= 0.0 {
            return self.intensity;
        }
        let falloff = 1.0 - point.distance(self.position) / self.distance;
        self.intensity * falloff.max(0.0)
    }
}

/// Total brightness at `point`, ambient included, capped at 1.
#[must_use]
pub fn illumination(lights: &[PointLight], point: Vec3) -> f32 {
    let direct: f32 = lights.iter().map(|light| light.contribution(point)).sum();
    (AMBIENT_LEVEL + direct * 0.25).min(1.0)
}
