//! Decorative shapes floating behind the page.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::Rng;
use serde::Serialize;

use crate::models::{RgbColor, NEON_PALETTE};

/// Peak displacement of the sinusoidal drift, in scene units.
pub const DRIFT_AMPLITUDE: f32 = 0.15;

/// Tube radius of torus knots.
pub const KNOT_TUBE: f32 = 0.3;

/// Winding numbers of the torus knot (p around the axis, q through the hole).
const KNOT_P: f32 = 2.0;
const KNOT_Q: f32 = 3.0;

/// Extent of the volume shapes are scattered in (x, y, z), centred on the origin.
pub const SCATTER_VOLUME: Vec3 = Vec3::new(60.0, 40.0, 60.0);

/// Geometry of a decorative shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// A glowing ball
    Sphere,
    /// A (2, 3) torus knot
    TorusKnot,
}

/// Motion parameters, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Angular frequency of the drift, radians per millisecond (before halving)
    pub drift_speed: f32,
    /// Rotation added every frame, radians
    pub rotation_speed: f32,
    /// Unit axis the shape spins around
    #[serde(serialize_with = "serialize_vec3")]
    pub axis: Vec3,
}

/// One decorative shape and its animation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecorativeShape {
    index: usize,
    kind: ShapeKind,
    color: RgbColor,
    size: f32,
    #[serde(serialize_with = "serialize_vec3")]
    origin: Vec3,
    motion: Motion,
    angle: f32,
    #[serde(serialize_with = "serialize_vec3")]
    position: Vec3,
}

pub(crate) fn serialize_vec3<S: serde::Serializer>(v: &Vec3, s: S) -> Result<S::Ok, S::Error> {
    v.to_array().serialize(s)
}

impl DecorativeShape {
    /// Creates the shape at `index` with randomized size, position and motion.
    ///
    /// Even indices are spheres, odd indices torus knots; the color cycles
    /// through [`NEON_PALETTE`].
    pub fn spawn(index: usize, rng: &mut impl Rng) -> Self {
        let kind = if index % 2 == 0 {
            ShapeKind::Sphere
        } else {
            ShapeKind::TorusKnot
        };
        let size = match kind {
            ShapeKind::Sphere => rng.gen::<f32>() * 2.0 + 1.0,
            ShapeKind::TorusKnot => rng.gen::<f32>() * 1.2 + 0.8,
        };
        let origin = Vec3::new(
            (rng.gen::<f32>() - 0.5) * SCATTER_VOLUME.x,
            (rng.gen::<f32>() - 0.5) * SCATTER_VOLUME.y,
            (rng.gen::<f32>() - 0.5) * SCATTER_VOLUME.z,
        );
        let drift_speed = rng.gen::<f32>() * 0.008 + 0.004;
        let rotation_speed = rng.gen::<f32>() * 0.01 + 0.005;
        let axis = Vec3::new(rng.gen(), rng.gen(), rng.gen()).try_normalize().unwrap_or(Vec3::Y);

        Self {
            index,
            kind,
            color: NEON_PALETTE[index % NEON_PALETTE.len()],
            size,
            origin,
            motion: Motion {
                drift_speed,
                rotation_speed,
                axis,
            },
            angle: 0.0,
            position: origin,
        }
    }

    /// Position in the population; also the drift phase offset.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Sphere or torus knot.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Neon color.
    #[must_use]
    pub fn color(&self) -> RgbColor {
        self.color
    }

    /// Sphere radius or knot radius.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Resting position the drift oscillates around.
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Accumulated rotation angle, radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Motion parameters.
    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_axis_angle(self.motion.axis, self.angle)
    }

    /// Drift offset from the origin at wall-clock time `now_ms`.
    #[must_use]
    pub fn drift_offset(&self, now_ms: f64) -> Vec3 {
        let phase = now_ms * f64::from(self.motion.drift_speed) * 0.5 + self.index as f64;
        Vec3::new(
            (phase.sin() as f32) * DRIFT_AMPLITUDE,
            (phase.cos() as f32) * DRIFT_AMPLITUDE,
            0.0,
        )
    }

    /// Advances one frame: spin by the rotation speed and drift to `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        self.angle = (self.angle + self.motion.rotation_speed) % TAU;
        self.position = self.origin + self.drift_offset(now_ms);
    }

    /// World-space centre line of the knot, `segments` points long.
    ///
    /// Spheres have no outline and return an empty list.
    #[must_use]
    pub fn outline(&self, segments: usize) -> Vec<Vec3> {
        if self.kind != ShapeKind::TorusKnot || segments == 0 {
            return Vec::new();
        }

        let orientation = self.orientation();
        (0..=segments)
            .map(|step| {
                let u = step as f32 / segments as f32 * KNOT_P * TAU;
                let q_over_p = KNOT_Q / KNOT_P * u;
                let ring = 2.0 + q_over_p.cos();
                let local = Vec3::new(
                    self.size * ring * 0.5 * u.cos(),
                    self.size * ring * 0.5 * u.sin(),
                    self.size * q_over_p.sin() * 0.5,
                );
                self.position + orientation * local
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn shape(index: usize) -> DecorativeShape {
        let mut rng = SmallRng::seed_from_u64(7);
        DecorativeShape::spawn(index, &mut rng)
    }

    #[test]
    fn test_kind_alternates_by_index() {
        assert_eq!(shape(0).kind(), ShapeKind::Sphere);
        assert_eq!(shape(1).kind(), ShapeKind::TorusKnot);
        assert_eq!(shape(8).kind(), ShapeKind::Sphere);
    }

    #[test]
    fn test_parameters_within_ranges() {
        let mut rng = SmallRng::seed_from_u64(99);
        for index in 0..200 {
            let shape = DecorativeShape::spawn(index, &mut rng);
            let motion = shape.motion();
            match shape.kind() {
                ShapeKind::Sphere => assert!((1.0..=3.0).contains(&shape.size())),
                ShapeKind::TorusKnot => assert!((0.8..=2.0).contains(&shape.size())),
            }
            assert!((0.004..=0.012).contains(&motion.drift_speed));
            assert!((0.005..=0.015).contains(&motion.rotation_speed));
            assert!((motion.axis.length() - 1.0).abs() < 1e-4);
            let half = SCATTER_VOLUME / 2.0;
            assert!(shape.origin().abs().cmple(half).all());
        }
    }

    #[test]
    fn test_color_cycles_through_palette() {
        assert_eq!(shape(0).color(), NEON_PALETTE[0]);
        assert_eq!(shape(6).color(), NEON_PALETTE[1]);
    }

    #[test]
    fn test_advance_rotates_by_fixed_speed() {
        let mut shape = shape(3);
        let speed = shape.motion().rotation_speed;
        shape.advance(0.0);
        shape.advance(16.0);
        assert!((shape.angle() - 2.0 * speed).abs() < 1e-6);
    }

    #[test]
    fn test_drift_is_bounded() {
        let mut shape = shape(4);
        for frame in 0..5_000 {
            shape.advance(f64::from(frame) * 16.7);
            let offset = shape.position() - shape.origin();
            assert!(offset.length() <= DRIFT_AMPLITUDE + 1e-5);
            assert!(offset.z.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_drift_phase_depends_on_index() {
        let a = shape(0);
        let mut b = a.clone();
        b.index = 1;
        assert_ne!(a.drift_offset(0.0), b.drift_offset(0.0));
    }

    #[test]
    fn test_outline_only_for_knots() {
        assert!(shape(0).outline(64).is_empty());
        let knot = shape(1);
        let outline = knot.outline(64);
        assert_eq!(outline.len(), 65);
        // Closed curve
        assert!((outline[0] - outline[64]).length() < 1e-3);
        // Stays within the knot's bounding radius
        for point in outline {
            assert!((point - knot.position()).length() <= knot.size() * 1.5 + 1e-4);
        }
    }
}
