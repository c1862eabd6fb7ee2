//! Ambient 3D backdrop.
//!
//! A fixed population of neon shapes drifts and spins behind the page. The
//! scene itself is pure state: [`AmbientScene::advance`] moves it forward one
//! frame and [`AmbientScene::frame`] projects it through a [`Camera`] into a
//! [`FrameView`] that a [`RenderBackend`] paints. [`AnimationLoop`] ties the
//! two to a platform frame clock and owns teardown.

pub mod animation;
pub mod camera;
pub mod frame;
pub mod light;
pub mod renderer;
pub mod shape;

pub use animation::{AnimationLoop, FrameScheduler, ManualScheduler};
pub use camera::{Camera, ProjectedPoint, Viewport};
pub use frame::{FrameView, Primitive};
pub use light::{illumination, PointLight};
pub use renderer::{AmbientRenderer, FrameRecorder, RenderBackend};
pub use shape::{DecorativeShape, Motion, ShapeKind};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use shape::KNOT_TUBE;

/// Number of decorative shapes.
pub const SHAPE_COUNT: usize = 10;

/// Number of point lights.
pub const LIGHT_COUNT: usize = 3;

/// Points sampled along each torus knot outline.
const KNOT_SEGMENTS: usize = 96;

/// Peak opacity of a fully lit shape.
const PEAK_ALPHA: f32 = 0.7;

/// The shapes and lights of the backdrop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbientScene {
    shapes: Vec<DecorativeShape>,
    lights: Vec<PointLight>,
    frames: u64,
}

impl AmbientScene {
    /// Creates [`SHAPE_COUNT`] shapes and [`LIGHT_COUNT`] lights from `rng`.
    pub fn populate(rng: &mut impl Rng) -> Self {
        let shapes = (0..SHAPE_COUNT)
            .map(|index| DecorativeShape::spawn(index, rng))
            .collect();
        let lights = (0..LIGHT_COUNT)
            .map(|index| PointLight::spawn(index, rng))
            .collect();
        Self {
            shapes,
            lights,
            frames: 0,
        }
    }

    /// Reproducible scene for a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::populate(&mut SmallRng::seed_from_u64(seed))
    }

    /// Scene seeded from system entropy.
    #[must_use]
    pub fn random() -> Self {
        Self::populate(&mut SmallRng::from_entropy())
    }

    /// The shapes, in creation order.
    #[must_use]
    pub fn shapes(&self) -> &[DecorativeShape] {
        &self.shapes
    }

    /// The lights, in creation order.
    #[must_use]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Frames advanced so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Moves every shape forward one frame at wall-clock time `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        for shape in &mut self.shapes {
            shape.advance(now_ms);
        }
        self.frames += 1;
    }

    /// Projects the current state through `camera`.
    #[must_use]
    pub fn frame(&self, camera: &Camera, time_ms: f64) -> FrameView {
        let primitives = self
            .shapes
            .iter()
            .filter_map(|shape| self.primitive_for(shape, camera))
            .collect();
        FrameView::new(camera.viewport(), time_ms, primitives)
    }

    fn primitive_for(&self, shape: &DecorativeShape, camera: &Camera) -> Option<Primitive> {
        let centre = camera.project(shape.position())?;
        let alpha = PEAK_ALPHA * illumination(&self.lights, shape.position());

        match shape.kind() {
            ShapeKind::Sphere => Some(Primitive::Disc {
                center: [centre.x, centre.y],
                radius: camera.projected_radius(shape.size(), centre.depth),
                color: shape.color(),
                alpha,
                depth: centre.depth,
            }),
            ShapeKind::TorusKnot => {
                let points: Vec<[f32; 2]> = shape
                    .outline(KNOT_SEGMENTS)
                    .into_iter()
                    .filter_map(|point| camera.project(point))
                    .map(|point| [point.x, point.y])
                    .collect();
                if points.len() < 2 {
                    return None;
                }
                Some(Primitive::Polyline {
                    points,
                    width: camera.projected_radius(KNOT_TUBE * 2.0, centre.depth),
                    color: shape.color(),
                    alpha,
                    depth: centre.depth,
                })
            }
        }
    }
}
