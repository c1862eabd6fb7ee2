//! Perspective camera and the drawing surface it projects onto.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Vertical field of view, degrees.
pub const FIELD_OF_VIEW: f32 = 75.0;
/// Near clipping plane.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane.
pub const FAR_PLANE: f32 = 1000.0;
/// Distance of the camera from the origin along +z.
pub const CAMERA_DISTANCE: f32 = 40.0;

/// Size of the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// A point projected onto the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Surface x, pixels from the left
    pub x: f32,
    /// Surface y, pixels from the top
    pub y: f32,
    /// Distance in front of the camera
    pub depth: f32,
}

/// Fixed perspective camera looking at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    viewport: Viewport,
    aspect: f32,
}

impl Camera {
    /// Creates a camera for the given surface.
    ///
    /// An empty surface falls back to a 1x1 viewport until the first valid
    /// resize.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let viewport = if viewport.is_empty() {
            Viewport::new(1, 1)
        } else {
            viewport
        };
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            viewport,
            aspect: viewport.aspect(),
        }
    }

    /// Current surface size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current aspect ratio.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Matches the projection to a new surface size.
    ///
    /// Returns false, leaving the camera untouched, when either side is zero
    /// or the size did not change.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() || viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.aspect = viewport.aspect();
        true
    }

    /// Combined projection and view matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let projection =
            Mat4::perspective_rh(FIELD_OF_VIEW.to_radians(), self.aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        projection * view
    }

    /// Projects a world point onto the surface.
    ///
    /// Points behind the near plane or past the far plane have no projection.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<ProjectedPoint> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w < NEAR_PLANE || clip.w > FAR_PLANE {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(ProjectedPoint {
            x: (ndc.x + 1.0) * 0.5 * self.viewport.width as f32,
            y: (1.0 - ndc.y) * 0.5 * self.viewport.height as f32,
            depth: clip.w,
        })
    }

    /// On-screen radius of a world-space radius at `depth`.
    #[must_use]
    pub fn projected_radius(&self, radius: f32, depth: f32) -> f32 {
        let half_fov = (FIELD_OF_VIEW.to_radians() / 2.0).tan();
        radius * (self.viewport.height as f32 / 2.0) / (half_fov * depth.max(NEAR_PLANE))
    }
}
