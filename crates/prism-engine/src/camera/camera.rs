use glam::{Mat4, Vec3};

use crate::coords::projection;
use crate::error::{self, Result};

/// View camera.
///
/// `transform` maps world space into camera space (a view matrix, camera looking
/// down +Z). `projection` maps camera space into clip space.
///
/// The default camera is the identity on both, so the visible volume is the
/// unit cube `(-1, -1, -1)..(1, 1, 1)` viewed orthographically.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub transform: Mat4,
    pub projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

impl Camera {
    #[inline]
    pub const fn new(transform: Mat4, projection: Mat4) -> Self {
        Self { transform, projection }
    }

    /// Camera at the origin with a perspective projection (`fov_y` in radians).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(Mat4::IDENTITY, projection::perspective(fov_y, aspect, near, far))
    }

    /// Camera at the origin with an orthographic projection.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self::new(
            Mat4::IDENTITY,
            projection::orthographic(left, right, bottom, top, near, far),
        )
    }

    #[inline]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Points the camera from `eye` at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.transform = Mat4::look_at_lh(eye, target, up);
    }

    /// Checks that both matrices are finite and invertible.
    pub fn validate(&self) -> Result<()> {
        error::check_matrix("camera transform", &self.transform)?;
        error::check_matrix("camera projection", &self.projection)
    }
}
