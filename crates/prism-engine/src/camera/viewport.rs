use glam::{Mat4, Vec3};

use crate::error::{self, Result};

/// Viewport matrices.
///
/// - `prescale` is applied between the camera transform and the camera
///   projection; it brings a scene authored in output units into the unit range.
/// - `postscale` is applied to projected (NDC) points to reach output coordinates.
///
/// The default viewport is the identity on both: NDC is the output space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub prescale: Mat4,
    pub postscale: Mat4,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            prescale: Mat4::IDENTITY,
            postscale: Mat4::IDENTITY,
        }
    }
}

impl Viewport {
    #[inline]
    pub const fn new(prescale: Mat4, postscale: Mat4) -> Self {
        Self { prescale, postscale }
    }

    /// `width × height` output box with the world origin at its center.
    ///
    /// Output origin is the bottom-left corner, +Y up. Depth is scaled like Y.
    pub fn center(width: f32, height: f32) -> Self {
        Self::new(unit_scale(width, height), to_output(width, height))
    }

    /// `width × height` output box with the world origin at its bottom-left corner.
    pub fn origin(width: f32, height: f32) -> Self {
        let prescale = Mat4::from_translation(Vec3::new(-1.0, -1.0, 0.0)) * unit_scale(width, height);
        Self::new(prescale, to_output(width, height))
    }

    /// `width × height` output box for a scene authored in camera units.
    ///
    /// Identity prescale; NDC maps onto the box as in [`center`](Self::center).
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(Mat4::IDENTITY, to_output(width, height))
    }

    /// Checks that both matrices are finite and invertible.
    pub fn validate(&self) -> Result<()> {
        error::check_matrix("viewport prescale", &self.prescale)?;
        error::check_matrix("viewport postscale", &self.postscale)
    }
}

fn unit_scale(width: f32, height: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(2.0 / width, 2.0 / height, 2.0 / height))
}

fn to_output(width: f32, height: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(width / 2.0, height / 2.0, 0.0))
        * Mat4::from_scale(Vec3::new(width / 2.0, height / 2.0, 1.0))
}
