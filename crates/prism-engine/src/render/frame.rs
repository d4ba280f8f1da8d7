use glam::Mat4;

use crate::camera::{Camera, Viewport};

/// Matrices shared by every surface in one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTransforms {
    /// Camera transform, then viewport prescale, then camera projection.
    pub projection: Mat4,
    /// Applied to points after the homogeneous divide.
    pub viewport: Mat4,
}

impl FrameTransforms {
    /// Composes the frame matrices from the current camera and viewport.
    ///
    /// Column-vector convention: the matrix applied first sits rightmost.
    #[inline]
    pub fn compose(camera: &Camera, viewport: &Viewport) -> Self {
        Self {
            projection: camera.projection * viewport.prescale * camera.transform,
            viewport: viewport.postscale,
        }
    }
}
