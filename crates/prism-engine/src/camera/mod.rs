//! Camera and viewport: the per-view matrices the transform compositor reads.

mod camera;
mod viewport;

pub use camera::Camera;
pub use viewport::Viewport;
