//! Per-frame pipeline stages.
//!
//! Order within one frame (driven by [`Scene::render`](crate::scene::Scene::render)):
//! 1. [`FrameTransforms::compose`] builds the frame's projection and viewport matrices
//! 2. the scene walk builds or updates one [`RenderModel`] per surface visit
//! 3. [`is_visible`] drops surfaces outside the frustum or facing away
//! 4. [`shade_render_model`] attaches fill and stroke colors
//! 5. [`quantize_points`] rounds output coordinates (unless fractional points are on)
//! 6. [`sort_back_to_front`] orders the survivors for painting

mod cache;
mod frame;
mod quantize;
mod render_model;
mod shading;
mod sort;
mod stats;
mod visibility;

pub use cache::{CacheLookup, RenderModelCache};
pub use frame::FrameTransforms;
pub use quantize::quantize_points;
pub use render_model::{PointSet, RenderModel};
pub use shading::shade_render_model;
pub use sort::{sort_back_to_front, DepthKey};
pub use stats::FrameStats;
pub use visibility::is_visible;
