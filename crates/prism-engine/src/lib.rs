//! Prism engine crate.
//!
//! CPU painter's-algorithm renderer: walks a model tree, projects and culls
//! each surface, shades it and returns the survivors sorted back to front for
//! an external 2D draw step.

pub mod camera;
pub mod coords;
pub mod error;
pub mod light;
pub mod logging;
pub mod model;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shade;

pub use camera::{Camera, Viewport};
pub use error::{Result, SceneError};
pub use light::{Light, LightKind, LightRenderModel};
pub use model::{Model, Node, Shape, Surface, SurfaceId};
pub use paint::Color;
pub use render::{FrameStats, RenderModel};
pub use scene::{RenderSettings, Scene};
pub use shade::{Material, Shader};
