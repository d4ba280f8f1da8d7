//! Paint model shared between materials, shaders and 2D draw steps.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
