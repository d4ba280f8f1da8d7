//! Coordinate and geometry helpers shared by the pipeline and draw steps.
//!
//! World space is left-handed:
//! - +X right, +Y up, +Z away from the viewer
//! - front faces wind clockwise as seen by the viewer
//!
//! Vectors and matrices are `glam` types; this module only adds what `glam`
//! does not provide.

pub mod projection;
mod rect;

pub use rect::Rect;
