//! Scene graph: surfaces, shapes, lights and the model tree that places them.
//!
//! The renderer consumes this module through [`Model::each_renderable`]; the
//! rest is construction and editing API for hosts.

mod graph;
mod shape;
mod surface;

pub use graph::{Model, Node};
pub use shape::Shape;
pub use surface::{Surface, SurfaceId};
