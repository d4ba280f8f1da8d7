//! Materials and shading models.
//!
//! The pipeline only ever calls [`Material::render`]; what a shader does with
//! the lights and geometry is opaque to it. A material may override the
//! scene's shader, so fill and stroke on one surface can be lit differently.

mod material;
mod shader;

pub use material::Material;
pub use shader::{Ambient, DiffusePhong, Flat, Phong, Shader};
