use std::rc::Rc;

use crate::light::LightRenderModel;
use crate::paint::Color;
use crate::render::PointSet;

use super::Shader;

/// Surface appearance for a fill or a stroke.
#[derive(Debug, Clone)]
pub struct Material {
    pub color: Color,
    pub specular_color: Color,
    pub specular_exponent: f32,
    /// Overrides the scene shader when set.
    pub shader: Option<Rc<dyn Shader>>,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            specular_color: Color::WHITE,
            specular_exponent: 15.0,
            shader: None,
        }
    }

    pub fn with_specular(mut self, color: Color, exponent: f32) -> Self {
        self.specular_color = color;
        self.specular_exponent = exponent;
        self
    }

    pub fn with_shader(mut self, shader: Rc<dyn Shader>) -> Self {
        self.shader = Some(shader);
        self
    }

    /// Computes the lit color for `geometry` (world-space points of one surface).
    ///
    /// Uses the material's own shader if it has one, `shader` otherwise.
    pub fn render(&self, lights: &[LightRenderModel], shader: &dyn Shader, geometry: &PointSet) -> Color {
        let shader = self.shader.as_deref().unwrap_or(shader);
        shader.shade(lights, geometry, self)
    }
}

impl From<Color> for Material {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade::{Flat, Phong};

    #[test]
    fn own_shader_wins_over_scene_shader() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let material = Material::new(red).with_shader(Rc::new(Flat));
        // No lights: Phong would give black, Flat gives the material color.
        let out = material.render(&[], &Phong, &PointSet::default());
        assert_eq!(out, red);
    }

    #[test]
    fn scene_shader_used_without_override() {
        let material = Material::new(Color::rgb(1.0, 0.0, 0.0));
        let out = material.render(&[], &Phong, &PointSet::default());
        assert_eq!(out, Color::BLACK);
    }
}
