use crate::light::LightRenderModel;
use crate::shade::Shader;

use super::RenderModel;

/// Computes fill and stroke colors for one visible record.
///
/// Each is lit independently from the surface's material; a missing material
/// leaves the matching result empty. Lighting reads world-space geometry.
pub fn shade_render_model(model: &mut RenderModel, lights: &[LightRenderModel], shader: &dyn Shader) {
    let surface = model.surface();
    let geometry = model.transformed();
    let fill = surface.fill.as_ref().map(|m| m.render(lights, shader, geometry));
    let stroke = surface.stroke.as_ref().map(|m| m.render(lights, shader, geometry));
    model.set_shading(fill, stroke);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::{Mat4, Vec3};

    use super::*;
    use crate::light::Light;
    use crate::model::{Shape, Surface};
    use crate::paint::Color;
    use crate::shade::{Flat, Phong};

    fn record(surface: Surface) -> RenderModel {
        let shape = Rc::new(Shape::new(vec![surface]));
        RenderModel::new(shape, 0, Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }

    fn points() -> Vec<Vec3> {
        Shape::triangle().surfaces()[0].points.clone()
    }

    #[test]
    fn missing_materials_give_no_results() {
        let mut model = record(Surface::new(points()));
        shade_render_model(&mut model, &[], &Phong);
        assert_eq!(model.fill(), None);
        assert_eq!(model.stroke(), None);
    }

    #[test]
    fn fill_and_stroke_shaded_independently() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let mut model = record(Surface::new(points()).with_fill(red).with_stroke(blue));
        shade_render_model(&mut model, &[], &Flat);
        assert_eq!(model.fill(), Some(red));
        assert_eq!(model.stroke(), Some(blue));
    }

    #[test]
    fn lit_by_frame_lights() {
        let mut model = record(Surface::new(points()).with_fill(Color::WHITE));
        shade_render_model(&mut model, &[], &Phong);
        assert_eq!(model.fill(), Some(Color::BLACK));

        let light = Light::point(Vec3::new(0.0, 0.0, -5.0), Color::WHITE, 1.0);
        let lights = [LightRenderModel::new(&light, &Mat4::IDENTITY)];
        shade_render_model(&mut model, &lights, &Phong);
        let lit = model.fill().expect("fill");
        assert!(lit.r > 0.0);
    }
}
