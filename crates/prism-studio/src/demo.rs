//! Demo scene: a cube and a tetrahedron over a floor, under three lights.

use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

use glam::{Mat4, Vec3};
use prism_engine::camera::{Camera, Viewport};
use prism_engine::shade::Flat;
use prism_engine::{Color, Light, Material, Model, Scene, Shape};

/// The demo scene; every child model of the root spins.
pub struct Demo {
    pub scene: Scene,
}

impl Demo {
    pub fn new(width: f32, height: f32) -> Self {
        let mut root = Model::new();
        root.add_light(Light::point(Vec3::new(-4.0, 6.0, -6.0), Color::WHITE, 0.8))
            .add_light(Light::directional(Vec3::new(1.0, 1.0, -1.0), Color::rgb(0.9, 0.9, 1.0), 0.4))
            .add_light(Light::ambient(Color::WHITE, 0.15));

        let floor = Shape::quad()
            .with_transform(Mat4::from_translation(Vec3::new(0.0, -1.5, 0.0)) * Mat4::from_rotation_x(FRAC_PI_2) * Mat4::from_scale(Vec3::splat(4.0)))
            .fill(Color::from_srgb_u8(0x4a, 0x55, 0x68, 0xff))
            .stroke(Material::new(Color::from_srgb_u8(0x2d, 0x37, 0x48, 0xff)).with_shader(Rc::new(Flat)));
        root.add_shape(Rc::new(floor));

        let spinner = root.add_model(Model::new());
        let cube = Shape::cube()
            .with_transform(Mat4::from_translation(Vec3::new(-1.4, 0.0, 0.0)))
            .fill(Material::new(Color::from_srgb_u8(0xe5, 0x3e, 0x3e, 0xff)).with_specular(Color::WHITE, 20.0));
        let tetra = Shape::tetrahedron()
            .with_transform(Mat4::from_translation(Vec3::new(1.6, 0.0, 0.0)))
            .fill(Color::from_srgb_u8(0x38, 0xa1, 0x69, 0xff))
            .stroke(Material::new(Color::BLACK).with_shader(Rc::new(Flat)));
        spinner.add_shape(Rc::new(cube)).add_shape(Rc::new(tetra));

        let mut camera = Camera::perspective(1.0, width / height, 1.0, 40.0);
        camera.look_at(Vec3::new(0.0, 3.0, -8.0), Vec3::ZERO, Vec3::Y);

        let scene = Scene::new(root)
            .with_camera(camera)
            .with_viewport(Viewport::screen(width, height));
        Self { scene }
    }

    /// Turns the spinning subtree about Y.
    pub fn advance(&mut self, radians: f32) {
        for node in self.scene.model.children_mut() {
            if let prism_engine::Node::Model(spinner) = node {
                spinner.rotate_y(radians);
            }
        }
    }
}
