use std::fmt::Debug;

use glam::Vec3;

use crate::light::{LightKind, LightRenderModel};
use crate::paint::Color;
use crate::render::PointSet;

use super::Material;

/// Direction from a surface toward the viewer, in world space.
const EYE: Vec3 = Vec3::NEG_Z;

/// A lighting model.
///
/// `geometry` is the transformed (world-space) point set of one surface; its
/// `normal` and `barycenter` are what lighting reads.
pub trait Shader: Debug {
    fn shade(&self, lights: &[LightRenderModel], geometry: &PointSet, material: &Material) -> Color;
}

/// Ambient + Lambert diffuse + Phong specular.
#[derive(Debug, Default, Copy, Clone)]
pub struct Phong;

/// Ambient + Lambert diffuse, no highlights.
#[derive(Debug, Default, Copy, Clone)]
pub struct DiffusePhong;

/// Ambient lights only.
#[derive(Debug, Default, Copy, Clone)]
pub struct Ambient;

/// Unlit: the material color as-is.
#[derive(Debug, Default, Copy, Clone)]
pub struct Flat;

impl Shader for Phong {
    fn shade(&self, lights: &[LightRenderModel], geometry: &PointSet, material: &Material) -> Color {
        let terms = accumulate(lights, geometry, material, Terms::ALL);
        terms.resolve(material)
    }
}

impl Shader for DiffusePhong {
    fn shade(&self, lights: &[LightRenderModel], geometry: &PointSet, material: &Material) -> Color {
        let terms = accumulate(lights, geometry, material, Terms::DIFFUSE);
        terms.resolve(material)
    }
}

impl Shader for Ambient {
    fn shade(&self, lights: &[LightRenderModel], geometry: &PointSet, material: &Material) -> Color {
        let terms = accumulate(lights, geometry, material, Terms::AMBIENT);
        terms.resolve(material)
    }
}

impl Shader for Flat {
    fn shade(&self, _lights: &[LightRenderModel], _geometry: &PointSet, material: &Material) -> Color {
        material.color
    }
}

#[derive(Debug, Copy, Clone)]
struct Terms {
    diffuse: bool,
    specular: bool,
}

impl Terms {
    const ALL: Self = Self { diffuse: true, specular: true };
    const DIFFUSE: Self = Self { diffuse: true, specular: false };
    const AMBIENT: Self = Self { diffuse: false, specular: false };
}

/// Light energy gathered for one surface, before material colors are applied.
#[derive(Debug, Default, Copy, Clone)]
struct Lighting {
    diffuse: Vec3,
    specular: Vec3,
}

impl Lighting {
    fn resolve(self, material: &Material) -> Color {
        let (_, _, _, alpha) = material.color.to_straight();
        let rgb = material.color.straight_rgb() * self.diffuse
            + material.specular_color.straight_rgb() * self.specular;
        Color::from_rgb_vec(rgb, alpha)
    }
}

fn accumulate(lights: &[LightRenderModel], geometry: &PointSet, material: &Material, terms: Terms) -> Lighting {
    let mut out = Lighting::default();
    for light in lights {
        let to_light = match light.kind {
            LightKind::Ambient => {
                out.diffuse += light.color_intensity;
                continue;
            }
            LightKind::Directional => light.direction,
            LightKind::Point => (light.point - geometry.barycenter).normalize_or_zero(),
        };
        if !terms.diffuse {
            continue;
        }

        let dot = geometry.normal.dot(to_light);
        // Also rejects NaN from degenerate normals.
        if !(dot > 0.0) {
            continue;
        }
        out.diffuse += light.color_intensity * dot;

        if terms.specular {
            let reflection = geometry.normal * (2.0 * dot) - to_light;
            let highlight = reflection.dot(EYE).max(0.0).powf(material.specular_exponent);
            out.specular += light.color_intensity * highlight;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use glam::Mat4;

    fn facing_viewer() -> PointSet {
        PointSet {
            points: Vec::new(),
            barycenter: Vec3::ZERO,
            normal: Vec3::NEG_Z,
        }
    }

    fn lights(list: &[Light]) -> Vec<LightRenderModel> {
        list.iter().map(|l| LightRenderModel::new(l, &Mat4::IDENTITY)).collect()
    }

    // ── Phong ─────────────────────────────────────────────────────────────

    #[test]
    fn head_on_point_light_saturates_white() {
        let lights = lights(&[Light::point(Vec3::new(0.0, 0.0, -5.0), Color::WHITE, 1.0)]);
        let c = Phong.shade(&lights, &facing_viewer(), &Material::new(Color::rgb(0.5, 0.5, 0.5)));
        // diffuse 0.5 + full highlight 1.0, clamped.
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn light_behind_surface_contributes_nothing() {
        let lights = lights(&[Light::point(Vec3::new(0.0, 0.0, 5.0), Color::WHITE, 1.0)]);
        let c = Phong.shade(&lights, &facing_viewer(), &Material::new(Color::WHITE));
        assert_eq!(c, Color::BLACK);
    }

    // ── DiffusePhong / Ambient ────────────────────────────────────────────

    #[test]
    fn diffuse_scales_with_angle() {
        let dir = Vec3::new(0.0, 1.0, -1.0);
        let lights = lights(&[Light::directional(dir, Color::WHITE, 1.0)]);
        let c = DiffusePhong.shade(&lights, &facing_viewer(), &Material::new(Color::WHITE));
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((c.r - expected).abs() < 1e-5);
        assert_eq!(c.r, c.g);
    }

    #[test]
    fn ambient_ignores_directional_lights() {
        let lights = lights(&[
            Light::ambient(Color::WHITE, 0.25),
            Light::directional(Vec3::NEG_Z, Color::WHITE, 1.0),
        ]);
        let c = Ambient.shade(&lights, &facing_viewer(), &Material::new(Color::WHITE));
        assert_eq!(c, Color::rgb(0.25, 0.25, 0.25));
    }

    #[test]
    fn degenerate_normal_only_gets_ambient() {
        let geometry = PointSet {
            normal: Vec3::NAN,
            ..facing_viewer()
        };
        let lights = lights(&[
            Light::ambient(Color::WHITE, 0.5),
            Light::directional(Vec3::NEG_Z, Color::WHITE, 1.0),
        ]);
        let c = Phong.shade(&lights, &geometry, &Material::new(Color::WHITE));
        assert_eq!(c, Color::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn flat_returns_material_color() {
        let color = Color::rgb(0.1, 0.2, 0.3);
        assert_eq!(Flat.shade(&[], &facing_viewer(), &Material::new(color)), color);
    }
}
