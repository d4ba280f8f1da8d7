//! Lights and their per-frame world-space form.

use glam::{Mat4, Vec3};

use crate::paint::Color;

/// How a light contributes to shading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LightKind {
    /// Radiates from the light's origin.
    Point,
    /// Parallel rays; `direction` points toward the light.
    Directional,
    /// Uniform contribution independent of geometry.
    Ambient,
}

/// A light placed in the scene graph.
///
/// `transform` is local to the owning model; the walker composes it with the
/// accumulated world transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub transform: Mat4,
    /// Local direction toward the light (directional lights only).
    pub direction: Vec3,
}

impl Light {
    pub fn new(kind: LightKind, color: Color, intensity: f32) -> Self {
        Self {
            kind,
            color,
            intensity,
            transform: Mat4::IDENTITY,
            direction: Vec3::NEG_Z,
        }
    }

    /// Point light at `position`.
    pub fn point(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            transform: Mat4::from_translation(position),
            ..Self::new(LightKind::Point, color, intensity)
        }
    }

    /// Directional light shining from `direction` (a vector toward the light).
    pub fn directional(direction: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            direction,
            ..Self::new(LightKind::Directional, color, intensity)
        }
    }

    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self::new(LightKind::Ambient, color, intensity)
    }
}

/// A light resolved into world space for one frame.
///
/// Built by the scene walker's light visitor and handed to shaders; never cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightRenderModel {
    pub kind: LightKind,
    /// Straight RGB scaled by intensity.
    pub color_intensity: Vec3,
    /// World-space light origin.
    pub point: Vec3,
    /// World-space unit direction toward the light.
    pub direction: Vec3,
}

impl LightRenderModel {
    pub fn new(light: &Light, world: &Mat4) -> Self {
        let m = *world * light.transform;
        Self {
            kind: light.kind,
            color_intensity: light.color.straight_rgb() * light.intensity,
            point: m.transform_point3(Vec3::ZERO),
            direction: m.transform_vector3(light.direction).normalize_or_zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_is_placed_in_world() {
        let light = Light::point(Vec3::new(1.0, 2.0, 3.0), Color::WHITE, 0.5);
        let world = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let model = LightRenderModel::new(&light, &world);
        assert_eq!(model.point, Vec3::new(11.0, 2.0, 3.0));
        assert_eq!(model.color_intensity, Vec3::splat(0.5));
    }

    #[test]
    fn directional_light_ignores_translation() {
        let light = Light::directional(Vec3::new(0.0, 0.0, -2.0), Color::WHITE, 1.0);
        let world = Mat4::from_translation(Vec3::new(5.0, 5.0, 5.0));
        let model = LightRenderModel::new(&light, &world);
        assert_eq!(model.direction, Vec3::NEG_Z);
    }
}
