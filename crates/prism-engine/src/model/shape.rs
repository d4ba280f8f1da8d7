use glam::{Mat4, Vec3};

use crate::shade::Material;

use super::Surface;

/// A group of surfaces sharing one local transform.
///
/// Shapes are placed in the graph as `Rc<Shape>` and may be placed more than
/// once; every placement renders the same surfaces.
#[derive(Debug)]
pub struct Shape {
    pub transform: Mat4,
    surfaces: Vec<Surface>,
}

impl Shape {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            surfaces,
        }
    }

    /// One surface per point list.
    pub fn from_polygons(polygons: impl IntoIterator<Item = Vec<Vec3>>) -> Self {
        Self::new(polygons.into_iter().map(Surface::new).collect())
    }

    #[inline]
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    #[inline]
    pub fn surfaces_mut(&mut self) -> &mut [Surface] {
        &mut self.surfaces
    }

    /// Sets the fill material on every surface.
    pub fn fill(mut self, material: impl Into<Material>) -> Self {
        let material = material.into();
        for surface in &mut self.surfaces {
            surface.fill = Some(material.clone());
        }
        self
    }

    /// Sets the stroke material on every surface.
    pub fn stroke(mut self, material: impl Into<Material>) -> Self {
        let material = material.into();
        for surface in &mut self.surfaces {
            surface.stroke = Some(material.clone());
        }
        self
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Triangle in the XY plane facing the viewer (-Z).
    pub fn triangle() -> Self {
        Self::from_polygons([vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        ]])
    }

    /// Unit square `(-1, -1)..(1, 1)` in the XY plane facing the viewer (-Z).
    pub fn quad() -> Self {
        Self::from_polygons([vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        ]])
    }

    /// Axis-aligned cube `(-1, -1, -1)..(1, 1, 1)` with outward-facing sides.
    pub fn cube() -> Self {
        let p = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
        Self::from_polygons([
            // -Z
            vec![p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, -1.0)],
            // +Z
            vec![p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)],
            // -X
            vec![p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)],
            // +X
            vec![p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0), p(1.0, -1.0, 1.0)],
            // -Y
            vec![p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)],
            // +Y
            vec![p(-1.0, 1.0, -1.0), p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0)],
        ])
    }

    /// Regular tetrahedron inscribed in the cube `(-1, -1, -1)..(1, 1, 1)`.
    pub fn tetrahedron() -> Self {
        let v = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        ];
        let faces = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
        Self::from_polygons(faces.iter().map(|f| outward([v[f[0]], v[f[1]], v[f[2]]], Vec3::ZERO)))
    }
}

/// Orders a triangle so its normal points away from `center`.
fn outward(tri: [Vec3; 3], center: Vec3) -> Vec<Vec3> {
    let [a, b, c] = tri;
    let normal = (b - a).cross(c - a);
    let centroid = (a + b + c) / 3.0;
    if normal.dot(centroid - center) >= 0.0 {
        vec![a, b, c]
    } else {
        vec![a, c, b]
    }
}
