use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;

use crate::shade::Material;

/// Process-unique surface identity; the render-model cache key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A single planar polygon with its own materials and cull flag.
///
/// Points are in shape-local space. Front faces wind clockwise as seen by the
/// viewer. `Surface` is not `Clone`: every surface owns a distinct
/// [`SurfaceId`].
#[derive(Debug)]
pub struct Surface {
    id: SurfaceId,
    pub points: Vec<Vec3>,
    pub fill: Option<Material>,
    pub stroke: Option<Material>,
    /// Per-surface backface culling; `false` overrides the scene setting.
    pub cull_backfaces: bool,
}

impl Surface {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            id: SurfaceId::next(),
            points,
            fill: None,
            stroke: None,
            cull_backfaces: true,
        }
    }

    #[inline]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn with_fill(mut self, material: impl Into<Material>) -> Self {
        self.fill = Some(material.into());
        self
    }

    pub fn with_stroke(mut self, material: impl Into<Material>) -> Self {
        self.stroke = Some(material.into());
        self
    }

    pub fn with_cull_backfaces(mut self, cull: bool) -> Self {
        self.cull_backfaces = cull;
        self
    }
}
