//! Per-view scene state and the frame driver.
//!
//! Responsibilities:
//! - hold the model tree, camera, viewport, active shader and switches for one view
//! - own the view's render-model cache
//! - run the per-frame pipeline in [`Scene::render`]

mod settings;

use std::rc::Rc;

use crate::camera::{Camera, Viewport};
use crate::error::Result;
use crate::light::LightRenderModel;
use crate::model::{Model, SurfaceId};
use crate::render::{
    is_visible, quantize_points, shade_render_model, sort_back_to_front, CacheLookup, FrameStats,
    FrameTransforms, RenderModel, RenderModelCache,
};
use crate::shade::{Phong, Shader};

pub use settings::RenderSettings;

/// Where an emitted record lives for the current frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Slot {
    Cached(SurfaceId),
    Scratch(usize),
}

/// One view of a model tree.
///
/// The host mutates the public fields between frames. The render-model cache is
/// private to the scene; call [`flush_cache`](Self::flush_cache) after removing
/// shapes to drop their records.
///
/// Performance characteristics:
/// - with caching on, records and their point buffers are reused across frames
/// - with caching off, records are rebuilt into a scratch buffer every frame
#[derive(Debug)]
pub struct Scene {
    pub model: Model,
    pub camera: Camera,
    pub viewport: Viewport,
    /// Lighting model for materials without their own shader.
    pub shader: Rc<dyn Shader>,
    pub settings: RenderSettings,

    cache: RenderModelCache,
    scratch: Vec<RenderModel>,
    stats: FrameStats,
}

impl Scene {
    pub fn new(model: Model) -> Self {
        log::debug!("creating scene");
        Self {
            model,
            camera: Camera::default(),
            viewport: Viewport::default(),
            shader: Rc::new(Phong),
            settings: RenderSettings::default(),
            cache: RenderModelCache::new(),
            scratch: Vec::new(),
            stats: FrameStats::default(),
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_shader(mut self, shader: Rc<dyn Shader>) -> Self {
        self.shader = shader;
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Checks the camera and viewport matrices before rendering.
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        self.viewport.validate()
    }

    /// Renders one frame: the visible surfaces, shaded and sorted back to front.
    ///
    /// With caching on, a surface reached through several placements of the same
    /// shape shares one record holding the last placement's geometry. If that
    /// placement is culled the surface is absent; otherwise every visible
    /// placement since the last culled one adds an entry.
    pub fn render(&mut self) -> Vec<&RenderModel> {
        let Self {
            model,
            camera,
            viewport,
            shader,
            settings,
            cache,
            scratch,
            stats,
        } = self;

        let frame = FrameTransforms::compose(camera, viewport);
        let settings = *settings;
        let shader: &dyn Shader = &**shader;

        scratch.clear();
        let mut frame_stats = FrameStats::default();
        let mut slots = Vec::new();

        model.each_renderable(
            |light, world| LightRenderModel::new(light, world),
            |shape, lights, world| {
                for (index, surface) in shape.surfaces().iter().enumerate() {
                    frame_stats.surfaces += 1;

                    let (record, slot) = if settings.cache {
                        let (record, lookup) =
                            cache.build_or_update(shape, index, *world, frame.projection, frame.viewport);
                        match lookup {
                            CacheLookup::Hit => frame_stats.cache_hits += 1,
                            CacheLookup::Miss => frame_stats.cache_misses += 1,
                        }
                        (record, Slot::Cached(surface.id()))
                    } else {
                        let i = scratch.len();
                        scratch.push(RenderModel::new(
                            Rc::clone(shape),
                            index,
                            *world,
                            frame.projection,
                            frame.viewport,
                        ));
                        (&mut scratch[i], Slot::Scratch(i))
                    };

                    let visible = if !record.in_frustum() {
                        frame_stats.outside_frustum += 1;
                        false
                    } else if !is_visible(record, surface.cull_backfaces, settings.cull_backfaces) {
                        frame_stats.backfaces += 1;
                        false
                    } else {
                        true
                    };
                    if !visible {
                        // Shared record now holds culled geometry.
                        if let Slot::Cached(_) = slot {
                            slots.retain(|s| *s != slot);
                        }
                        continue;
                    }

                    shade_render_model(record, lights, shader);
                    slots.push(slot);
                }
            },
        );

        if !settings.fractional_points {
            for slot in &slots {
                let record = match *slot {
                    Slot::Cached(id) => cache.get_mut(id),
                    Slot::Scratch(i) => scratch.get_mut(i),
                };
                if let Some(record) = record {
                    quantize_points(record);
                }
            }
        }

        let cache = &*cache;
        let scratch = &*scratch;
        let mut out: Vec<&RenderModel> = slots
            .iter()
            .filter_map(|slot| match *slot {
                Slot::Cached(id) => cache.get(id),
                Slot::Scratch(i) => scratch.get(i),
            })
            .collect();
        sort_back_to_front(&mut out);

        frame_stats.emitted = out.len();
        log::trace!(
            "frame: {} surfaces, {} outside frustum, {} backfaces, {} emitted ({} cache hits, {} misses)",
            frame_stats.surfaces,
            frame_stats.outside_frustum,
            frame_stats.backfaces,
            frame_stats.emitted,
            frame_stats.cache_hits,
            frame_stats.cache_misses,
        );
        *stats = frame_stats;

        out
    }

    /// Drops every cached render record.
    pub fn flush_cache(&mut self) {
        self.cache.flush();
    }

    #[inline]
    pub fn cache(&self) -> &RenderModelCache {
        &self.cache
    }

    /// Counters from the most recent [`render`](Self::render).
    #[inline]
    pub fn last_frame_stats(&self) -> FrameStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::error::SceneError;
    use crate::model::Shape;
    use crate::paint::Color;

    fn scene_with(shape: Shape) -> (Scene, Rc<Shape>) {
        let shape = Rc::new(shape.fill(Color::WHITE));
        let mut model = Model::new();
        model.add_shape(Rc::clone(&shape));
        (Scene::new(model), shape)
    }

    // ── walk ──────────────────────────────────────────────────────────────

    #[test]
    fn cube_shows_only_its_front_face() {
        let (mut scene, _) = scene_with(Shape::cube().with_transform(Mat4::from_scale(Vec3::splat(0.5))));
        let out = scene.render();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].projected().normal, Vec3::NEG_Z);

        let stats = scene.last_frame_stats();
        assert_eq!(stats.surfaces, 6);
        assert_eq!(stats.emitted, 1);
        // Four side faces are edge-on: zero-z normals count as backfaces.
        assert_eq!(stats.backfaces, 5);
        assert_eq!(stats.cache_misses, 6);
    }

    #[test]
    fn second_frame_hits_cache() {
        let (mut scene, _) = scene_with(Shape::triangle());
        scene.render();
        scene.render();
        let stats = scene.last_frame_stats();
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.cache_misses, 0);
    }

    #[test]
    fn uncached_render_leaves_cache_empty() {
        let (scene, _) = scene_with(Shape::triangle());
        let mut scene = scene.with_settings(RenderSettings::default().with_cache(false));
        assert_eq!(scene.render().len(), 1);
        assert!(scene.cache().is_empty());
        assert_eq!(scene.last_frame_stats().cache_misses, 0);
    }

    #[test]
    fn material_shader_and_scene_shader_both_apply() {
        let (scene, _) = scene_with(Shape::triangle());
        let mut scene = scene.with_shader(Rc::new(crate::shade::Flat));
        let out = scene.render();
        assert_eq!(out[0].fill(), Some(Color::WHITE));
        assert_eq!(out[0].stroke(), None);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_rejects_singular_viewport() {
        let (scene, _) = scene_with(Shape::triangle());
        assert!(scene.validate().is_ok());

        let scene = scene.with_viewport(Viewport::new(Mat4::ZERO, Mat4::IDENTITY));
        assert!(matches!(scene.validate(), Err(SceneError::SingularMatrix { .. })));
    }
}
