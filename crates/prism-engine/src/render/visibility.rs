use super::RenderModel;

/// Whether a surface survives culling this frame.
///
/// Surfaces outside the frustum are always dropped. Backfaces are dropped only
/// while both the scene and the surface ask for culling.
#[inline]
pub fn is_visible(model: &RenderModel, surface_cull: bool, scene_cull: bool) -> bool {
    model.in_frustum() && (!scene_cull || !surface_cull || model.is_front_facing())
}
