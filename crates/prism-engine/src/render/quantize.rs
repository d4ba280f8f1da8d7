use super::RenderModel;

/// Rounds projected x and y to the nearest integer, in place.
///
/// Depth and the barycenter are left alone, so sorting is unaffected.
/// Idempotent. Projected points are rebuilt from surface points every frame,
/// so rounding never leaks into later frames.
pub fn quantize_points(model: &mut RenderModel) {
    for p in model.projected_points_mut() {
        p.x = p.x.round();
        p.y = p.y.round();
    }
}
