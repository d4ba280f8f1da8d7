use core::cmp::Ordering;

use super::RenderModel;

/// Painter's-order sort key.
///
/// Ordering rules:
/// 1) `depth`: descending (farthest first)
/// 2) NaN depths are ordered by `f32::total_cmp`, never panicking
///
/// Equal keys compare equal; a stable sort keeps their input order.
#[derive(Debug, Copy, Clone)]
pub struct DepthKey {
    /// Projected barycenter z.
    pub depth: f32,
}

impl DepthKey {
    #[inline]
    pub const fn new(depth: f32) -> Self {
        Self { depth }
    }

    #[inline]
    pub fn of(model: &RenderModel) -> Self {
        Self::new(model.projected().barycenter.z)
    }
}

impl Ord for DepthKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.depth.total_cmp(&self.depth)
    }
}

impl PartialOrd for DepthKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DepthKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DepthKey {}

/// Orders records back to front. Stable.
#[inline]
pub fn sort_back_to_front(models: &mut [&RenderModel]) {
    models.sort_by_key(|m| DepthKey::of(m));
}
