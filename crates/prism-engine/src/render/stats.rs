/// Counters for one [`Scene::render`](crate::scene::Scene::render) call.
///
/// Informational only.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Surface visits during the walk (a shared shape counts once per placement).
    pub surfaces: usize,
    pub outside_frustum: usize,
    pub backfaces: usize,
    /// Entries in the returned list.
    pub emitted: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

impl FrameStats {
    #[inline]
    pub fn culled(&self) -> usize {
        self.outside_frustum + self.backfaces
    }
}
