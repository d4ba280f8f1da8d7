/// Per-scene render switches.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RenderSettings {
    /// Drop surfaces facing away from the viewer. A surface can opt out with
    /// its own `cull_backfaces` flag.
    pub cull_backfaces: bool,
    /// Keep sub-pixel output coordinates instead of rounding x and y.
    /// Depth (z) is never rounded, so sort order does not depend on this.
    pub fractional_points: bool,
    /// Reuse one render record per surface across frames.
    pub cache: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cull_backfaces: true,
            fractional_points: false,
            cache: true,
        }
    }
}

impl RenderSettings {
    pub fn with_cull_backfaces(mut self, on: bool) -> Self {
        self.cull_backfaces = on;
        self
    }

    pub fn with_fractional_points(mut self, on: bool) -> Self {
        self.fractional_points = on;
        self
    }

    pub fn with_cache(mut self, on: bool) -> Self {
        self.cache = on;
        self
    }
}
