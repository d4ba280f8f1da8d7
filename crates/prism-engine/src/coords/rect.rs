use glam::{Vec2, Vec3};

/// Axis-aligned 2D rectangle in output (projected) coordinates.
///
/// `origin` is the minimum corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Tight 2D bounds of projected points (z ignored).
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = first.truncate();
        let mut max = min;
        for p in rest {
            min = min.min(p.truncate());
            max = max.max(p.truncate());
        }
        Some(Self::from_origin_size(min, max - min))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_bounds_xy() {
        let pts = [
            Vec3::new(1.0, 5.0, 0.3),
            Vec3::new(-2.0, 3.0, 0.1),
            Vec3::new(4.0, -1.0, 0.9),
        ];
        assert_eq!(Rect::from_points(&pts), Some(r(-2.0, -1.0, 6.0, 6.0)));
    }

    #[test]
    fn from_points_empty_is_none() {
        assert_eq!(Rect::from_points(&[]), None);
    }

    #[test]
    fn min_max_are_corners() {
        let rect = r(-2.0, -1.0, 6.0, 4.0);
        assert_eq!(rect.min(), Vec2::new(-2.0, -1.0));
        assert_eq!(rect.max(), Vec2::new(4.0, 3.0));
    }
}
