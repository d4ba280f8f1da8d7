use std::rc::Rc;

use glam::{Mat4, Vec3, Vec4};

use crate::coords::Rect;
use crate::model::{Shape, Surface, SurfaceId};
use crate::paint::Color;

/// Points of one surface in some space, plus the values derived from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    pub points: Vec<Vec3>,
    /// Arithmetic mean of `points`.
    pub barycenter: Vec3,
    /// `normalize((p[1] - p[0]) × (p[last] - p[0]))`; zero for fewer than three points.
    pub normal: Vec3,
}

impl PointSet {
    /// Replaces the points (reusing the buffer) and re-derives barycenter and normal.
    fn assign(&mut self, points: impl Iterator<Item = Vec3>) {
        self.points.clear();
        self.points.extend(points);
        self.derive();
    }

    // No special-casing: an empty set yields a NaN barycenter and a collinear
    // one a NaN normal.
    fn derive(&mut self) {
        self.barycenter = self.points.iter().copied().sum::<Vec3>() / self.points.len() as f32;
        self.normal = match self.points.as_slice() {
            [first, second, .., last] => (*second - *first).cross(*last - *first).normalize(),
            _ => Vec3::ZERO,
        };
    }
}

/// Render record for one surface.
///
/// Holds the matrices it was built with, the world-space (`transformed`) and
/// output-space (`projected`) geometry, the frustum flag and the shading
/// results. With caching on, one record per surface is kept by the scene and
/// refreshed in place with [`update`](Self::update) each frame.
#[derive(Debug, Clone)]
pub struct RenderModel {
    shape: Rc<Shape>,
    index: usize,

    transform: Mat4,
    projection: Mat4,
    viewport: Mat4,

    transformed: PointSet,
    clip: Vec<Vec4>,
    projected: PointSet,
    in_frustum: bool,

    fill: Option<Color>,
    stroke: Option<Color>,
}

impl RenderModel {
    /// Builds a record for surface `index` of `shape`.
    ///
    /// # Panics
    /// Panics if `index` is out of range for `shape.surfaces()`.
    pub fn new(shape: Rc<Shape>, index: usize, transform: Mat4, projection: Mat4, viewport: Mat4) -> Self {
        assert!(index < shape.surfaces().len(), "surface index {index} out of range");
        let mut model = Self {
            shape,
            index,
            transform,
            projection,
            viewport,
            transformed: PointSet::default(),
            clip: Vec::new(),
            projected: PointSet::default(),
            in_frustum: false,
            fill: None,
            stroke: None,
        };
        model.recompute();
        model
    }

    /// Refreshes the record in place for a new frame.
    ///
    /// Derived geometry is recomputed into the existing buffers; shading results
    /// from the previous frame are cleared.
    pub fn update(&mut self, transform: Mat4, projection: Mat4, viewport: Mat4) {
        self.transform = transform;
        self.projection = projection;
        self.viewport = viewport;
        self.fill = None;
        self.stroke = None;
        self.recompute();
    }

    fn recompute(&mut self) {
        let surface = &self.shape.surfaces()[self.index];

        let transform = self.transform;
        self.transformed
            .assign(surface.points.iter().map(|p| transform.transform_point3(*p)));

        let projection = self.projection;
        self.clip.clear();
        self.clip
            .extend(self.transformed.points.iter().map(|p| projection * p.extend(1.0)));
        self.in_frustum = clip_volume_overlaps(&self.clip);

        let viewport = self.viewport;
        self.projected.assign(
            self.clip
                .iter()
                .map(|c| viewport.project_point3(c.truncate() / c.w)),
        );
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.shape.surfaces()[self.index]
    }

    #[inline]
    pub fn surface_id(&self) -> SurfaceId {
        self.surface().id()
    }

    #[inline]
    pub fn shape(&self) -> &Rc<Shape> {
        &self.shape
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    pub fn viewport(&self) -> Mat4 {
        self.viewport
    }

    /// World-space geometry; what shaders light.
    #[inline]
    pub fn transformed(&self) -> &PointSet {
        &self.transformed
    }

    /// Output-space geometry; what a 2D draw step paints.
    #[inline]
    pub fn projected(&self) -> &PointSet {
        &self.projected
    }

    #[inline]
    pub fn in_frustum(&self) -> bool {
        self.in_frustum
    }

    /// Projected normal points toward the viewer.
    #[inline]
    pub fn is_front_facing(&self) -> bool {
        self.projected.normal.z < 0.0
    }

    #[inline]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    #[inline]
    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    /// 2D bounds of the projected points.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(&self.projected.points)
    }

    pub(crate) fn set_shading(&mut self, fill: Option<Color>, stroke: Option<Color>) {
        self.fill = fill;
        self.stroke = stroke;
    }

    pub(crate) fn projected_points_mut(&mut self) -> &mut [Vec3] {
        &mut self.projected.points
    }
}

/// Clip-space frustum test against `-w <= x, y, z <= w`.
///
/// Every point must be in front of the eye (`w > 0`), and the points must not
/// all lie outside one and the same clip plane.
fn clip_volume_overlaps(clip: &[Vec4]) -> bool {
    if clip.is_empty() {
        return false;
    }
    let mut shared_outside = u8::MAX;
    for c in clip {
        if !(c.w > 0.0) {
            return false;
        }
        shared_outside &= outcode(*c);
    }
    shared_outside == 0
}

fn outcode(c: Vec4) -> u8 {
    let mut code = 0;
    if c.x < -c.w { code |= 1 << 0; }
    if c.x > c.w { code |= 1 << 1; }
    if c.y < -c.w { code |= 1 << 2; }
    if c.y > c.w { code |= 1 << 3; }
    if c.z < -c.w { code |= 1 << 4; }
    if c.z > c.w { code |= 1 << 5; }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::projection;

    fn triangle_at(z: f32) -> Rc<Shape> {
        Rc::new(Shape::triangle().with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, z))))
    }

    fn build(shape: &Rc<Shape>, projection: Mat4, viewport: Mat4) -> RenderModel {
        RenderModel::new(Rc::clone(shape), 0, shape.transform, projection, viewport)
    }

    // ── derived geometry ──────────────────────────────────────────────────

    #[test]
    fn identity_pipeline_passes_points_through() {
        let shape = triangle_at(0.5);
        let model = build(&shape, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(model.transformed().points, model.projected().points);
        assert_eq!(model.projected().barycenter, Vec3::new(0.0, -1.0 / 3.0, 0.5));
        assert_eq!(model.projected().normal, Vec3::NEG_Z);
        assert!(model.in_frustum());
        assert!(model.is_front_facing());
    }

    #[test]
    fn viewport_applies_after_divide() {
        let shape = triangle_at(0.0);
        let viewport = Mat4::from_scale(Vec3::new(10.0, 10.0, 1.0));
        let model = build(&shape, Mat4::IDENTITY, viewport);
        assert_eq!(model.projected().points[1], Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(model.transformed().points[1], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn perspective_divides_by_depth() {
        let shape = triangle_at(4.0);
        let proj = projection::perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        let model = build(&shape, proj, Mat4::IDENTITY);
        let p = model.projected().points[1];
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 0.25).abs() < 1e-6);
        assert!(model.in_frustum());
        assert!(model.is_front_facing());
    }

    #[test]
    fn degenerate_surface_is_passed_through() {
        let shape = Rc::new(Shape::from_polygons([vec![Vec3::ZERO, Vec3::X]]));
        let model = build(&shape, Mat4::IDENTITY, Mat4::IDENTITY);
        assert_eq!(model.projected().normal, Vec3::ZERO);
        assert!(!model.is_front_facing());

        let empty = Rc::new(Shape::from_polygons([Vec::new()]));
        let model = build(&empty, Mat4::IDENTITY, Mat4::IDENTITY);
        assert!(model.projected().barycenter.is_nan());
        assert!(!model.in_frustum());
    }

    // ── frustum ───────────────────────────────────────────────────────────

    #[test]
    fn straddling_surface_is_in_frustum() {
        let shape = Rc::new(Shape::quad().with_transform(Mat4::from_scale(Vec3::splat(3.0))));
        assert!(build(&shape, Mat4::IDENTITY, Mat4::IDENTITY).in_frustum());
    }

    #[test]
    fn surface_beyond_one_plane_is_outside() {
        let shape = Rc::new(Shape::quad().with_transform(Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))));
        assert!(!build(&shape, Mat4::IDENTITY, Mat4::IDENTITY).in_frustum());
        assert!(!build(&triangle_at(1.5), Mat4::IDENTITY, Mat4::IDENTITY).in_frustum());
    }

    #[test]
    fn point_behind_eye_is_outside() {
        let proj = projection::perspective(1.0, 1.0, 1.0, 100.0);
        assert!(!build(&triangle_at(-2.0), proj, Mat4::IDENTITY).in_frustum());
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_matches_fresh_build_and_clears_shading() {
        let shape = triangle_at(0.0);
        let mut model = build(&shape, Mat4::IDENTITY, Mat4::IDENTITY);
        model.set_shading(Some(Color::WHITE), Some(Color::BLACK));

        let moved = Mat4::from_translation(Vec3::new(0.25, 0.0, 0.5));
        model.update(moved, Mat4::IDENTITY, Mat4::IDENTITY);
        let fresh = RenderModel::new(Rc::clone(&shape), 0, moved, Mat4::IDENTITY, Mat4::IDENTITY);

        assert_eq!(model.projected(), fresh.projected());
        assert_eq!(model.transformed(), fresh.transformed());
        assert_eq!(model.fill(), None);
        assert_eq!(model.stroke(), None);
    }
}
