//! Left-handed projection matrices with depth mapped to `[-1, 1]`.
//!
//! `glam` ships left-handed projections with a `[0, 1]` depth range and
//! right-handed ones with `[-1, 1]`. The canonical clip volume used by the
//! visibility filter is the full `[-1, 1]` cube, so these helpers mirror the
//! right-handed GL variants across the XY plane.

use glam::{Mat4, Vec3};

const MIRROR_Z: Vec3 = Vec3::new(1.0, 1.0, -1.0);

/// Perspective projection looking down +Z.
///
/// `fov_y` is in radians. Points at `z = near` map to depth -1, `z = far` to +1.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y, aspect, near, far) * Mat4::from_scale(MIRROR_Z)
}

/// Orthographic projection looking down +Z.
///
/// Maps the box `[left, right] × [bottom, top] × [near, far]` onto the unit cube.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far) * Mat4::from_scale(MIRROR_Z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn unit_orthographic_is_identity() {
        let m = orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn orthographic_maps_box_corners() {
        let m = orthographic(0.0, 200.0, 0.0, 100.0, 1.0, 11.0);
        assert!(close(m.project_point3(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(-1.0, -1.0, -1.0)));
        assert!(close(m.project_point3(Vec3::new(200.0, 100.0, 11.0)), Vec3::ONE));
    }

    #[test]
    fn perspective_depth_range() {
        let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        assert!((m.project_point3(Vec3::new(0.0, 0.0, 1.0)).z + 1.0).abs() < 1e-5);
        assert!((m.project_point3(Vec3::new(0.0, 0.0, 100.0)).z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn perspective_keeps_x_right_y_up() {
        let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
        let p = m.project_point3(Vec3::new(1.0, 2.0, 4.0));
        assert!(p.x > 0.0 && p.y > 0.0);
        assert!(close(p.truncate().extend(0.0), Vec3::new(0.25, 0.5, 0.0)));
    }
}
