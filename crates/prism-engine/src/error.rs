//! Configuration errors.
//!
//! Rendering itself never fails: degenerate inputs propagate as NaN or zero
//! geometry. Hosts that want to reject a bad camera or viewport up front call
//! [`Scene::validate`](crate::scene::Scene::validate), which reports through
//! [`SceneError`].

use thiserror::Error;

/// Errors reported by scene configuration checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A matrix contains NaN or infinite entries.
    #[error("{name} matrix has non-finite entries")]
    NonFiniteMatrix {
        /// Which matrix failed, e.g. "camera transform".
        name: &'static str,
    },

    /// A matrix cannot be inverted, so it collapses space.
    #[error("{name} matrix is singular")]
    SingularMatrix {
        /// Which matrix failed, e.g. "viewport postscale".
        name: &'static str,
    },
}

/// Result alias for configuration checks.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Checks that `m` is finite and invertible.
pub(crate) fn check_matrix(name: &'static str, m: &glam::Mat4) -> Result<()> {
    if !m.is_finite() {
        return Err(SceneError::NonFiniteMatrix { name });
    }
    if m.determinant().abs() <= f32::EPSILON * f32::EPSILON {
        return Err(SceneError::SingularMatrix { name });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    #[test]
    fn identity_is_valid() {
        assert_eq!(check_matrix("m", &Mat4::IDENTITY), Ok(()));
    }

    #[test]
    fn nan_is_rejected() {
        let m = Mat4::from_scale(Vec3::new(f32::NAN, 1.0, 1.0));
        assert_eq!(check_matrix("camera transform", &m), Err(SceneError::NonFiniteMatrix { name: "camera transform" }));
    }

    #[test]
    fn flattened_is_singular() {
        let m = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        let err = check_matrix("viewport prescale", &m).unwrap_err();
        assert_eq!(err.to_string(), "viewport prescale matrix is singular");
    }
}
