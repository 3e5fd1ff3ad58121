//! Shape trait for ray-object intersection in object space.

use whitted_math::{LocalGeo, Ray, Vector3, WORLD_UP};

/// Plane denominators below this are treated as a ray parallel to the plane.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-12;

/// A successful ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    /// Euclidean distance from the ray origin to the hit point
    pub t_hit: f64,
    /// Hit point and normal in object space
    pub local: LocalGeo,
}

/// Geometry that can be intersected in its own coordinate frame.
pub trait Shape: Send + Sync {
    /// Intersect the ray, returning distance and local geometry on a hit.
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit>;

    /// Whether the ray hits at all. May be cheaper than `intersect`.
    fn intersect_p(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

/// Two orthonormal axes spanning the plane with the given unit normal.
///
/// The first axis is `up x normal`; a normal parallel to world up falls
/// back to world X.
pub(crate) fn plane_basis(normal: Vector3) -> (Vector3, Vector3) {
    let x_axis = WORLD_UP.cross(normal).try_normalize().unwrap_or(Vector3::X);
    let y_axis = normal.cross(x_axis).normalize();
    (x_axis, y_axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_basis_is_orthonormal() {
        let normal = Vector3::new(0.0, -1.0, 1.0).normalize();
        let (x, y) = plane_basis(normal);

        assert!((x.length() - 1.0).abs() < 1e-12);
        assert!((y.length() - 1.0).abs() < 1e-12);
        assert!(x.dot(y).abs() < 1e-12);
        assert!(x.dot(normal).abs() < 1e-12);
        assert!(y.dot(normal).abs() < 1e-12);
    }

    #[test]
    fn test_plane_basis_normal_along_up() {
        let (x, y) = plane_basis(Vector3::Y);
        assert_eq!(x, Vector3::X);
        // Y x X = -Z
        assert!((y - Vector3::NEG_Z).length() < 1e-12);

        let (x, _) = plane_basis(Vector3::NEG_Y);
        assert_eq!(x, Vector3::X);
    }
}
