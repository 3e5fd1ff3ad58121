//! Whitted math - geometry kernel for the ray tracer.
//!
//! Points, vectors and unit normals are kept as distinct types so that
//! transformations apply translation only where it belongs:
//!
//! - [`Point3`]: a position, translated by affine maps
//! - [`Vector3`]: a direction or offset (glam `DVec3`), never translated
//! - [`UnitNormal`]: a vector that is always renormalized after arithmetic
//!
//! All arithmetic is double precision.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod local_geo;
mod normal;
mod point;
mod ray;
mod transform;

pub use interval::Interval;
pub use local_geo::LocalGeo;
pub use normal::UnitNormal;
pub use point::Point3;
pub use ray::{Ray, RAY_EPSILON};
pub use transform::Transformation;

/// Direction/offset vector. Unlike [`Point3`], unaffected by translation.
pub type Vector3 = DVec3;

/// World "up" used to build in-plane axes for planar shapes.
pub const WORLD_UP: Vector3 = DVec3::Y;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_distinction() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);
        let v: Vector3 = q - p;
        assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
        assert_eq!(p + v, q);
    }

    #[test]
    fn test_world_up() {
        assert_eq!(WORLD_UP, Vector3::new(0.0, 1.0, 0.0));
    }
}
