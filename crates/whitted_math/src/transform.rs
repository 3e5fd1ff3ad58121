// Affine transformations for points, vectors, normals, rays and local geometry.
//
// `&Transformation * x` is the single entry point: points get the full affine
// map, vectors skip translation, and normals go through the inverse transpose
// so they stay perpendicular to transformed surfaces.

use std::ops::Mul;

use glam::DMat4;

use crate::{Interval, LocalGeo, Point3, Ray, UnitNormal, Vector3};

/// An affine map together with its inverse and inverse transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    matrix: DMat4,
    inverse: DMat4,
    /// Inverse transpose of `matrix`, for normals
    normal_matrix: DMat4,
}

impl Transformation {
    pub const IDENTITY: Transformation = Transformation {
        matrix: DMat4::IDENTITY,
        inverse: DMat4::IDENTITY,
        normal_matrix: DMat4::IDENTITY,
    };

    /// Precompute the inverse and inverse transpose of `matrix`.
    ///
    /// The matrix must be invertible; scene validation rejects zero scales.
    pub fn new(matrix: DMat4) -> Self {
        let inverse = matrix.inverse();
        Self {
            matrix,
            inverse,
            normal_matrix: inverse.transpose(),
        }
    }

    /// The inverse map, without recomputing any inverse.
    pub fn inverse(&self) -> Transformation {
        Transformation {
            matrix: self.inverse,
            inverse: self.matrix,
            normal_matrix: self.matrix.transpose(),
        }
    }

    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == DMat4::IDENTITY
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Point3> for &Transformation {
    type Output = Point3;

    fn mul(self, p: Point3) -> Point3 {
        Point3::from_vec(self.matrix.transform_point3(p.to_vec()))
    }
}

impl Mul<Vector3> for &Transformation {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        // w = 0, translation does not apply
        self.matrix.transform_vector3(v)
    }
}

impl Mul<UnitNormal> for &Transformation {
    type Output = UnitNormal;

    fn mul(self, n: UnitNormal) -> UnitNormal {
        UnitNormal::new(self.normal_matrix.transform_vector3(n.as_vec()))
    }
}

impl Mul<Ray> for &Transformation {
    type Output = Ray;

    /// Origin and direction are mapped separately and both range bounds are
    /// rescaled by the direction's stretch, so parameters address the same
    /// points and an infinite `t_max` stays infinite.
    fn mul(self, ray: Ray) -> Ray {
        let origin = self * ray.origin();
        let direction = self * ray.direction();
        let stretch = direction.length();
        let range = Interval::new(ray.t_min() * stretch, ray.t_max() * stretch);
        Ray::new(origin, direction, range)
    }
}

impl Mul<LocalGeo> for &Transformation {
    type Output = LocalGeo;

    fn mul(self, local: LocalGeo) -> LocalGeo {
        LocalGeo::new(self * local.position, self * local.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DQuat, DVec3};
    use std::f64::consts::PI;

    fn sample_transform() -> Transformation {
        Transformation::new(DMat4::from_scale_rotation_translation(
            DVec3::new(2.0, 0.5, 1.5),
            DQuat::from_rotation_y(PI / 4.0),
            DVec3::new(10.0, -3.0, 2.0),
        ))
    }

    #[test]
    fn test_identity_is_noop() {
        let t = Transformation::IDENTITY;
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(&t * p, p);
        assert_eq!(&t * DVec3::X, DVec3::X);
        assert!(t.is_identity());
    }

    #[test]
    fn test_vector_ignores_translation() {
        let t = Transformation::new(DMat4::from_translation(DVec3::new(10.0, 20.0, 30.0)));
        assert_eq!(&t * DVec3::new(1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(&t * Point3::new(1.0, 2.0, 3.0), Point3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_local_geo_round_trip() {
        let t = sample_transform();
        let local = LocalGeo::new(Point3::new(0.3, -1.2, 4.0), UnitNormal::from_xyz(1.0, 2.0, -0.5));

        let world = &t * local;
        let back = &t.inverse() * world;

        assert!(back.position.distance(local.position) < 1e-9);
        assert!((back.normal.as_vec() - local.normal.as_vec()).length() < 1e-9);
    }

    #[test]
    fn test_normal_stays_unit_and_perpendicular() {
        let t = sample_transform();

        // Tangent and normal of the plane y = 0
        let tangent = DVec3::X;
        let normal = UnitNormal::Y;

        let world_tangent = &t * tangent;
        let world_normal = &t * normal;

        assert!((world_normal.as_vec().length() - 1.0).abs() < 1e-12);
        assert!(world_normal.dot(world_tangent).abs() < 1e-9);
    }

    #[test]
    fn test_ray_transform_keeps_points() {
        let t = sample_transform();
        let ray = Ray::between(Point3::new(0.0, 0.0, 5.0), Point3::new(1.0, 1.0, 0.0));

        let moved = &t * ray;

        // The parameter still addresses the transformed point
        let expected_end = &t * ray.end_point();
        assert!(moved.end_point().distance(expected_end) < 1e-9);
        assert!((moved.direction().length() - 1.0).abs() < 1e-12);

        // So does the lower bound
        let expected_start = &t * ray.at(ray.t_min());
        assert!(moved.at(moved.t_min()).distance(expected_start) < 1e-9);
    }

    #[test]
    fn test_ray_transform_scales_lower_bound() {
        let shrink = Transformation::new(DMat4::from_scale(DVec3::splat(0.001)));
        let ray = Ray::between(Point3::new(0.0, 0.0, 1.05), Point3::ORIGIN);

        let moved = &shrink * ray;
        assert!((moved.t_min() - ray.t_min() * 0.001).abs() < 1e-15);
        assert!((moved.t_max() - ray.t_max() * 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_ray_transform_infinite_range() {
        let t = sample_transform();
        let ray = Ray::new(Point3::ORIGIN, DVec3::Y, Interval::new(1e-4, f64::INFINITY));

        let moved = &t * ray;
        assert_eq!(moved.t_max(), f64::INFINITY);
        assert!(moved.origin().is_finite());
    }
}
