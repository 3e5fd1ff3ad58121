//! Square plane patch.

use whitted_math::{Interval, LocalGeo, Point3, Ray, UnitNormal, Vector3};

use crate::shape::{plane_basis, Shape, ShapeHit, PARALLEL_EPSILON};

/// An axis-free square: center, unit normal and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    center: Point3,
    normal: UnitNormal,
    size: f64,
    x_axis: Vector3,
    y_axis: Vector3,
}

impl Square {
    /// Create a square. `normal` need not be unit length.
    pub fn new(center: Point3, normal: Vector3, size: f64) -> Self {
        let normal = UnitNormal::new(normal);
        let (x_axis, y_axis) = plane_basis(normal.as_vec());
        Self {
            center,
            normal,
            size,
            x_axis,
            y_axis,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn normal(&self) -> UnitNormal {
        self.normal
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Plane parameter and hit point, if inside the ray's range and the patch.
    fn hit_point(&self, ray: &Ray) -> Option<(f64, Point3)> {
        let divisor = self.normal.dot(ray.direction());
        if divisor.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.center - ray.origin()) / divisor;
        if !ray.in_range(t) {
            return None;
        }

        let position = ray.at(t);
        let offset = position - self.center;
        let half = self.size / 2.0;
        let extent = Interval::new(-half, half);

        (extent.contains(offset.dot(self.x_axis)) && extent.contains(offset.dot(self.y_axis)))
            .then_some((t, position))
    }
}

impl Shape for Square {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let (t, position) = self.hit_point(ray)?;
        Some(ShapeHit {
            t_hit: (ray.direction() * t).length(),
            local: LocalGeo::new(position, self.normal),
        })
    }

    fn intersect_p(&self, ray: &Ray) -> bool {
        self.hit_point(ray).is_some()
    }
}
