use crate::{Interval, Point3, Vector3};

/// Default lower bound of a ray's parametric range.
///
/// Keeps secondary rays from re-hitting the surface they start on.
pub const RAY_EPSILON: f64 = 1e-4;

/// A ray with an origin, a unit direction and a valid parametric range.
///
/// Only parameters strictly inside `range` count as hits, so the origin
/// itself (t = 0) is always excluded and shadow rays can be capped at the
/// light's distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
    range: Interval,
}

impl Ray {
    /// Create a ray. `direction` is normalized; a zero direction stays zero.
    pub fn new(origin: Point3, direction: Vector3, range: Interval) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            range,
        }
    }

    /// Ray from `from` toward `to`, valid up to the distance between them.
    pub fn between(from: Point3, to: Point3) -> Self {
        let offset = to - from;
        Self::new(from, offset, Interval::new(RAY_EPSILON, offset.length()))
    }

    /// Ray from `from` through `to`, valid up to `max_distance`.
    pub fn between_with_max(from: Point3, to: Point3, max_distance: f64) -> Self {
        Self::new(from, to - from, Interval::new(RAY_EPSILON, max_distance))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    #[inline]
    pub fn range(&self) -> Interval {
        self.range
    }

    #[inline]
    pub fn t_min(&self) -> f64 {
        self.range.min
    }

    #[inline]
    pub fn t_max(&self) -> f64 {
        self.range.max
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// The far end of the valid segment.
    pub fn end_point(&self) -> Point3 {
        self.at(self.range.max)
    }

    /// True if `t` lies strictly inside `(t_min, t_max)`.
    #[inline]
    pub fn in_range(&self, t: f64) -> bool {
        self.range.surrounds(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_between() {
        let ray = Ray::between(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 1.0));

        assert_eq!(ray.origin(), Point3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction(), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.t_min(), RAY_EPSILON);
        assert!((ray.t_max() - 4.0).abs() < 1e-12);
        assert!((ray.end_point().z() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_between_with_max() {
        let ray = Ray::between_with_max(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, 50.0);

        assert_eq!(ray.t_max(), 50.0);
        assert!((ray.direction().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(2.0, 0.0, 0.0), Interval::new(0.0, 10.0));

        // Direction is normalized on construction
        assert_eq!(ray.at(0.0), Point3::ORIGIN);
        assert_eq!(ray.at(1.0), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Point3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_ray_in_range_excludes_origin() {
        let ray = Ray::between(Point3::ORIGIN, Point3::new(0.0, 3.0, 0.0));

        assert!(!ray.in_range(0.0));
        assert!(!ray.in_range(RAY_EPSILON));
        assert!(ray.in_range(1.0));
        assert!(!ray.in_range(3.0));
        assert!(!ray.in_range(4.0));
    }

    #[test]
    fn test_degenerate_ray_has_zero_direction() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let ray = Ray::between(p, p);
        assert_eq!(ray.direction(), Vector3::ZERO);
        assert!(!ray.in_range(0.5));
    }
}
