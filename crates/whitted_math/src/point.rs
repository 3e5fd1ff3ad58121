use std::ops::{Add, Sub};

use glam::DVec3;

/// A position in 3D space.
///
/// Subtracting two points yields a vector; adding a vector to a point
/// yields a point. Transformations translate points but not vectors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3(DVec3);

impl Point3 {
    pub const ORIGIN: Point3 = Point3(DVec3::ZERO);

    /// Create a point from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Interpret a position vector as a point.
    #[inline]
    pub const fn from_vec(v: DVec3) -> Self {
        Self(v)
    }

    /// The position vector from the origin to this point.
    #[inline]
    pub fn to_vec(self) -> DVec3 {
        self.0
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        self.0.distance(other.0)
    }

    /// True when every coordinate is finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<DVec3> for Point3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Point3> for DVec3 {
    fn from(p: Point3) -> Self {
        p.0
    }
}

impl Sub for Point3 {
    type Output = DVec3;

    #[inline]
    fn sub(self, rhs: Point3) -> DVec3 {
        self.0 - rhs.0
    }
}

impl Add<DVec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, rhs: DVec3) -> Point3 {
        Point3(self.0 + rhs)
    }
}

impl Sub<DVec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, rhs: DVec3) -> Point3 {
        Point3(self.0 - rhs)
    }
}
