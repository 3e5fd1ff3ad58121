//! Unit-length surface normals.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;

/// A vector that is unit length after construction and after every
/// arithmetic combination.
///
/// Normalization is explicit: each constructor and operator divides by the
/// length of the combined vector. A zero-length input produces NaN
/// components rather than panicking; use [`UnitNormal::try_new`] where the
/// caller can recover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitNormal(DVec3);

impl UnitNormal {
    pub const X: UnitNormal = UnitNormal(DVec3::X);
    pub const Y: UnitNormal = UnitNormal(DVec3::Y);
    pub const Z: UnitNormal = UnitNormal(DVec3::Z);

    /// Normalize `v`. NaN components if `v` has zero length.
    #[inline]
    pub fn new(v: DVec3) -> Self {
        Self(v / v.length())
    }

    /// Normalize `v`, or `None` if it is zero, infinite or NaN.
    #[inline]
    pub fn try_new(v: DVec3) -> Option<Self> {
        v.try_normalize().map(Self)
    }

    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(DVec3::new(x, y, z))
    }

    /// The underlying unit vector.
    #[inline]
    pub fn as_vec(self) -> DVec3 {
        self.0
    }

    #[inline]
    pub fn dot(self, v: DVec3) -> f64 {
        self.0.dot(v)
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<UnitNormal> for DVec3 {
    fn from(n: UnitNormal) -> Self {
        n.0
    }
}

impl Neg for UnitNormal {
    type Output = UnitNormal;

    fn neg(self) -> UnitNormal {
        UnitNormal(-self.0)
    }
}

impl Add<DVec3> for UnitNormal {
    type Output = UnitNormal;

    fn add(self, rhs: DVec3) -> UnitNormal {
        UnitNormal::new(self.0 + rhs)
    }
}

impl Sub<DVec3> for UnitNormal {
    type Output = UnitNormal;

    fn sub(self, rhs: DVec3) -> UnitNormal {
        UnitNormal::new(self.0 - rhs)
    }
}

impl Add<UnitNormal> for DVec3 {
    type Output = UnitNormal;

    fn add(self, rhs: UnitNormal) -> UnitNormal {
        UnitNormal::new(self + rhs.0)
    }
}

impl Sub<UnitNormal> for DVec3 {
    type Output = UnitNormal;

    fn sub(self, rhs: UnitNormal) -> UnitNormal {
        UnitNormal::new(self - rhs.0)
    }
}

impl Add for UnitNormal {
    type Output = UnitNormal;

    fn add(self, rhs: UnitNormal) -> UnitNormal {
        UnitNormal::new(self.0 + rhs.0)
    }
}

impl Sub for UnitNormal {
    type Output = UnitNormal;

    fn sub(self, rhs: UnitNormal) -> UnitNormal {
        UnitNormal::new(self.0 - rhs.0)
    }
}

/// Scaling leaves the unit-normal invariant, so the result is a plain vector.
impl Mul<f64> for UnitNormal {
    type Output = DVec3;

    fn mul(self, rhs: f64) -> DVec3 {
        self.0 * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_unit(n: UnitNormal) -> bool {
        (n.as_vec().length() - 1.0).abs() < 1e-12
    }

    #[test]
    fn test_new_normalizes() {
        let n = UnitNormal::new(DVec3::new(0.0, 3.0, 4.0));
        assert!(is_unit(n));
        assert!((n.as_vec() - DVec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_arithmetic_renormalizes() {
        let n = UnitNormal::Y;
        let v = DVec3::new(3.0, 0.0, 0.0);

        assert!(is_unit(n + v));
        assert!(is_unit(n - v));
        assert!(is_unit(v + n));
        assert!(is_unit(v - n));
        assert!(is_unit(UnitNormal::X + UnitNormal::Y));

        let half = UnitNormal::X + UnitNormal::Y;
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((half.as_vec().x - expected).abs() < 1e-12);
        assert!((half.as_vec().y - expected).abs() < 1e-12);
    }

    #[test]
    fn test_vector_minus_normal_order() {
        // v - n, not n - v
        let n = DVec3::new(0.0, 0.0, 2.0) - UnitNormal::Z;
        assert!((n.as_vec() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_zero_vector() {
        assert!(!UnitNormal::new(DVec3::ZERO).is_finite());
        assert!(UnitNormal::try_new(DVec3::ZERO).is_none());
        assert!(UnitNormal::try_new(DVec3::X).is_some());
    }

    #[test]
    fn test_scale_is_vector() {
        let v = UnitNormal::Z * 2.0;
        assert_eq!(v, DVec3::new(0.0, 0.0, 2.0));
    }
}
