//! RGB color with an upper clamp on every construction.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use whitted_math::DVec3;

/// Three intensity channels, each capped at 1 whenever a color is built.
///
/// Every operator goes through [`Color::new`], so sums of many light
/// contributions saturate instead of growing without bound. Only the upper
/// end is clamped: negative channels and NaN pass through untouched and are
/// dealt with when the film is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

#[inline]
fn cap(channel: f64) -> f64 {
    if channel > 1.0 {
        1.0
    } else {
        channel
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: cap(r),
            g: cap(g),
            b: cap(b),
        }
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn has_nan(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl From<DVec3> for Color {
    fn from(v: DVec3) -> Self {
        Color::new(v.x, v.y, v.z)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Component-wise product.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scalar: f64) -> Color {
        Color::new(self.r * scalar, self.g * scalar, self.b * scalar)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, scalar: f64) -> Color {
        Color::new(self.r / scalar, self.g / scalar, self.b / scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_high_but_not_low() {
        let c = Color::new(1.5, 0.2, -0.1);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.2);
        assert_eq!(c.b(), -0.1);
    }

    #[test]
    fn test_addition_saturates() {
        let mut c = Color::new(0.6, 0.6, 0.6);
        c += Color::new(0.6, 0.1, 0.0);
        assert_eq!(c.r(), 1.0);
        assert!((c.g() - 0.7).abs() < 1e-12);
        assert!((c.b() - 0.6).abs() < 1e-12);

        // Saturation loses information: subtracting back does not restore
        let back = c - Color::new(0.6, 0.1, 0.0);
        assert!((back.r() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_products() {
        let kd = Color::new(1.0, 1.0, 0.25);
        let light = Color::new(0.6, 0.6, 0.6);

        let lit = kd * light;
        assert!((lit.r() - 0.6).abs() < 1e-12);
        assert!((lit.b() - 0.15).abs() < 1e-12);

        let scaled = light * 2.0;
        assert_eq!(scaled, Color::WHITE);

        let halved = light / 2.0;
        assert!((halved.g() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_nan_passes_through() {
        let c = Color::new(f64::NAN, 0.5, 2.0);
        assert!(c.has_nan());
        assert!(c.r().is_nan());
        assert_eq!(c.b(), 1.0);
        assert!((c + Color::BLACK).has_nan());
    }

    #[test]
    fn test_from_vec() {
        let c = Color::from(DVec3::new(0.9, 3.0, 0.1));
        assert_eq!(c.channels(), [0.9, 1.0, 0.1]);
        assert!(Color::BLACK.is_black());
        assert!(!c.is_black());
    }
}
