//! Pinhole camera for primary ray generation.

use whitted_core::CameraDescription;
use whitted_math::{Point3, Ray};

use crate::Sample;

/// Fixed pinhole at `eye` looking through the z = 0 image plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    eye: Point3,
    max_distance: f64,
}

impl Camera {
    pub fn new(eye: Point3, max_distance: f64) -> Self {
        Self { eye, max_distance }
    }

    pub fn eye(&self) -> Point3 {
        self.eye
    }

    /// Ray from the eye through `(x, y, 0)`.
    pub fn generate_ray(&self, sample: &Sample) -> Ray {
        let target = Point3::new(sample.x, sample.y, 0.0);
        Ray::between_with_max(self.eye, target, self.max_distance)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::from(&CameraDescription::default())
    }
}

impl From<&CameraDescription> for Camera {
    fn from(desc: &CameraDescription) -> Self {
        Camera::new(Point3::from_vec(desc.eye), desc.max_distance)
    }
}
