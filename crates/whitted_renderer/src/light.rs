//! Light sources.

use whitted_core::LightDescription;
use whitted_math::{Interval, LocalGeo, Point3, Ray, Vector3, RAY_EPSILON};

use crate::Color;

/// A light that can be sampled from a surface point.
pub trait Light: Send + Sync {
    /// Shadow ray from the surface point toward the light, and the light's color.
    ///
    /// The ray's range ends at the light, so occluders beyond it are ignored.
    fn generate_light_ray(&self, local: &LocalGeo) -> (Ray, Color);
}

/// Point light with no falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    position: Point3,
    color: Color,
}

impl PointLight {
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Point3 {
        self.position
    }
}

impl Light for PointLight {
    fn generate_light_ray(&self, local: &LocalGeo) -> (Ray, Color) {
        (Ray::between(local.position, self.position), self.color)
    }
}

/// Light arriving from infinitely far away along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vector3,
    color: Color,
}

impl DirectionalLight {
    /// `direction` is the way the light travels, not the way to the light.
    pub fn new(direction: Vector3, color: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
        }
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }
}

impl Light for DirectionalLight {
    fn generate_light_ray(&self, local: &LocalGeo) -> (Ray, Color) {
        let ray = Ray::new(
            local.position,
            -self.direction,
            Interval::new(RAY_EPSILON, f64::INFINITY),
        );
        (ray, self.color)
    }
}

impl From<&LightDescription> for Box<dyn Light> {
    fn from(desc: &LightDescription) -> Self {
        match *desc {
            LightDescription::Point { position, color } => {
                Box::new(PointLight::new(Point3::from_vec(position), color.into()))
            }
            LightDescription::Directional { direction, color } => {
                Box::new(DirectionalLight::new(direction, color.into()))
            }
        }
    }
}
