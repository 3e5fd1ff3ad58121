//! Recursive Whitted integrator.
//!
//! A ray is resolved against the scene, shaded with Blinn-Phong against
//! every unoccluded light, and followed along its mirror reflection until
//! the depth limit is passed.

use whitted_core::TracerDescription;
use whitted_math::{Interval, LocalGeo, Ray, UnitNormal, Vector3, RAY_EPSILON};

use crate::{Brdf, Color, Light, Primitive, RenderResult};

/// Deepest traced reflection level (inclusive). Primary rays are depth 0.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Blinn-Phong exponent.
pub const DEFAULT_SHININESS: f64 = 100.0;

/// Traces rays against an immutable scene and light list.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a dyn Primitive,
    lights: &'a [Box<dyn Light>],
    max_depth: u32,
    shininess: f64,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a dyn Primitive, lights: &'a [Box<dyn Light>]) -> Self {
        Self {
            scene,
            lights,
            max_depth: DEFAULT_MAX_DEPTH,
            shininess: DEFAULT_SHININESS,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    /// Apply tracer settings from a scene description.
    pub fn with_settings(self, settings: &TracerDescription) -> Self {
        self.with_max_depth(settings.max_depth)
            .with_shininess(settings.shininess)
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Color seen along `ray` at reflection level `depth`.
    ///
    /// Past the depth limit, and on a miss, the result is black. The only
    /// error is a BRDF request that the hit primitive cannot answer.
    pub fn trace(&self, ray: &Ray, depth: u32) -> RenderResult<Color> {
        if depth > self.max_depth {
            return Ok(Color::BLACK);
        }

        let Some(hit) = self.scene.intersect(ray, f64::MAX) else {
            return Ok(Color::BLACK);
        };

        let brdf = hit.primitive.brdf(&hit.local)?;
        let mut color = Color::BLACK;

        for light in self.lights {
            let (light_ray, light_color) = light.generate_light_ray(&hit.local);
            if !self.scene.intersect_p(&light_ray) {
                color += self.shading(&hit.local, &brdf, &light_ray, light_color, ray);
            }
        }

        if brdf.is_reflective() {
            let reflected = reflect_ray(ray, &hit.local);
            color += self.trace(&reflected, depth + 1)? * brdf.kr;
        }

        Ok(color)
    }

    /// Blinn-Phong contribution of one visible light.
    ///
    /// The ambient term rides along with every light, so it is counted once
    /// per visible light rather than once per surface point.
    fn shading(
        &self,
        local: &LocalGeo,
        brdf: &Brdf,
        light_ray: &Ray,
        light_color: Color,
        view_ray: &Ray,
    ) -> Color {
        let normal = local.normal;
        let to_light = light_ray.direction();
        let to_eye = (view_ray.origin() - local.position).normalize();
        let half = UnitNormal::new(to_light + to_eye);

        let diffuse = brdf.kd * light_color * normal.dot(to_light).max(0.0);
        let specular = brdf.ks * light_color * half.dot(normal.as_vec()).max(0.0).powf(self.shininess);

        brdf.ka + diffuse + specular
    }
}

/// Mirror reflection of `ray` about the surface normal at `local`.
///
/// Starts at the hit point and keeps the incoming ray's far bound.
pub fn reflect_ray(ray: &Ray, local: &LocalGeo) -> Ray {
    let d = ray.direction();
    let n: Vector3 = local.normal.as_vec();
    let reflected = d - n * (2.0 * d.dot(n));
    Ray::new(
        local.position,
        reflected,
        Interval::new(RAY_EPSILON, ray.t_max()),
    )
}
