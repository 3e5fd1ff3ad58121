//! Runtime scene built from a validated description.

use whitted_core::{PrimitiveDescription, SceneDescription, ShapeDescription, TracerDescription};
use whitted_math::{Point3, Transformation};

use crate::{
    AggregatePrimitive, Brdf, Camera, ConstantMaterial, GeometricPrimitive, Light, Primitive,
    RenderResult, Sampler, Shape, Sphere, Square, Tracer, Triangle,
};

/// Everything a render needs: geometry, lights, camera and pixel grid.
///
/// Immutable once built, so it can be shared across render threads.
pub struct Scene {
    name: String,
    aggregate: AggregatePrimitive,
    lights: Vec<Box<dyn Light>>,
    camera: Camera,
    sampler: Sampler,
    settings: TracerDescription,
}

impl Scene {
    /// Validate a description and build the scene from it.
    pub fn from_description(desc: &SceneDescription) -> RenderResult<Self> {
        desc.validate()?;

        let aggregate = AggregatePrimitive::new(desc.primitives.iter().map(build_primitive).collect());
        let lights: Vec<Box<dyn Light>> = desc.lights.iter().map(Into::into).collect();

        log::debug!(
            "Built scene '{}': {} primitives, {} lights",
            desc.name,
            aggregate.len(),
            lights.len()
        );

        Ok(Self {
            name: desc.name.clone(),
            aggregate,
            lights,
            camera: Camera::from(&desc.camera),
            sampler: Sampler::from_scene(desc),
            settings: desc.tracer.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aggregate(&self) -> &AggregatePrimitive {
        &self.aggregate
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// A tracer over this scene's geometry and lights.
    pub fn tracer(&self) -> Tracer<'_> {
        Tracer::new(&self.aggregate as &dyn Primitive, &self.lights).with_settings(&self.settings)
    }
}

fn build_primitive(desc: &PrimitiveDescription) -> Box<dyn Primitive> {
    let material = Box::new(ConstantMaterial::new(Brdf::from(&desc.brdf)));
    let primitive = GeometricPrimitive::new(build_shape(&desc.shape), material);

    if desc.transform.is_identity() {
        Box::new(primitive)
    } else {
        Box::new(primitive.with_transform(Transformation::new(desc.transform.to_matrix())))
    }
}

fn build_shape(desc: &ShapeDescription) -> Box<dyn Shape> {
    match *desc {
        ShapeDescription::Sphere { center, radius } => {
            Box::new(Sphere::new(Point3::from_vec(center), radius))
        }
        ShapeDescription::Triangle { a, b, c } => Box::new(Triangle::new(
            Point3::from_vec(a),
            Point3::from_vec(b),
            Point3::from_vec(c),
        )),
        ShapeDescription::Square { center, normal, size } => {
            Box::new(Square::new(Point3::from_vec(center), normal, size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, RenderError};
    use whitted_core::{
        BrdfDescription, LightDescription, PrimitiveDescription, SceneError, TransformDescription,
    };
    use whitted_math::{DVec3, Ray};

    fn single_sphere() -> SceneDescription {
        let mut desc = SceneDescription::new("single");
        desc.add_light(LightDescription::point(DVec3::new(0.0, 0.0, 10.0), DVec3::ONE));
        desc.add_primitive(PrimitiveDescription::new(
            ShapeDescription::Sphere {
                center: DVec3::ZERO,
                radius: 1.0,
            },
            BrdfDescription::new(DVec3::splat(0.5), DVec3::ZERO, DVec3::ZERO, 0.0),
        ));
        desc
    }

    #[test]
    fn test_build_from_description() {
        let scene = Scene::from_description(&single_sphere()).unwrap();
        assert_eq!(scene.name(), "single");
        assert_eq!(scene.aggregate().len(), 1);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.sampler().len(), 250 * 250);
        assert_eq!(scene.tracer().max_depth(), 2);
    }

    #[test]
    fn test_tracer_sees_built_geometry() {
        let scene = Scene::from_description(&single_sphere()).unwrap();
        let ray = Ray::between_with_max(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, 50.0);
        let color = scene.tracer().trace(&ray, 0).unwrap();
        assert!((color.r() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_transformed_primitive() {
        let mut desc = single_sphere();
        desc.primitives[0] = desc.primitives[0]
            .clone()
            .with_transform(TransformDescription::from_translation(DVec3::new(3.0, 0.0, 0.0)));
        let scene = Scene::from_description(&desc).unwrap();

        let center = Ray::between_with_max(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, 50.0);
        assert_eq!(scene.tracer().trace(&center, 0).unwrap(), Color::BLACK);

        let shifted = Ray::between_with_max(Point3::new(3.0, 0.0, 5.0), Point3::new(3.0, 0.0, 0.0), 50.0);
        let hit = scene.aggregate().intersect(&shifted, f64::MAX).unwrap();
        assert!((hit.t_hit - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_description_rejected() {
        let desc = single_sphere().with_resolution(0, 10);
        assert!(matches!(
            Scene::from_description(&desc),
            Err(RenderError::Scene(SceneError::InvalidResolution { width: 0, height: 10 }))
        ));
    }
}
