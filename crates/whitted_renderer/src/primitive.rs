//! Primitive trait and the two primitives: a transformed shape with a
//! material, and an aggregate of other primitives.

use whitted_math::{LocalGeo, Ray, Transformation};

use crate::{Brdf, Material, RenderError, RenderResult, Shape};

/// Record of a ray-primitive intersection.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// World-space distance from the ray origin
    pub t_hit: f64,
    /// World-space hit point and normal
    pub local: LocalGeo,
    /// The geometric primitive that was hit (never an aggregate)
    pub primitive: &'a dyn Primitive,
}

/// Trait for objects that can be hit by rays and shaded.
pub trait Primitive: Send + Sync {
    /// Nearest world-space hit strictly closer than `t_bound`.
    fn intersect(&self, ray: &Ray, t_bound: f64) -> Option<Intersection<'_>>;

    /// Whether the ray hits anything within its range. Any hit will do.
    fn intersect_p(&self, ray: &Ray) -> bool;

    /// Get the BRDF at a world-space surface point.
    fn brdf(&self, local: &LocalGeo) -> RenderResult<Brdf>;
}

/// A shape placed in the world by an affine transform, with a material.
pub struct GeometricPrimitive {
    shape: Box<dyn Shape>,
    material: Box<dyn Material>,
    object_to_world: Transformation,
    world_to_object: Transformation,
}

impl GeometricPrimitive {
    /// Create an untransformed primitive.
    pub fn new(shape: Box<dyn Shape>, material: Box<dyn Material>) -> Self {
        Self {
            shape,
            material,
            object_to_world: Transformation::IDENTITY,
            world_to_object: Transformation::IDENTITY,
        }
    }

    /// Place the shape with an object-to-world transform.
    pub fn with_transform(mut self, object_to_world: Transformation) -> Self {
        self.world_to_object = object_to_world.inverse();
        self.object_to_world = object_to_world;
        self
    }
}

impl Primitive for GeometricPrimitive {
    fn intersect(&self, ray: &Ray, t_bound: f64) -> Option<Intersection<'_>> {
        let object_ray = &self.world_to_object * *ray;
        let hit = self.shape.intersect(&object_ray)?;

        let local = &self.object_to_world * hit.local;
        // Object-space distances are not comparable across transformed primitives
        let t_hit = if self.object_to_world.is_identity() {
            hit.t_hit
        } else {
            local.position.distance(ray.origin())
        };

        (t_hit < t_bound).then_some(Intersection {
            t_hit,
            local,
            primitive: self,
        })
    }

    fn intersect_p(&self, ray: &Ray) -> bool {
        let object_ray = &self.world_to_object * *ray;
        self.shape.intersect_p(&object_ray)
    }

    fn brdf(&self, local: &LocalGeo) -> RenderResult<Brdf> {
        Ok(self.material.brdf(local))
    }
}

/// A list of primitives scanned linearly.
///
/// Children are semantically unordered; for equal distances the first
/// child in iteration order wins.
#[derive(Default)]
pub struct AggregatePrimitive {
    children: Vec<Box<dyn Primitive>>,
}

impl AggregatePrimitive {
    pub fn new(children: Vec<Box<dyn Primitive>>) -> Self {
        Self { children }
    }

    /// Add a primitive to the list.
    pub fn add(&mut self, child: Box<dyn Primitive>) {
        self.children.push(child);
    }

    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Primitive for AggregatePrimitive {
    fn intersect(&self, ray: &Ray, t_bound: f64) -> Option<Intersection<'_>> {
        self.children.iter().fold(None, |best, child| {
            let bound = best.as_ref().map_or(t_bound, |hit: &Intersection<'_>| hit.t_hit);
            child.intersect(ray, bound).or(best)
        })
    }

    fn intersect_p(&self, ray: &Ray) -> bool {
        self.children.iter().any(|child| child.intersect_p(ray))
    }

    fn brdf(&self, _local: &LocalGeo) -> RenderResult<Brdf> {
        Err(RenderError::InvalidCall(
            "brdf requested from an aggregate primitive; intersections always reference a geometric primitive",
        ))
    }
}
