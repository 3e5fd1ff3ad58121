use crate::{Point3, UnitNormal};

/// Surface point and unit normal at a ray-shape intersection.
///
/// Carries no coordinate-space tag: it is in object space when a shape
/// produces it and in world space once a primitive transforms it back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalGeo {
    pub position: Point3,
    pub normal: UnitNormal,
}

impl LocalGeo {
    pub fn new(position: Point3, normal: UnitNormal) -> Self {
        Self { position, normal }
    }
}
