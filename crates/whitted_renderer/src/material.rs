//! Shading coefficients and the materials that hand them out.

use whitted_core::BrdfDescription;
use whitted_math::LocalGeo;

use crate::Color;

/// Coefficients for local shading and mirror reflection.
///
/// Not a full reflectance distribution: `kd`, `ks` and `ka` weight the
/// diffuse, specular and ambient terms, `kr` weights the reflected ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brdf {
    pub kd: Color,
    pub ks: Color,
    pub ka: Color,
    pub kr: f64,
}

impl Brdf {
    pub fn new(kd: Color, ks: Color, ka: Color, kr: f64) -> Self {
        Self { kd, ks, ka, kr }
    }

    pub fn is_reflective(&self) -> bool {
        self.kr > 0.0
    }
}

impl From<&BrdfDescription> for Brdf {
    fn from(desc: &BrdfDescription) -> Self {
        Brdf::new(desc.kd.into(), desc.ks.into(), desc.ka.into(), desc.kr)
    }
}

/// Maps a surface point to its shading coefficients.
pub trait Material: Send + Sync {
    /// Get the BRDF at the given (world-space) surface point.
    fn brdf(&self, local: &LocalGeo) -> Brdf;
}

/// The same BRDF everywhere on the surface.
#[derive(Debug, Clone, Copy)]
pub struct ConstantMaterial {
    brdf: Brdf,
}

impl ConstantMaterial {
    pub fn new(brdf: Brdf) -> Self {
        Self { brdf }
    }
}

impl Material for ConstantMaterial {
    fn brdf(&self, _local: &LocalGeo) -> Brdf {
        self.brdf
    }
}
