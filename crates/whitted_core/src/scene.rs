//! Scene description types.
//!
//! A scene is plain data: shapes with transforms and shading coefficients,
//! lights, a pinhole camera and an output resolution. The renderer builds
//! its runtime objects from this description after [`SceneDescription::validate`]
//! has accepted it.

use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// Smallest accepted length for normals, directions and triangle edges' cross product.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Output raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 250,
            height: 250,
        }
    }
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pinhole camera looking down -Z through a view plane at z = 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    /// Eye position
    pub eye: DVec3,

    /// Real-world width of the view plane
    pub view_width: f64,

    /// Real-world height of the view plane
    pub view_height: f64,

    /// Far clip for primary rays
    pub max_distance: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 5.0),
            view_width: 4.0,
            view_height: 4.0,
            max_distance: 50.0,
        }
    }
}

/// Recursion and shading settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerDescription {
    /// Deepest reflection level still traced (inclusive); primary rays are depth 0
    pub max_depth: u32,

    /// Blinn-Phong exponent
    pub shininess: f64,
}

impl Default for TracerDescription {
    fn default() -> Self {
        Self {
            max_depth: 2,
            shininess: 100.0,
        }
    }
}

/// A light source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightDescription {
    /// Point light; shadow rays stop at its position.
    Point { position: DVec3, color: DVec3 },

    /// Light at infinity shining along `direction`.
    Directional { direction: DVec3, color: DVec3 },
}

impl LightDescription {
    pub fn point(position: DVec3, color: DVec3) -> Self {
        LightDescription::Point { position, color }
    }

    pub fn directional(direction: DVec3, color: DVec3) -> Self {
        LightDescription::Directional { direction, color }
    }

    pub fn color(&self) -> DVec3 {
        match self {
            LightDescription::Point { color, .. } | LightDescription::Directional { color, .. } => {
                *color
            }
        }
    }
}

/// Geometry in the primitive's object space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere { center: DVec3, radius: f64 },
    Triangle { a: DVec3, b: DVec3, c: DVec3 },
    /// Square patch; `size` is the side length.
    Square { center: DVec3, normal: DVec3, size: f64 },
}

impl ShapeDescription {
    /// Why this shape cannot be rendered, if it cannot.
    fn defect(&self) -> Option<String> {
        match self {
            ShapeDescription::Sphere { center, radius } => {
                if !center.is_finite() {
                    Some("sphere center is not finite".to_string())
                } else if !(*radius > 0.0 && radius.is_finite()) {
                    Some(format!("sphere radius must be positive, got {}", radius))
                } else {
                    None
                }
            }
            ShapeDescription::Triangle { a, b, c } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                    Some("triangle vertex is not finite".to_string())
                } else if (*c - *a).cross(*b - *a).length() <= DEGENERATE_EPSILON {
                    Some("triangle is degenerate (zero area)".to_string())
                } else {
                    None
                }
            }
            ShapeDescription::Square {
                center,
                normal,
                size,
            } => {
                if !center.is_finite() {
                    Some("square center is not finite".to_string())
                } else if !normal.is_finite() || normal.length() <= DEGENERATE_EPSILON {
                    Some("square normal must be non-zero".to_string())
                } else if !(*size > 0.0 && size.is_finite()) {
                    Some(format!("square size must be positive, got {}", size))
                } else {
                    None
                }
            }
        }
    }
}

/// Object-to-world placement: scale, then rotate, then translate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformDescription {
    /// Translation
    pub translation: DVec3,

    /// XYZ Euler rotation in degrees
    pub rotation_degrees: DVec3,

    /// Per-axis scale
    pub scale: DVec3,
}

impl Default for TransformDescription {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation_degrees: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl TransformDescription {
    /// Create a new transform with only translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Convert to a 4x4 object-to-world matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> DMat4 {
        let r = self.rotation_degrees;
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        DMat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Shading coefficients: diffuse, specular, ambient colors and mirror weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrdfDescription {
    pub kd: DVec3,
    pub ks: DVec3,
    pub ka: DVec3,
    #[serde(default)]
    pub kr: f64,
}

impl BrdfDescription {
    pub fn new(kd: DVec3, ks: DVec3, ka: DVec3, kr: f64) -> Self {
        Self { kd, ks, ka, kr }
    }
}

/// One renderable object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDescription {
    /// Optional label for logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub shape: ShapeDescription,

    #[serde(default, skip_serializing_if = "TransformDescription::is_identity")]
    pub transform: TransformDescription,

    pub brdf: BrdfDescription,
}

impl PrimitiveDescription {
    /// Create an untransformed primitive.
    pub fn new(shape: ShapeDescription, brdf: BrdfDescription) -> Self {
        Self {
            name: None,
            shape,
            transform: TransformDescription::default(),
            brdf,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: TransformDescription) -> Self {
        self.transform = transform;
        self
    }
}

/// A complete scene: what to render and how to look at it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub resolution: Resolution,

    #[serde(default)]
    pub camera: CameraDescription,

    #[serde(default)]
    pub tracer: TracerDescription,

    #[serde(default)]
    pub lights: Vec<LightDescription>,

    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,
}

impl SceneDescription {
    /// Create an empty scene with default camera, tracer and resolution.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = Resolution::new(width, height);
        self
    }

    /// Add a primitive to the scene and return its index.
    pub fn add_primitive(&mut self, primitive: PrimitiveDescription) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Add a light to the scene and return its index.
    pub fn add_light(&mut self, light: LightDescription) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Check every value the renderer relies on.
    ///
    /// Suspicious but renderable values (mirror weight above one, a light
    /// sitting on the eye) are logged rather than rejected.
    pub fn validate(&self) -> SceneResult<()> {
        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }

        let camera = &self.camera;
        if !camera.eye.is_finite() {
            return Err(SceneError::InvalidCamera("eye position is not finite".to_string()));
        }
        if !(camera.view_width > 0.0 && camera.view_height > 0.0) {
            return Err(SceneError::InvalidCamera(format!(
                "view plane must be positive, got {}x{}",
                camera.view_width, camera.view_height
            )));
        }
        if !(camera.max_distance > 0.0) {
            return Err(SceneError::InvalidCamera(format!(
                "max distance must be positive, got {}",
                camera.max_distance
            )));
        }

        if !(self.tracer.shininess >= 0.0 && self.tracer.shininess.is_finite()) {
            return Err(SceneError::InvalidTracer(format!(
                "shininess must be a non-negative number, got {}",
                self.tracer.shininess
            )));
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.color().is_finite() {
                return Err(SceneError::InvalidLight {
                    index,
                    reason: "color is not finite".to_string(),
                });
            }
            match light {
                LightDescription::Point { position, .. } => {
                    if !position.is_finite() {
                        return Err(SceneError::InvalidLight {
                            index,
                            reason: "position is not finite".to_string(),
                        });
                    }
                    if *position == camera.eye {
                        log::warn!("Light {} sits on the camera eye", index);
                    }
                }
                LightDescription::Directional { direction, .. } => {
                    if !direction.is_finite() || direction.length() <= DEGENERATE_EPSILON {
                        return Err(SceneError::InvalidLight {
                            index,
                            reason: "direction must be non-zero".to_string(),
                        });
                    }
                }
            }
        }

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(reason) = primitive.shape.defect() {
                return Err(SceneError::InvalidPrimitive { index, reason });
            }

            let transform = &primitive.transform;
            if !transform.translation.is_finite() || !transform.rotation_degrees.is_finite() {
                return Err(SceneError::InvalidPrimitive {
                    index,
                    reason: "transform translation or rotation is not finite".to_string(),
                });
            }

            let scale = transform.scale;
            if scale.x == 0.0 || scale.y == 0.0 || scale.z == 0.0 || !scale.is_finite() {
                return Err(SceneError::InvalidPrimitive {
                    index,
                    reason: format!("transform scale {:?} is not invertible", scale),
                });
            }

            if primitive.brdf.kr > 1.0 {
                log::warn!(
                    "Primitive {} has mirror weight {} above 1",
                    index,
                    primitive.brdf.kr
                );
            }
        }

        Ok(())
    }
}
