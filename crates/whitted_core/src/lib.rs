//! Whitted Core - declarative scene configuration for the ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `PrimitiveDescription`,
//!   `ShapeDescription`, `LightDescription`, camera and tracer settings
//! - **Loading**: JSON scene files via serde
//! - **Validation**: the renderer assumes a validated description
//! - **Reference scene**: the mirrored-spheres-over-checkerboard scene as data
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitives.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod reference;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{
    BrdfDescription, CameraDescription, LightDescription, PrimitiveDescription, Resolution,
    SceneDescription, ShapeDescription, TracerDescription, TransformDescription,
};
