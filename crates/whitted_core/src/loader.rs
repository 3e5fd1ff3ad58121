//! Scene file loading.
//!
//! Scenes are JSON documents mirroring [`SceneDescription`]. Loading
//! always validates, so a returned scene is ready for the renderer.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid tracer settings: {0}")]
    InvalidTracer(String),

    #[error("Light {index} is invalid: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("Primitive {index} is invalid: {reason}")]
    InvalidPrimitive { index: usize, reason: String },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
///
/// The scene name defaults to the file stem when the document has none.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&contents)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} primitives, {} lights",
        scene.name,
        path.display(),
        scene.primitives.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse and validate a JSON scene document.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}
