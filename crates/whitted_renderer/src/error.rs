use thiserror::Error;
use whitted_core::SceneError;

/// Errors that can abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A call that no well-formed scene can make, e.g. asking an aggregate for a BRDF.
    #[error("Invalid call: {0}")]
    InvalidCall(&'static str),

    #[error("Sample ({i}, {j}) lies outside the {width}x{height} film")]
    SampleOutOfBounds {
        i: u32,
        j: u32,
        width: u32,
        height: u32,
    },

    #[error("Render cancelled")]
    Cancelled,

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
