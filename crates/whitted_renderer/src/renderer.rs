//! Render loops.
//!
//! Both loops trace one primary ray per pixel and commit the result to a
//! [`Film`]:
//! - `render` walks the sampler sequence on the calling thread
//! - `render_parallel` splits the frame into buckets on a rayon pool

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Color, Film, RenderError, RenderResult, Sample, Scene};

/// Parallel render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Worker threads; 0 lets rayon pick one per core
    pub threads: usize,
    /// Side length of a bucket in pixels
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threads: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Cooperative cancellation flag shared between a render and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every render holding this token to stop at its next sample.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Trace the primary ray for one sample.
pub fn render_sample(scene: &Scene, sample: &Sample) -> RenderResult<Color> {
    let ray = scene.camera().generate_ray(sample);
    scene.tracer().trace(&ray, 0)
}

/// Render the scene on the calling thread, one sample at a time.
pub fn render(scene: &Scene, cancel: &CancelToken) -> RenderResult<Film> {
    let sampler = scene.sampler();
    log::info!(
        "Rendering '{}' at {}x{} (sequential)",
        scene.name(),
        sampler.width(),
        sampler.height()
    );
    let start = Instant::now();

    let mut film = Film::new(sampler.width(), sampler.height());
    for sample in sampler.samples() {
        if cancel.is_cancelled() {
            log::info!("Render cancelled after {:.2?}", start.elapsed());
            return Err(RenderError::Cancelled);
        }
        let color = render_sample(scene, &sample)?;
        film.commit(&sample, color)?;
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(film)
}

/// Render the scene across a rayon thread pool.
///
/// The resulting film is identical to the one `render` produces.
pub fn render_parallel(
    scene: &Scene,
    settings: &RenderSettings,
    cancel: &CancelToken,
) -> RenderResult<Film> {
    let sampler = scene.sampler();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build()?;
    let buckets = generate_buckets(sampler.width(), sampler.height(), settings.bucket_size);

    log::info!(
        "Rendering '{}' at {}x{} ({} buckets on {} threads)",
        scene.name(),
        sampler.width(),
        sampler.height(),
        buckets.len(),
        pool.current_num_threads()
    );
    let start = Instant::now();

    let results: RenderResult<Vec<BucketResult>> = pool.install(|| {
        buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, scene, cancel))
            .collect()
    });
    let results = match results {
        Ok(results) => results,
        Err(RenderError::Cancelled) => {
            log::info!("Render cancelled after {:.2?}", start.elapsed());
            return Err(RenderError::Cancelled);
        }
        Err(err) => return Err(err),
    };

    let mut film = Film::new(sampler.width(), sampler.height());
    for result in &results {
        for (sample, color) in &result.samples {
            film.commit(sample, *color)?;
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use whitted_core::SceneDescription;

    fn small_reference() -> Scene {
        let desc = SceneDescription::reference().with_resolution(24, 16);
        Scene::from_description(&desc).unwrap()
    }

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_render_fills_film() {
        let scene = small_reference();
        let film = render(&scene, &CancelToken::new()).unwrap();
        assert_eq!((film.width(), film.height()), (24, 16));
        assert!(film.pixels().iter().any(|c| !c.is_black()));
    }

    #[test]
    fn test_render_sample_matches_film() {
        let scene = small_reference();
        let film = render(&scene, &CancelToken::new()).unwrap();
        let sample = scene.sampler().sample_for_pixel(7, 11);
        assert_eq!(film.get(7, 11), Some(render_sample(&scene, &sample).unwrap()));
    }

    #[test]
    fn test_cancelled_before_start() {
        let scene = small_reference();
        let token = CancelToken::new();
        token.cancel();

        assert!(matches!(render(&scene, &token), Err(RenderError::Cancelled)));
        let settings = RenderSettings::default();
        assert!(matches!(
            render_parallel(&scene, &settings, &token),
            Err(RenderError::Cancelled)
        ));
    }

    #[test]
    fn test_parallel_small_buckets() {
        let scene = small_reference();
        let settings = RenderSettings {
            threads: 2,
            bucket_size: 5,
        };
        let parallel = render_parallel(&scene, &settings, &CancelToken::new()).unwrap();
        let sequential = render(&scene, &CancelToken::new()).unwrap();
        assert_eq!(parallel.pixels(), sequential.pixels());
    }
}
