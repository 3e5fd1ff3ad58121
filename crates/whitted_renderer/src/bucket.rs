//! Bucket-based tile rendering.
//!
//! Divides the pixel grid into tiles (buckets) that are traced
//! independently, so they can be handed to rayon workers.

use crate::renderer::render_sample;
use crate::{CancelToken, Color, RenderError, RenderResult, Sample, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Column of the bucket's top-left pixel
    pub x: u32,
    /// Row of the bucket's top-left pixel
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Pixel coordinates in row-major order within the bucket.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height)
            .flat_map(move |dy| (0..self.width).map(move |dx| (self.x + dx, self.y + dy)))
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted in spiral order from center.
///
/// The center of the frame is usually where the subject sits, so it is
/// finished first.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f64 + b.width as f64 / 2.0;
        let by = b.y as f64 + b.height as f64 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    // Stable sort keeps row order among equidistant buckets
    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Trace every pixel of a bucket.
///
/// The cancel token is checked before each sample.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, cancel: &CancelToken) -> RenderResult<BucketResult> {
    let sampler = scene.sampler();
    let mut samples = Vec::with_capacity(bucket.pixel_count() as usize);

    for (i, j) in bucket.pixels() {
        if cancel.is_cancelled() {
            return Err(RenderError::Cancelled);
        }
        let sample = sampler.sample_for_pixel(i, j);
        let color = render_sample(scene, &sample)?;
        samples.push((sample, color));
    }

    Ok(BucketResult::new(*bucket, samples))
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Samples and their colors, row-major within the bucket
    pub samples: Vec<(Sample, Color)>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, samples: Vec<(Sample, Color)>) -> Self {
        Self { bucket, samples }
    }
}
