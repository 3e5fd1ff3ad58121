//! One screen-plane sample per pixel.

use whitted_core::SceneDescription;

/// Pixel coordinates and the matching point on the view plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Column, 0 at the left
    pub i: u32,
    /// Row, 0 at the top
    pub j: u32,
    pub x: f64,
    pub y: f64,
}

/// Maps a `width x height` pixel grid onto a view plane centred at the origin.
///
/// Samples run column by column: `i` is the outer index, `j` the inner one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    width: u32,
    height: u32,
    view_width: f64,
    view_height: f64,
}

impl Sampler {
    pub fn new(width: u32, height: u32, view_width: f64, view_height: f64) -> Self {
        Self {
            width,
            height,
            view_width,
            view_height,
        }
    }

    pub fn from_scene(scene: &SceneDescription) -> Self {
        Self::new(
            scene.resolution.width,
            scene.resolution.height,
            scene.camera.view_width,
            scene.camera.view_height,
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample for pixel `(i, j)`. Row 0 maps to the top of the plane.
    pub fn sample_for_pixel(&self, i: u32, j: u32) -> Sample {
        let x = self.view_width * i as f64 / self.width as f64 - self.view_width / 2.0;
        let y = self.view_height / 2.0 - self.view_height * j as f64 / self.height as f64;
        Sample { i, j, x, y }
    }

    /// The `k`-th sample of the sequence, if any.
    pub fn sample_at(&self, k: usize) -> Option<Sample> {
        if k >= self.len() {
            return None;
        }
        let height = self.height as usize;
        Some(self.sample_for_pixel((k / height) as u32, (k % height) as u32))
    }

    /// A fresh pass over every sample. Each call restarts from the first pixel.
    pub fn samples(&self) -> SampleIter {
        SampleIter {
            sampler: *self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Sampler {
    type Item = Sample;
    type IntoIter = SampleIter;

    fn into_iter(self) -> SampleIter {
        self.samples()
    }
}

/// Lazy iterator over a sampler's grid.
#[derive(Debug, Clone)]
pub struct SampleIter {
    sampler: Sampler,
    next: usize,
}

impl Iterator for SampleIter {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let sample = self.sampler.sample_at(self.next)?;
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sampler.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_sampler() -> Sampler {
        Sampler::new(250, 250, 4.0, 4.0)
    }

    #[test]
    fn test_sample_count() {
        let sampler = Sampler::new(3, 2, 4.0, 4.0);
        assert_eq!(sampler.len(), 6);
        assert_eq!(sampler.samples().len(), 6);
        assert_eq!(sampler.samples().count(), 6);
    }

    #[test]
    fn test_column_major_order() {
        let sampler = Sampler::new(3, 2, 4.0, 4.0);
        let pixels: Vec<(u32, u32)> = sampler.samples().map(|s| (s.i, s.j)).collect();
        assert_eq!(pixels, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_screen_mapping() {
        let sampler = default_sampler();

        let top_left = sampler.sample_for_pixel(0, 0);
        assert_eq!((top_left.x, top_left.y), (-2.0, 2.0));

        let center = sampler.sample_for_pixel(125, 125);
        assert!(center.x.abs() < 1e-12);
        assert!(center.y.abs() < 1e-12);

        // Rows grow downwards
        let lower = sampler.sample_for_pixel(0, 200);
        assert!(lower.y < top_left.y);
        assert!((lower.y + 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_restartable() {
        let sampler = Sampler::new(4, 4, 4.0, 4.0);
        let first: Vec<Sample> = sampler.samples().collect();
        let second: Vec<Sample> = (&sampler).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_at() {
        let sampler = Sampler::new(3, 2, 4.0, 4.0);
        let third = sampler.sample_at(3).unwrap();
        assert_eq!((third.i, third.j), (1, 1));
        assert!(sampler.sample_at(6).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let sampler = Sampler::new(0, 5, 4.0, 4.0);
        assert!(sampler.is_empty());
        assert_eq!(sampler.samples().next(), None);
    }
}
