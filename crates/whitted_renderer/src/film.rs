//! Per-pixel color storage and conversion to an 8-bit raster.

use std::path::Path;

use crate::{Color, RenderError, RenderResult, Sample};

/// One committed color per pixel, row-major.
#[derive(Debug, Clone)]
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, i: u32, j: u32) -> Option<usize> {
        (i < self.width && j < self.height).then(|| j as usize * self.width as usize + i as usize)
    }

    /// Store the color for the sample's pixel, replacing what was there.
    pub fn commit(&mut self, sample: &Sample, color: Color) -> RenderResult<()> {
        let index = self
            .index(sample.i, sample.j)
            .ok_or(RenderError::SampleOutOfBounds {
                i: sample.i,
                j: sample.j,
                width: self.width,
                height: self.height,
            })?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Get the color at column `i`, row `j`.
    pub fn get(&self, i: u32, j: u32) -> Option<Color> {
        self.index(i, j).map(|index| self.pixels[index])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Convert every pixel to 8-bit RGB.
    ///
    /// NaN channels become 0 and are reported once as a warning.
    pub fn finalize(&self) -> Raster {
        let nan_channels: usize = self
            .pixels
            .iter()
            .map(|c| c.channels().iter().filter(|v| v.is_nan()).count())
            .sum();
        if nan_channels > 0 {
            log::warn!("Film: replaced {} NaN channels with 0", nan_channels);
        }

        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&c| Rgb8::from(c)).collect(),
        }
    }
}

/// Map a `[0, 1]` channel onto `[0, 255]`, truncating. NaN maps to 0.
#[inline]
pub fn channel_to_u8(channel: f64) -> u8 {
    if channel.is_nan() {
        0
    } else {
        (255.0 * channel).clamp(0.0, 255.0) as u8
    }
}

/// Packed 8-bit RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb8 {
    fn from(color: Color) -> Self {
        Rgb8::new(
            channel_to_u8(color.r()),
            channel_to_u8(color.g()),
            channel_to_u8(color.b()),
        )
    }
}

/// Finalized image: `width * height` RGB pixels, row-major from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Pixel at column `i`, row `j`.
    pub fn get(&self, i: u32, j: u32) -> Option<Rgb8> {
        if i >= self.width || j >= self.height {
            return None;
        }
        Some(self.pixels[j as usize * self.width as usize + i as usize])
    }

    /// Packed `RGBRGB...` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Encode as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;
        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
