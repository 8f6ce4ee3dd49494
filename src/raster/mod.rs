//! In-memory raster buffers.
//!
//! [`RasterImage`] is the single pixel container used by every compositing
//! and scoring operation: row-major 8-bit samples with an explicit channel
//! count of 3 (RGB) or 4 (RGBA). Images loaded from disk are always RGBA.

pub mod codec;

pub use codec::{load, save};

use crate::error::StampError;
use image::{Rgba, RgbaImage};

/// Opaque alpha value synthesized for sources without an alpha channel.
pub const OPAQUE: u8 = 255;

/// Owned pixel buffer.
///
/// Invariant: `data.len() == width * height * channels`.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}

fn check_channels(channels: u8) -> Result<(), StampError> {
    if channels == 3 || channels == 4 {
        Ok(())
    } else {
        Err(StampError::invalid_param(
            "channels",
            format!("expected 3 or 4, got {}", channels),
        ))
    }
}

impl RasterImage {
    /// Create a zero-filled (transparent black for RGBA) image.
    pub fn new(width: u32, height: u32, channels: u8) -> Result<Self, StampError> {
        check_channels(channels)?;
        let len = width as usize * height as usize * channels as usize;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Create an RGBA image where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            channels: 4,
            data,
        }
    }

    /// Wrap raw row-major samples, validating the buffer length.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<Self, StampError> {
        check_channels(channels)?;
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(StampError::invalid_param(
                "data",
                format!(
                    "buffer holds {} bytes, {}x{}x{} needs {}",
                    data.len(),
                    width,
                    height,
                    channels,
                    expected
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Take ownership of an `image` crate RGBA buffer.
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            channels: 4,
            data: image.into_raw(),
        }
    }

    /// Convert to an `image` crate RGBA buffer, synthesizing opaque alpha
    /// for RGB images.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b] = self.rgb(x, y);
            Rgba([r, g, b, self.alpha(x, y)])
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Samples of the pixel at (x, y). Panics when out of bounds, like slice
    /// indexing.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels as usize]
    }

    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = self.offset(x, y);
        let channels = self.channels as usize;
        &mut self.data[start..start + channels]
    }

    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let px = self.pixel(x, y);
        [px[0], px[1], px[2]]
    }

    /// Alpha of the pixel at (x, y); RGB images are fully opaque.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if self.channels == 4 {
            self.pixel(x, y)[3]
        } else {
            OPAQUE
        }
    }

    /// Row-major iterator over the color samples of every pixel.
    pub fn rgb_pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(self.channels as usize)
            .map(|px| [px[0], px[1], px[2]])
    }
}
