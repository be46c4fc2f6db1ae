//! Pixel buffers handed to the pipeline by image and video producers

use crate::error::{Error, Result};

/// An RGB color; alpha is dropped wherever a fill color is sampled
pub type Rgb = [u8; 3];

/// Bytes per RGBA8 pixel
pub const CHANNELS: usize = 4;

/// Immutable view of a `width x height` RGBA8 pixel buffer.
///
/// The buffer is owned by the caller for the current frame; the pipeline
/// only borrows it for the duration of a single pass.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap a row-major RGBA8 slice
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidData(format!(
                "pixel buffer of {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// True when the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// RGBA channels of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// RGB channels of the pixel at `(x, y)`, alpha ignored
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Average brightness `(R+G+B)/3` on a 0-255 scale
    #[inline]
    pub fn brightness(&self, x: u32, y: u32) -> f32 {
        let [r, g, b] = self.rgb(x, y);
        (r as f32 + g as f32 + b as f32) / 3.0
    }
}

/// An owned RGBA8 frame, as produced by a video source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame, validating that `data` matches the dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        PixelBuffer::new(width, height, &data)?;
        Ok(Self { width, height, data })
    }

    /// A frame filled with a single opaque color
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
        Self { width, height, data }
    }

    /// Set one pixel to an opaque color
    pub fn set_rgb(&mut self, x: u32, y: u32, color: Rgb) {
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&[color[0], color[1], color[2], 255]);
    }

    /// Borrow the frame as a pixel buffer for one pipeline pass
    pub fn view(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}
