//! In-memory pixel surface
//!
//! A width × height grid of packed 32-bit ARGB pixels
//! (`a << 24 | r << 16 | g << 8 | b`) with straight (non-premultiplied)
//! alpha and gamma-encoded sRGB color channels.

use rayon::prelude::*;

use crate::color::{Color, Srgb};
use crate::{Error, Result};

/// Pixel layout of a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 32-bit ARGB, one native-endian `u32` per pixel
    #[default]
    Argb32,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Argb32 => 4,
        }
    }
}

/// Pack 8-bit channels into an ARGB32 pixel
#[inline]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split an ARGB32 pixel into `[a, r, g, b]`
#[inline]
pub const fn unpack_argb(px: u32) -> [u8; 4] {
    [(px >> 24) as u8, (px >> 16) as u8, (px >> 8) as u8, px as u8]
}

/// A decoded image ready for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u32>,
}

impl Surface {
    /// Create a fully transparent black surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Argb32,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap existing ARGB32 pixels, row-major with no padding
    pub fn from_argb32(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format: PixelFormat::Argb32,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height) in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Raw pixel bytes in native byte order, the layout cairo-style
    /// ARGB32 consumers expect
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Write a pixel; returns false when (x, y) is outside the surface
    pub fn set_pixel(&mut self, x: u32, y: u32, px: u32) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = px;
                true
            }
            None => false,
        }
    }

    /// The color channels of a pixel, alpha ignored
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel(x, y).map(|px| {
            let [_, r, g, b] = unpack_argb(px);
            Color::from(Srgb::from_u8(r, g, b))
        })
    }

    /// Quantize a color to 8 bits and store it with the given alpha
    pub fn set_color(&mut self, x: u32, y: u32, color: Color, alpha: u8) -> bool {
        let [r, g, b] = color.as_rgb().to_u8();
        self.set_pixel(x, y, pack_argb(alpha, r, g, b))
    }

    /// Parallel iterator over mutable pixel rows
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [u32]> {
        // A zero-width surface has no pixels; chunk size must stay non-zero
        let width = (self.width as usize).max(1);
        self.data.par_chunks_mut(width)
    }
}
