//! Image loading
//!
//! [`Image`] wraps a decode attempt: it never fails to construct, and a
//! failed load is reported through [`Image::success`] and [`Image::error`]
//! with an empty surface left in place.

pub mod png;
pub mod surface;

use std::path::Path;

use log::warn;

pub use surface::{PixelFormat, Surface, pack_argb, unpack_argb};

/// Supported encoded image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.eq_ignore_ascii_case("png").then_some(ImageFormat::Png)
    }

    fn label(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

/// A loaded (or failed) image
#[derive(Debug, Clone)]
pub struct Image {
    format: ImageFormat,
    surface: Surface,
    has_alpha: bool,
    error: Option<String>,
}

impl Image {
    /// Load an image from disk
    ///
    /// Every path is treated as PNG, the only supported format.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::from_result(ImageFormat::Png, png::decode_file(path))
    }

    /// Load an image from an in-memory encoded buffer
    pub fn from_bytes(data: &[u8], format: ImageFormat) -> Self {
        let decoded = match format {
            ImageFormat::Png => png::decode_bytes(data),
        };
        Self::from_result(format, decoded)
    }

    fn from_result(format: ImageFormat, decoded: crate::Result<png::DecodedPng>) -> Self {
        match decoded {
            Ok(decoded) => Self {
                format,
                surface: decoded.surface,
                has_alpha: decoded.has_alpha,
                error: None,
            },
            Err(err) => {
                let message = format!("loading {}: {}", format.label(), err);
                warn!("{message}");
                Self {
                    format,
                    surface: Surface::new(0, 0),
                    has_alpha: false,
                    error: Some(message),
                }
            }
        }
    }

    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// The failure message, if loading failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// (width, height) in pixels; (0, 0) after a failed load
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }
}
