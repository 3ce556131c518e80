//! PNG decoding into ARGB32 surfaces
//!
//! Every PNG flavor is normalized to 8-bit ARGB: 16-bit channels are
//! stripped, palettes and low-bit grayscale are expanded, tRNS chunks become
//! alpha, gray is replicated into RGB and a missing alpha is filled with 0xFF.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use log::debug;

use crate::image::surface::{Surface, pack_argb};
use crate::{Error, Result};

/// A decoded PNG
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub surface: Surface,
    /// The source carried an alpha channel or a tRNS chunk
    pub has_alpha: bool,
}

/// Decode a PNG file
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedPng> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    debug!("decoding png {}", path.display());
    decode_reader(BufReader::new(file))
}

/// Decode a PNG held in memory
pub fn decode_bytes(data: &[u8]) -> Result<DecodedPng> {
    decode_reader(Cursor::new(data))
}

fn decode_reader<R: BufRead + Seek>(input: R) -> Result<DecodedPng> {
    let mut decoder = png::Decoder::new(input);
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder.read_info()?;
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| Error::UnsupportedPixelFormat("image too large".to_string()))?;
    let mut buf = vec![0u8; buffer_size];
    let frame = reader.next_frame(&mut buf)?;

    let channels = match frame.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(Error::UnsupportedPixelFormat(format!(
                "{:?} with bit depth {:?}",
                other, frame.bit_depth
            )));
        }
    };
    if frame.bit_depth != png::BitDepth::Eight {
        return Err(Error::UnsupportedPixelFormat(format!(
            "{:?} with bit depth {:?}",
            frame.color_type, frame.bit_depth
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let row_bytes = width * channels;
    let bytes = &buf[..frame.buffer_size()];
    if frame.line_size < row_bytes || bytes.len() < frame.line_size * height {
        return Err(Error::BufferSize {
            expected: row_bytes * height,
            actual: bytes.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width * height);
    for row in bytes.chunks(frame.line_size).take(height) {
        pixels.extend(row[..row_bytes].chunks_exact(channels).map(|px| match *px {
            [v] => pack_argb(0xFF, v, v, v),
            [v, a] => pack_argb(a, v, v, v),
            [r, g, b] => pack_argb(0xFF, r, g, b),
            [r, g, b, a] => pack_argb(a, r, g, b),
            _ => unreachable!("chunks_exact yields {channels} bytes"),
        }));
    }

    let has_alpha = matches!(
        frame.color_type,
        png::ColorType::GrayscaleAlpha | png::ColorType::Rgba
    );
    debug!(
        "decoded png: {}x{} {:?}, alpha: {}",
        frame.width, frame.height, frame.color_type, has_alpha
    );

    Ok(DecodedPng {
        surface: Surface::from_argb32(frame.width, frame.height, pixels)?,
        has_alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let png = encode(2, 1, png::ColorType::Rgb, &[255, 0, 0, 0, 128, 255]);
        let decoded = decode_bytes(&png).unwrap();
        assert!(!decoded.has_alpha);
        assert_eq!(decoded.surface.size(), (2, 1));
        assert_eq!(decoded.surface.data(), &[0xFFFF_0000, 0xFF00_80FF]);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let png = encode(1, 2, png::ColorType::Rgba, &[1, 2, 3, 4, 5, 6, 7, 8]);
        let decoded = decode_bytes(&png).unwrap();
        assert!(decoded.has_alpha);
        assert_eq!(decoded.surface.data(), &[0x0401_0203, 0x0805_0607]);
    }

    #[test]
    fn test_gray_expands() {
        let png = encode(2, 1, png::ColorType::Grayscale, &[0x10, 0xF0]);
        let decoded = decode_bytes(&png).unwrap();
        assert_eq!(decoded.surface.data(), &[0xFF10_1010, 0xFFF0_F0F0]);

        let png = encode(1, 1, png::ColorType::GrayscaleAlpha, &[0x20, 0x80]);
        let decoded = decode_bytes(&png).unwrap();
        assert!(decoded.has_alpha);
        assert_eq!(decoded.surface.data(), &[0x8020_2020]);
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode_bytes(b"definitely not a png").unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "{err:?}");
    }

    #[test]
    fn test_truncated_stream() {
        let png = encode(4, 4, png::ColorType::Rgb, &[7u8; 48]);
        assert!(decode_bytes(&png[..png.len() / 2]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = decode_file("/nonexistent/dir/image.png").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
