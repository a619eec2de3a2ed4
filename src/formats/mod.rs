//! Container detection and per-format header scanners.
//!
//! Each scanner takes the complete file buffer and returns the header
//! fields or a [`HeaderError`]. None of them decode pixel data.

pub mod cursor;
pub mod gif;
pub mod jpeg;
pub mod png;

use crate::error::{HeaderError, ImageError, Result};
use crate::types::{HeaderFields, ImageFormat};

pub use cursor::ByteCursor;

/// Number of leading bytes detection needs to see.
pub const DETECT_PREFIX_LEN: usize = 4;

/// Classifies a buffer by its magic bytes.
///
/// The three prefixes are disjoint, so the first match wins.
pub fn detect(data: &[u8]) -> Result<ImageFormat> {
    let Some(prefix) = data.first_chunk::<DETECT_PREFIX_LEN>() else {
        return Err(ImageError::MalformedHeader {
            format: None,
            source: HeaderError::TooShort {
                needed: DETECT_PREFIX_LEN,
                actual: data.len(),
            },
        });
    };

    if prefix.starts_with(&jpeg::JPEG_SOI) {
        Ok(ImageFormat::Jpeg)
    } else if png::PNG_SIGNATURE.starts_with(prefix) {
        Ok(ImageFormat::Png)
    } else if prefix.starts_with(gif::GIF_MAGIC) {
        Ok(ImageFormat::Gif)
    } else {
        Err(ImageError::UnsupportedFormat { prefix: *prefix })
    }
}

/// Runs the scanner for `format` over `data`.
pub fn scan_header(format: ImageFormat, data: &[u8]) -> std::result::Result<HeaderFields, HeaderError> {
    match format {
        ImageFormat::Jpeg => jpeg::scan(data),
        ImageFormat::Png => png::scan(data),
        ImageFormat::Gif => gif::scan(data),
    }
}
