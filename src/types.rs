use std::fmt;

use serde::Serialize;

use crate::error::HeaderError;

pub const MAX_CHANNELS: u8 = 4;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Gif => "GIF",
        }
    }

    /// Numeric id used by older integration call sites.
    pub fn legacy_id(&self) -> u8 {
        match self {
            ImageFormat::Gif => 1,
            ImageFormat::Jpeg => 2,
            ImageFormat::Png => 3,
        }
    }

    pub fn from_legacy_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(ImageFormat::Gif),
            2 => Some(ImageFormat::Jpeg),
            3 => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four values every header scanner extracts.
///
/// Only constructible through [`HeaderFields::new`], which rejects zero
/// dimensions, a zero bit depth and channel counts outside `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderFields {
    width: u32,
    height: u32,
    bit_depth: u8,
    channel_count: u8,
}

impl HeaderFields {
    pub fn new(
        width: u32,
        height: u32,
        bit_depth: u8,
        channel_count: u8,
    ) -> Result<Self, HeaderError> {
        if width == 0 {
            return Err(HeaderError::ZeroDimension("width"));
        }
        if height == 0 {
            return Err(HeaderError::ZeroDimension("height"));
        }
        if bit_depth == 0 {
            return Err(HeaderError::InvalidBitDepth(bit_depth));
        }
        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(HeaderError::InvalidComponentCount(channel_count));
        }

        Ok(Self {
            width,
            height,
            bit_depth,
            channel_count,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    #[inline]
    pub fn channel_count(&self) -> u8 {
        self.channel_count
    }
}

/// Header metadata of a parsed image together with the file it came from.
///
/// The raw bytes are kept intact so the document assembler can pass JPEG
/// data through unchanged or recompress PNG data.
#[derive(Debug, Serialize)]
pub struct ImageMetadata {
    format: ImageFormat,
    #[serde(flatten)]
    fields: HeaderFields,
    size_bytes: usize,
    #[serde(skip)]
    raw_bytes: Vec<u8>,
}

impl ImageMetadata {
    pub(crate) fn new(format: ImageFormat, fields: HeaderFields, raw_bytes: Vec<u8>) -> Self {
        Self {
            format,
            fields,
            size_bytes: raw_bytes.len(),
            raw_bytes,
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn fields(&self) -> HeaderFields {
        self.fields
    }

    pub fn width(&self) -> u32 {
        self.fields.width()
    }

    pub fn height(&self) -> u32 {
        self.fields.height()
    }

    pub fn bit_depth(&self) -> u8 {
        self.fields.bit_depth()
    }

    pub fn channel_count(&self) -> u8 {
        self.fields.channel_count()
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    pub fn into_raw_bytes(self) -> Vec<u8> {
        self.raw_bytes
    }

    pub fn legacy_id(&self) -> u8 {
        self.format.legacy_id()
    }

    pub fn to_legacy(&self) -> LegacyImageInfo {
        LegacyImageInfo {
            id: self.legacy_id(),
            width: self.width(),
            height: self.height(),
            bits: self.bit_depth(),
            channels: self.channel_count(),
        }
    }
}

/// Shape expected by call sites that key behavior off an integer format id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegacyImageInfo {
    pub id: u8,
    pub width: u32,
    pub height: u32,
    pub bits: u8,
    pub channels: u8,
}
