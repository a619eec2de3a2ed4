use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ImageFormat;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported image format (leading bytes {prefix:02X?})")]
    UnsupportedFormat { prefix: [u8; 4] },

    #[error("malformed {} header: {source}", container_label(.format))]
    MalformedHeader {
        format: Option<ImageFormat>,
        #[source]
        source: HeaderError,
    },
}

impl ImageError {
    pub(crate) fn malformed(format: ImageFormat, source: HeaderError) -> Self {
        Self::MalformedHeader {
            format: Some(format),
            source,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedHeader { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// The header-level cause, if this is a malformed header.
    pub fn header_error(&self) -> Option<&HeaderError> {
        match self {
            Self::MalformedHeader { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn container_label(format: &Option<ImageFormat>) -> &'static str {
    format.map_or("image", |f| f.name())
}

/// Why a recognized container could not yield its header fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("need at least {needed} bytes, found {actual}")]
    TooShort { needed: usize, actual: usize },

    #[error("read of {len} bytes at offset {offset} overruns a {total}-byte buffer")]
    Truncated {
        offset: usize,
        len: usize,
        total: usize,
    },

    #[error("expected marker prefix 0xFF at offset {offset}, found {found:#04X}")]
    MarkerDesync { offset: usize, found: u8 },

    #[error("marker {marker:#04X} at offset {offset} declares segment length {length}")]
    InvalidSegmentLength {
        offset: usize,
        marker: u8,
        length: u16,
    },

    #[error("scan data starts at offset {offset} before any frame header")]
    ScanBeforeFrame { offset: usize },

    #[error("no start-of-frame marker before end of data")]
    MissingFrame,

    #[error("expected IHDR chunk, found tag {found:02X?}")]
    MissingIhdr { found: [u8; 4] },

    #[error("undefined color type {0}")]
    InvalidColorType(u8),

    #[error("invalid bit depth {0}")]
    InvalidBitDepth(u8),

    #[error("invalid component count {0}")]
    InvalidComponentCount(u8),

    #[error("{0} is zero")]
    ZeroDimension(&'static str),

    #[error("IHDR CRC mismatch: stored {stored:#010X}, computed {computed:#010X}")]
    CrcMismatch { stored: u32, computed: u32 },
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("invalid zlib stream: {0}")]
    Decode(#[from] io::Error),

    #[error("inflated stream exceeds {limit} bytes")]
    OutputTooLarge { limit: u64 },
}

pub type Result<T> = std::result::Result<T, ImageError>;
