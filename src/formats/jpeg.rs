use tracing::trace;

use super::cursor::ByteCursor;
use crate::error::HeaderError;
use crate::types::HeaderFields;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const TEM: u8 = 0x01;

/// Length field (2) + precision (1) + height (2) + width (2) + components (1).
const SOF_MIN_LENGTH: u16 = 8;

/// Start-of-frame markers. `C4` (DHT), `C8` (JPG) and `CC` (DAC) share the
/// range but are not frame headers.
#[inline]
pub fn is_sof_marker(marker: u8) -> bool {
    matches!(
        marker,
        0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF
    )
}

/// Markers that are not followed by a length field.
#[inline]
pub fn is_standalone_marker(marker: u8) -> bool {
    matches!(marker, SOI | EOI | TEM | 0xD0..=0xD7)
}

/// Walks marker segments from just after SOI until the first frame header.
pub fn scan(data: &[u8]) -> Result<HeaderFields, HeaderError> {
    if data.len() < JPEG_SOI.len() {
        return Err(HeaderError::TooShort {
            needed: JPEG_SOI.len(),
            actual: data.len(),
        });
    }

    let mut cursor = ByteCursor::at(data, JPEG_SOI.len());

    while !cursor.is_at_end() {
        let offset = cursor.position();
        let prefix = cursor.read_u8()?;
        if prefix != MARKER_PREFIX {
            return Err(HeaderError::MarkerDesync {
                offset,
                found: prefix,
            });
        }

        // Fill bytes sit between the 0xFF prefix and the marker code (T.81 B.1.1.2).
        while cursor.peek_u8() == Some(MARKER_PREFIX) {
            cursor.skip(1)?;
        }

        let marker = cursor.read_u8()?;
        trace!(offset, marker, "jpeg marker");

        if is_standalone_marker(marker) {
            continue;
        }

        if is_sof_marker(marker) {
            return read_frame_header(&mut cursor, marker);
        }

        if marker == SOS {
            return Err(HeaderError::ScanBeforeFrame { offset });
        }

        let length = cursor.read_u16_be()?;
        if length < 2 {
            return Err(HeaderError::InvalidSegmentLength {
                offset,
                marker,
                length,
            });
        }
        cursor.skip(usize::from(length) - 2)?;
    }

    Err(HeaderError::MissingFrame)
}

fn read_frame_header(cursor: &mut ByteCursor<'_>, marker: u8) -> Result<HeaderFields, HeaderError> {
    let offset = cursor.position();
    let length = cursor.read_u16_be()?;
    if length < SOF_MIN_LENGTH {
        return Err(HeaderError::InvalidSegmentLength {
            offset,
            marker,
            length,
        });
    }

    let precision = cursor.read_u8()?;
    let height = cursor.read_u16_be()?;
    let width = cursor.read_u16_be()?;
    let components = cursor.read_u8()?;

    HeaderFields::new(u32::from(width), u32::from(height), precision, components)
}
