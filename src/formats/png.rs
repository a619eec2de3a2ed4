use super::cursor::ByteCursor;
use crate::error::HeaderError;
use crate::types::HeaderFields;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

const IHDR_TAG_OFFSET: usize = 12;
const IHDR_DATA_OFFSET: usize = 16;
const IHDR_DATA_LEN: usize = 13;

/// Signature, chunk length and tag, IHDR payload. The CRC is not needed.
pub const IHDR_MIN_LEN: usize = IHDR_DATA_OFFSET + IHDR_DATA_LEN;

const IHDR_CRC_END: usize = IHDR_MIN_LEN + 4;

/// Channels present for a PNG color type, `None` if the type is undefined.
pub fn channels_for_color_type(color_type: u8) -> Option<u8> {
    match color_type {
        0 => Some(1), // grayscale
        2 => Some(3), // RGB
        3 => Some(1), // palette index
        4 => Some(2), // grayscale + alpha
        6 => Some(4), // RGBA
        _ => None,
    }
}

#[inline]
pub fn is_valid_bit_depth(bit_depth: u8) -> bool {
    matches!(bit_depth, 1 | 2 | 4 | 8 | 16)
}

pub fn scan(data: &[u8]) -> Result<HeaderFields, HeaderError> {
    if data.len() < IHDR_MIN_LEN {
        return Err(HeaderError::TooShort {
            needed: IHDR_MIN_LEN,
            actual: data.len(),
        });
    }

    let mut cursor = ByteCursor::at(data, IHDR_TAG_OFFSET);
    let tag: [u8; 4] = cursor.read_array()?;
    if &tag != IHDR_CHUNK_TYPE {
        return Err(HeaderError::MissingIhdr { found: tag });
    }

    let width = cursor.read_u32_be()?;
    let height = cursor.read_u32_be()?;
    let bit_depth = cursor.read_u8()?;
    let color_type = cursor.read_u8()?;

    let channels =
        channels_for_color_type(color_type).ok_or(HeaderError::InvalidColorType(color_type))?;
    if !is_valid_bit_depth(bit_depth) {
        return Err(HeaderError::InvalidBitDepth(bit_depth));
    }

    HeaderFields::new(width, height, bit_depth, channels)
}

/// Compares the stored IHDR CRC-32 against one computed over tag and payload.
pub fn verify_ihdr_crc(data: &[u8]) -> Result<(), HeaderError> {
    if data.len() < IHDR_CRC_END {
        return Err(HeaderError::TooShort {
            needed: IHDR_CRC_END,
            actual: data.len(),
        });
    }

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&data[IHDR_TAG_OFFSET..IHDR_MIN_LEN]);
    let computed = hasher.finalize();

    let stored = ByteCursor::at(data, IHDR_MIN_LEN).read_u32_be()?;

    if stored != computed {
        return Err(HeaderError::CrcMismatch { stored, computed });
    }
    Ok(())
}
