use super::cursor::ByteCursor;
use crate::error::HeaderError;
use crate::types::HeaderFields;

pub const GIF_MAGIC: &[u8; 3] = b"GIF";

const SIGNATURE_LEN: usize = 6;
const SCREEN_DESCRIPTOR_LEN: usize = 7;

pub const HEADER_MIN_LEN: usize = SIGNATURE_LEN + SCREEN_DESCRIPTOR_LEN;

/// Palette entries are always embedded as RGB triples.
const EMBED_CHANNELS: u8 = 3;

pub fn scan(data: &[u8]) -> Result<HeaderFields, HeaderError> {
    if data.len() < HEADER_MIN_LEN {
        return Err(HeaderError::TooShort {
            needed: HEADER_MIN_LEN,
            actual: data.len(),
        });
    }

    let mut cursor = ByteCursor::at(data, SIGNATURE_LEN);
    let width = cursor.read_u16_le()?;
    let height = cursor.read_u16_le()?;
    let packed = cursor.read_u8()?;

    HeaderFields::new(
        u32::from(width),
        u32::from(height),
        color_table_bits(packed),
        EMBED_CHANNELS,
    )
}

/// Size-of-global-color-table field of the packed byte, as bits (1..=8).
#[inline]
pub fn color_table_bits(packed: u8) -> u8 {
    (packed & 0x07) + 1
}
