//! zlib stream codec used for FlateDecode content and image streams.

use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use tracing::warn;

use crate::error::CompressionError;

pub const DEFAULT_LEVEL: u32 = 6;
pub const MAX_LEVEL: u32 = 9;

/// Upper bound on inflated output accepted by [`decompress`].
pub const MAX_INFLATED_BYTES: u64 = 256 * 1024 * 1024;

/// Deflates `data` into a zlib stream. Levels above 9 are clamped.
///
/// Never fails: if the encoder errors, the input is returned unchanged.
pub fn compress(data: &[u8], level: u32) -> Vec<u8> {
    match try_compress(data, level.min(MAX_LEVEL)) {
        Ok(out) => out,
        Err(e) => {
            warn!(error = %e, bytes = data.len(), "compression failed, storing uncompressed");
            data.to_vec()
        }
    }
}

fn try_compress(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(data.len() / 2 + 16),
        Compression::new(level),
    );
    encoder.write_all(data)?;
    encoder.finish()
}

pub fn decompress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress_with_limit(data, MAX_INFLATED_BYTES)
}

/// Inflates a zlib stream, failing once the output would exceed `limit` bytes.
pub fn decompress_with_limit(data: &[u8], limit: u64) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(data.len().saturating_mul(2));
    ZlibDecoder::new(data)
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)?;

    if out.len() as u64 > limit {
        return Err(CompressionError::OutputTooLarge { limit });
    }
    Ok(out)
}
