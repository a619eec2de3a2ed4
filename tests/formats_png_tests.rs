use imgprobe::HeaderError;
use imgprobe::formats::png::{IHDR_MIN_LEN, PNG_SIGNATURE, scan, verify_ihdr_crc};

fn make_png_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(chunk_type);
    chunk.extend_from_slice(payload);
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(payload);
    chunk.extend_from_slice(&hasher.finalize().to_be_bytes());
    chunk
}

fn make_png(width: u32, height: u32, bit_depth: u8, color_type: u8) -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);

    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&make_png_chunk(b"IHDR", &ihdr));
    data.extend_from_slice(&make_png_chunk(b"IDAT", &[0x78, 0x9C, 0x03, 0x00]));
    data.extend_from_slice(&make_png_chunk(b"IEND", &[]));
    data
}

#[test]
fn test_scan_rgba_header() {
    let png = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0xC8, 0x08, 0x06, 0x00, 0x00, 0x00,
    ];
    let fields = scan(&png).unwrap();
    assert_eq!(fields.width(), 256);
    assert_eq!(fields.height(), 200);
    assert_eq!(fields.bit_depth(), 8);
    assert_eq!(fields.channel_count(), 4);
}

#[test]
fn test_color_types_map_to_channels() {
    for (color_type, channels) in [(0, 1), (2, 3), (3, 1), (4, 2), (6, 4)] {
        let fields = scan(&make_png(16, 16, 8, color_type)).unwrap();
        assert_eq!(fields.channel_count(), channels, "color type {color_type}");
    }
}

#[test]
fn test_undefined_color_type_fails() {
    for color_type in [1, 5, 7, 42] {
        assert_eq!(
            scan(&make_png(16, 16, 8, color_type)),
            Err(HeaderError::InvalidColorType(color_type))
        );
    }
}

#[test]
fn test_sixteen_bit_grayscale() {
    let fields = scan(&make_png(3000, 2000, 16, 0)).unwrap();
    assert_eq!(fields.bit_depth(), 16);
    assert_eq!((fields.width(), fields.height()), (3000, 2000));
}

#[test]
fn test_invalid_bit_depth() {
    assert_eq!(
        scan(&make_png(16, 16, 3, 2)),
        Err(HeaderError::InvalidBitDepth(3))
    );
}

#[test]
fn test_wrong_first_chunk_tag() {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&make_png_chunk(b"gAMA", &[0, 0, 0xB1, 0x8F, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
    assert_eq!(
        scan(&data),
        Err(HeaderError::MissingIhdr { found: *b"gAMA" })
    );
}

#[test]
fn test_short_buffer() {
    let data = make_png(16, 16, 8, 2);
    assert_eq!(
        scan(&data[..IHDR_MIN_LEN - 1]),
        Err(HeaderError::TooShort {
            needed: IHDR_MIN_LEN,
            actual: IHDR_MIN_LEN - 1
        })
    );
    assert!(scan(&data[..IHDR_MIN_LEN]).is_ok());
}

#[test]
fn test_zero_width_fails() {
    assert_eq!(
        scan(&make_png(0, 16, 8, 2)),
        Err(HeaderError::ZeroDimension("width"))
    );
}

#[test]
fn test_ihdr_crc_verification() {
    let mut data = make_png(100, 100, 8, 2);
    assert!(verify_ihdr_crc(&data).is_ok());

    data[20] ^= 0x01;
    assert!(matches!(
        verify_ihdr_crc(&data),
        Err(HeaderError::CrcMismatch { .. })
    ));
    assert!(matches!(
        verify_ihdr_crc(&data[..IHDR_MIN_LEN]),
        Err(HeaderError::TooShort { .. })
    ));
}
