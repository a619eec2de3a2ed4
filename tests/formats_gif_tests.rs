use imgprobe::HeaderError;
use imgprobe::formats::gif::{HEADER_MIN_LEN, color_table_bits, scan};

fn make_gif(version: &[u8; 6], width: u16, height: u16, packed: u8) -> Vec<u8> {
    let mut gif = version.to_vec();
    gif.extend_from_slice(&width.to_le_bytes());
    gif.extend_from_slice(&height.to_le_bytes());
    gif.extend_from_slice(&[packed, 0x00, 0x00]);
    gif.push(0x3B);
    gif
}

#[test]
fn test_scan_little_endian_dimensions() {
    let data = [
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x40, 0x01, 0xF0, 0x00, 0x87, 0x00, 0x00,
    ];
    let fields = scan(&data).unwrap();
    assert_eq!(fields.width(), 320);
    assert_eq!(fields.height(), 240);
    assert_eq!(fields.bit_depth(), 8);
    assert_eq!(fields.channel_count(), 3);
}

#[test]
fn test_gif87a_header() {
    let fields = scan(&make_gif(b"GIF87a", 1, 65535, 0x80)).unwrap();
    assert_eq!((fields.width(), fields.height()), (1, 65535));
    assert_eq!(fields.bit_depth(), 1);
}

#[test]
fn test_color_table_bits_range() {
    for packed in 0..=u8::MAX {
        let bits = color_table_bits(packed);
        assert!((1..=8).contains(&bits));
        assert_eq!(bits, (packed & 0x07) + 1);
    }
}

#[test]
fn test_channels_fixed_without_global_table() {
    let fields = scan(&make_gif(b"GIF89a", 10, 10, 0x00)).unwrap();
    assert_eq!(fields.channel_count(), 3);
}

#[test]
fn test_short_header() {
    let data = make_gif(b"GIF89a", 10, 10, 0x87);
    assert_eq!(
        scan(&data[..HEADER_MIN_LEN - 1]),
        Err(HeaderError::TooShort {
            needed: HEADER_MIN_LEN,
            actual: HEADER_MIN_LEN - 1
        })
    );
}

#[test]
fn test_zero_dimension() {
    assert_eq!(
        scan(&make_gif(b"GIF89a", 10, 0, 0x87)),
        Err(HeaderError::ZeroDimension("height"))
    );
}
