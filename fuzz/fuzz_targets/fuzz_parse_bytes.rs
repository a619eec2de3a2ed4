#![no_main]

use imgprobe::ImageIntrospector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let expected_len = data.len();
    if let Ok(metadata) = ImageIntrospector::new().parse_bytes(data.to_vec()) {
        assert!(metadata.width() > 0 && metadata.height() > 0);
        assert!((1..=4).contains(&metadata.channel_count()));
        assert_eq!(metadata.size_bytes(), expected_len);
    }
});
