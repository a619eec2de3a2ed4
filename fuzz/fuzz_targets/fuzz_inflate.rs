#![no_main]

use imgprobe::compression::{compress, decompress};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = decompress(data);

    let level = data.first().map_or(6, |b| u32::from(b % 10));
    assert_eq!(decompress(&compress(data, level)).unwrap(), data);
});
