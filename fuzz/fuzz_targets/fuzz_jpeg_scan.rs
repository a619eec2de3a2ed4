#![no_main]

use imgprobe::formats::jpeg;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut buf = Vec::with_capacity(data.len() + 2);
    buf.extend_from_slice(&jpeg::JPEG_SOI);
    buf.extend_from_slice(data);
    let _ = jpeg::scan(&buf);
});
