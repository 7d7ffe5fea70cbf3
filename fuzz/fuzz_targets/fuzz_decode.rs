#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode and probe must never panic, whatever the bytes claim.
    let _ = zentarga::DecodeRequest::new(data).decode(enough::Unstoppable);
    let _ = zentarga::ImageInfo::from_bytes(data);
});
