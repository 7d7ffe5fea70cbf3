#![no_main]
use libfuzzer_sys::fuzz_target;
use zentarga::{DecodeRequest, EncodeRequest};

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode back to identical
    // dimensions, origin, and pixels.
    let Ok(decoded) = DecodeRequest::new(data).decode(enough::Unstoppable) else {
        return;
    };

    let reencoded = EncodeRequest::tga()
        .encode(&decoded, enough::Unstoppable)
        .expect("decoded image failed to encode");
    let decoded2 = DecodeRequest::new(&reencoded)
        .decode(enough::Unstoppable)
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
