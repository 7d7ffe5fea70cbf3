use enough::Unstoppable;
use zentarga::*;

fn gradient(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            pixels[off] = (x * 7) as u8;
            pixels[off + 1] = (y * 13) as u8;
            pixels[off + 2] = ((x + y) * 3) as u8;
        }
    }
    pixels
}

#[test]
fn tga_roundtrip_preserves_pixels() {
    let pixels = gradient(5, 4);
    let image = Image::from_bgr_bytes(5, 4, Origin::BottomLeft, pixels.clone()).unwrap();

    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();
    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();

    assert_eq!(decoded.width(), 5);
    assert_eq!(decoded.height(), 4);
    assert_eq!(decoded.bgr_bytes(), &pixels[..]);
    assert_eq!(decoded, image);
}

#[test]
fn encoded_header_layout() {
    let image = Image::from_bgr_bytes(2, 1, Origin::BottomLeft, vec![10, 20, 30, 0, 0, 0]).unwrap();
    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();

    assert_eq!(encoded.len(), 18 + 6);
    assert_eq!(encoded[2], 2); // uncompressed true-color
    assert_eq!(&encoded[12..16], &[2, 0, 1, 0]); // width=2, height=1, little-endian
    assert_eq!(encoded[16], 24);
    assert_eq!(encoded[17], 0); // bottom-left origin, nothing else
    assert_eq!(&encoded[18..], &[10, 20, 30, 0, 0, 0]); // B,G,R order, untouched
}

#[test]
fn top_left_origin_bit_roundtrips() {
    let image = Image::from_bgr_bytes(1, 2, Origin::TopLeft, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();
    assert_eq!(encoded[17], 0x20);

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded.origin(), Origin::TopLeft);
    assert_eq!(decoded, image);
}

#[test]
fn with_origin_overrides_descriptor() {
    let image = Image::from_bgr_bytes(1, 1, Origin::BottomLeft, vec![1, 2, 3]).unwrap();
    let encoded = EncodeRequest::tga()
        .with_origin(Origin::TopLeft)
        .encode(&image, Unstoppable)
        .unwrap();
    assert_eq!(encoded[17], 0x20);
}

#[test]
fn decode_skips_image_id() {
    let mut bytes = vec![0u8; 18];
    bytes[0] = 3; // image ID length
    bytes[2] = 2;
    bytes[12] = 1;
    bytes[14] = 1;
    bytes[16] = 24;
    bytes.extend_from_slice(b"abc");
    bytes.extend_from_slice(&[9, 8, 7]);

    let decoded = DecodeRequest::new(&bytes).decode(Unstoppable).unwrap();
    assert_eq!(decoded.bgr(0, 0), Some([9, 8, 7]));
}

#[test]
fn truncated_header_rejected() {
    let result = DecodeRequest::new(&[0u8; 17]).decode(Unstoppable);
    assert!(matches!(result, Err(TgaError::TruncatedHeader)));
}

#[test]
fn zero_dimensions_rejected() {
    let mut bytes = vec![0u8; 18];
    bytes[2] = 2;
    bytes[16] = 24;
    let result = DecodeRequest::new(&bytes).decode(Unstoppable);
    assert!(matches!(result, Err(TgaError::InvalidDimensions { .. })));
}

#[test]
fn truncated_pixel_data_rejected() {
    let mut bytes = vec![0u8; 18];
    bytes[2] = 2;
    bytes[12] = 2;
    bytes[14] = 2;
    bytes[16] = 24;
    bytes.extend_from_slice(&[0; 11]); // 2x2x3 needs 12

    match DecodeRequest::new(&bytes).decode(Unstoppable) {
        Err(TgaError::TruncatedPixelData { needed, actual }) => {
            assert_eq!(needed, 12);
            assert_eq!(actual, 11);
        }
        other => panic!("expected TruncatedPixelData, got {other:?}"),
    }
}

#[test]
fn rle_data_rejected() {
    let mut bytes = vec![0u8; 18];
    bytes[2] = 10; // RLE true-color
    bytes[12] = 1;
    bytes[14] = 1;
    bytes[16] = 24;
    let result = DecodeRequest::new(&bytes).decode(Unstoppable);
    assert!(matches!(result, Err(TgaError::UnsupportedFormat(_))));
}

#[test]
fn color_mapped_rejected() {
    let mut bytes = vec![0u8; 18];
    bytes[1] = 1; // color map present
    bytes[2] = 1; // color-mapped data
    bytes[12] = 1;
    bytes[14] = 1;
    bytes[16] = 8;
    let result = DecodeRequest::new(&bytes).decode(Unstoppable);
    assert!(matches!(result, Err(TgaError::UnsupportedFormat(_))));
}

#[test]
fn non_24bit_rejected() {
    let mut bytes = vec![0u8; 18];
    bytes[2] = 2;
    bytes[12] = 1;
    bytes[14] = 1;
    bytes[16] = 32;
    let result = DecodeRequest::new(&bytes).decode(Unstoppable);
    assert!(matches!(result, Err(TgaError::UnsupportedFormat(_))));
}

#[test]
fn probe_reports_unsupported_headers() {
    // A 16-bit RLE header probes fine even though decode rejects it.
    let mut bytes = vec![0u8; 18];
    bytes[2] = 10;
    bytes[12] = 64;
    bytes[14] = 32;
    bytes[16] = 16;
    bytes[17] = 0x20;

    let info = ImageInfo::from_bytes(&bytes).unwrap();
    assert_eq!(info.width, 64);
    assert_eq!(info.height, 32);
    assert_eq!(info.bits_per_pixel, 16);
    assert_eq!(info.data_type_code, 10);
    assert!(!info.color_mapped);
    assert_eq!(info.origin, Origin::TopLeft);

    assert!(DecodeRequest::new(&bytes).decode(Unstoppable).is_err());
}

#[test]
fn limits_reject_large() {
    let image = Image::from_bgr_bytes(4, 4, Origin::BottomLeft, gradient(4, 4)).unwrap();
    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(8),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result {
        Err(TgaError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn oversized_image_unencodable() {
    // Valid in memory, but the header's u16 dimensions cannot hold it.
    let image = Image::new(70_000, 1).unwrap();
    let result = EncodeRequest::tga().encode(&image, Unstoppable);
    assert!(matches!(result, Err(TgaError::DimensionsTooLarge { .. })));
}

#[test]
fn header_parse_matches_encoded_fields() {
    let image = Image::from_bgr_bytes(3, 2, Origin::BottomLeft, gradient(3, 2)).unwrap();
    let encoded = EncodeRequest::tga().encode(&image, Unstoppable).unwrap();

    let header = TgaHeader::parse(&encoded).unwrap();
    assert_eq!(header.width, 3);
    assert_eq!(header.height, 2);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(header.data_type_code, 2);
    assert_eq!(header.id_length, 0);
    assert_eq!(header.color_map_type, 0);
}
