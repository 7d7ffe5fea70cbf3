//! TGA decoder: header parse, subset validation, raw BGR pixel copy.

use alloc::vec::Vec;
use enough::Stop;

use super::{DATA_TYPE_RLE_TRUE_COLOR, DATA_TYPE_TRUE_COLOR, HEADER_LEN, TgaHeader};
use crate::error::TgaError;
use crate::image::{Image, Origin};
use crate::pixel::BYTES_PER_PIXEL;

pub(crate) fn parse_header(data: &[u8]) -> Result<TgaHeader, TgaError> {
    if data.len() < HEADER_LEN {
        return Err(TgaError::TruncatedHeader);
    }
    let header = TgaHeader {
        id_length: data[0],
        color_map_type: data[1],
        data_type_code: data[2],
        color_map_origin: u16::from_le_bytes([data[3], data[4]]),
        color_map_length: u16::from_le_bytes([data[5], data[6]]),
        color_map_depth: data[7],
        x_origin: u16::from_le_bytes([data[8], data[9]]),
        y_origin: u16::from_le_bytes([data[10], data[11]]),
        width: u16::from_le_bytes([data[12], data[13]]),
        height: u16::from_le_bytes([data[14], data[15]]),
        bits_per_pixel: data[16],
        image_descriptor: data[17],
    };
    if header.width == 0 || header.height == 0 {
        return Err(TgaError::InvalidDimensions {
            width: header.width.into(),
            height: header.height.into(),
        });
    }
    Ok(header)
}

/// Reject header variants outside the decodable subset.
pub(crate) fn check_supported(header: &TgaHeader) -> Result<(), TgaError> {
    if header.color_map_type != 0 {
        return Err(TgaError::UnsupportedFormat(alloc::format!(
            "color-mapped image (color map type {})",
            header.color_map_type
        )));
    }
    match header.data_type_code {
        DATA_TYPE_TRUE_COLOR => {}
        DATA_TYPE_RLE_TRUE_COLOR => {
            return Err(TgaError::UnsupportedFormat(
                "RLE-compressed true-color image".into(),
            ));
        }
        other => {
            return Err(TgaError::UnsupportedFormat(alloc::format!(
                "data type code {other}"
            )));
        }
    }
    if header.bits_per_pixel != 24 {
        return Err(TgaError::UnsupportedFormat(alloc::format!(
            "{} bits per pixel (only 24 supported)",
            header.bits_per_pixel
        )));
    }
    Ok(())
}

/// Total pixel bytes for the given dimensions, with overflow checks.
pub(crate) fn pixel_bytes(width: u16, height: u16) -> Result<usize, TgaError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
        .ok_or(TgaError::DimensionsTooLarge {
            width: width.into(),
            height: height.into(),
        })
}

/// Copy the pixel array into an owned [`Image`].
///
/// The image ID field (`id_length` bytes after the header) is skipped, not
/// preserved.
pub(crate) fn decode_image(
    data: &[u8],
    header: &TgaHeader,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    let byte_len = pixel_bytes(header.width, header.height)?;
    let data_offset = HEADER_LEN + header.id_length as usize;

    let pixel_data = data.get(data_offset..).unwrap_or(&[]);
    if pixel_data.len() < byte_len {
        return Err(TgaError::TruncatedPixelData {
            needed: byte_len,
            actual: pixel_data.len(),
        });
    }

    let row_bytes = header.width as usize * BYTES_PER_PIXEL;
    let mut out = Vec::with_capacity(byte_len);
    for (row_idx, row) in pixel_data[..byte_len].chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Image::from_bgr_bytes(
        header.width.into(),
        header.height.into(),
        Origin::from_descriptor(header.image_descriptor),
        out,
    )
}
