//! TGA encoder: normalized header + raw BGR pixel copy.

use alloc::vec::Vec;
use enough::Stop;

use super::{DATA_TYPE_TRUE_COLOR, HEADER_LEN, TgaHeader};
use crate::error::TgaError;
use crate::image::{Image, Origin};
use crate::pixel::BYTES_PER_PIXEL;

/// Build the normalized header for `image`.
///
/// Fields the codec does not preserve (image ID, color map, x/y origin,
/// non-origin descriptor bits) are written as zero.
fn header_for(image: &Image, origin: Origin) -> Result<TgaHeader, TgaError> {
    let too_large = || TgaError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;
    Ok(TgaHeader {
        data_type_code: DATA_TYPE_TRUE_COLOR,
        width,
        height,
        bits_per_pixel: 24,
        image_descriptor: origin.descriptor_bits(),
        ..TgaHeader::default()
    })
}

pub(crate) fn encode_image(
    image: &Image,
    origin: Option<Origin>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let header = header_for(image, origin.unwrap_or(image.origin()))?;
    let pixels = image.bgr_bytes();
    let total = HEADER_LEN
        .checked_add(pixels.len())
        .ok_or(TgaError::DimensionsTooLarge {
            width: image.width(),
            height: image.height(),
        })?;

    let mut out = Vec::with_capacity(total);
    write_header(&mut out, &header);

    stop.check()?;

    let row_bytes = image.width() as usize * BYTES_PER_PIXEL;
    for (row_idx, row) in pixels.chunks_exact(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, header: &TgaHeader) {
    out.push(header.id_length);
    out.push(header.color_map_type);
    out.push(header.data_type_code);
    out.extend_from_slice(&header.color_map_origin.to_le_bytes());
    out.extend_from_slice(&header.color_map_length.to_le_bytes());
    out.push(header.color_map_depth);
    out.extend_from_slice(&header.x_origin.to_le_bytes());
    out.extend_from_slice(&header.y_origin.to_le_bytes());
    out.extend_from_slice(&header.width.to_le_bytes());
    out.extend_from_slice(&header.height.to_le_bytes());
    out.push(header.bits_per_pixel);
    out.push(header.image_descriptor);
}
