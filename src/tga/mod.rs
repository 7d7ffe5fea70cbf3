//! TGA (Targa) subset codec: 18-byte header + uncompressed 24-bit BGR pixels.
//!
//! Field layout follows the Truevision TGA 1.0 specification. Only
//! color-map-free, uncompressed true-color images at 24 bits per pixel are
//! decodable; probing via [`crate::ImageInfo`] accepts any header.

mod decode;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;
use crate::image::{Image, Origin};
use crate::limits::Limits;

/// Length of the fixed TGA header.
pub const HEADER_LEN: usize = 18;

/// Data type code for uncompressed true-color images.
pub const DATA_TYPE_TRUE_COLOR: u8 = 2;

/// Data type code for run-length encoded true-color images (not supported).
pub const DATA_TYPE_RLE_TRUE_COLOR: u8 = 10;

/// The fixed 18-byte TGA header record.
///
/// Multi-byte fields are little-endian on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type_code: u8,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Parse the fixed header from the front of `data`.
    ///
    /// Fails with [`TgaError::TruncatedHeader`] on short input and
    /// [`TgaError::InvalidDimensions`] on a zero width or height; anything
    /// else the header claims is reported as-is.
    pub fn parse(data: &[u8]) -> Result<Self, TgaError> {
        decode::parse_header(data)
    }
}

/// Decode a TGA byte buffer (called from `DecodeRequest`).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    let header = decode::parse_header(data)?;
    decode::check_supported(&header)?;
    if let Some(limits) = limits {
        limits.check(header.width.into(), header.height.into())?;
    }
    let out_bytes = decode::pixel_bytes(header.width, header.height)?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }
    stop.check()?;
    decode::decode_image(data, &header, stop)
}

/// Encode an image as TGA bytes (called from `EncodeRequest`).
pub(crate) fn encode(
    image: &Image,
    origin: Option<Origin>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    encode::encode_image(image, origin, stop)
}
