use crate::error::TgaError;
use crate::image::Origin;
use crate::tga::TgaHeader;

/// Header facts probed from a TGA byte buffer without decoding pixels.
///
/// Probing reports the header as stored — including data type codes and bit
/// depths [`DecodeRequest`](crate::DecodeRequest) would reject — and fails
/// only on truncation or zero dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u8,
    pub data_type_code: u8,
    /// Whether the header declares a color map.
    pub color_mapped: bool,
    pub origin: Origin,
}

impl ImageInfo {
    /// Probe the fixed 18-byte header at the front of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let header = TgaHeader::parse(data)?;
        Ok(Self {
            width: header.width.into(),
            height: header.height.into(),
            bits_per_pixel: header.bits_per_pixel,
            data_type_code: header.data_type_code,
            color_mapped: header.color_map_type != 0,
            origin: Origin::from_descriptor(header.image_descriptor),
        })
    }
}
