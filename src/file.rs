//! Whole-buffer file convenience (`std` only).

use std::fs;
use std::path::Path;

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::TgaError;
use crate::image::Image;

/// Read and decode a TGA file.
pub fn read_tga(path: impl AsRef<Path>) -> Result<Image, TgaError> {
    let data = fs::read(path)?;
    DecodeRequest::new(&data).decode(Unstoppable)
}

/// Encode and write `image` as a TGA file.
///
/// Encoding happens fully in memory first, so nothing is written when the
/// image cannot be encoded.
pub fn write_tga(path: impl AsRef<Path>, image: &Image) -> Result<(), TgaError> {
    let bytes = EncodeRequest::tga().encode(image, Unstoppable)?;
    fs::write(path, bytes)?;
    Ok(())
}
