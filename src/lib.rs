//! # zentarga
//!
//! Uncompressed 24-bit TGA (Targa) codec and layer compositing engine.
//!
//! The codec reads and writes the classic 18-byte TGA header plus a raw
//! B,G,R pixel array — the same byte order pixels keep in memory, so a
//! decode → encode round-trip is bit-exact on dimensions, origin, and pixel
//! data. Header metadata the codec does not model (image ID, color map
//! fields, x/y origin, non-origin descriptor bits) is normalized to zero on
//! encode: lossy metadata, lossless pixels.
//!
//! On top of the codec sits a set of pure compositing operations — blend
//! modes (multiply, screen, subtract, overlay), channel arithmetic, channel
//! isolation and merge, vertical flip — exposed both as plain functions and
//! through a named [operation registry](registry) for driver code that
//! sequences them against a running image.
//!
//! ## Non-Goals
//!
//! - RLE-compressed and color-mapped TGA variants
//! - Bit depths other than 24; alpha channels
//! - Display/GUI concerns
//!
//! ## Usage
//!
//! ```no_run
//! use zentarga::{DecodeRequest, EncodeRequest, ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} at {} bpp", info.width, info.height, info.bits_per_pixel);
//!
//! // Decode, composite, re-encode
//! let image = DecodeRequest::new(data).decode(Unstoppable)?;
//! let squared = zentarga::multiply(&image, &image, &Unstoppable)?;
//! let encoded = EncodeRequest::tga().encode(&squared, Unstoppable)?;
//! # let _ = encoded;
//! # Ok::<(), zentarga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod ops;
pub mod tga;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::TgaError;
pub use image::{Image, Origin};
pub use info::ImageInfo;
pub use limits::Limits;
pub use ops::{
    Arity, OpArgs, OpSpec, add_channel, combine, extract_channel, find_op, flip, multiply,
    only_channel, overlay, registry, scale_channel, screen, subtract,
};
pub use pixel::{BYTES_PER_PIXEL, Channel};
pub use tga::TgaHeader;

#[cfg(feature = "std")]
pub use file::{read_tga, write_tga};
