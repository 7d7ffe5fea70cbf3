//! Binary blend modes: multiply, screen, subtract, overlay.
//!
//! Channels are independent, so each mode reduces to a per-byte function
//! zipped over the two BGR buffers. Division by 255 rounds half-up:
//! `(x + 127) / 255` equals `floor(x/255 + 1/2)` for the whole input range.

use alloc::vec::Vec;
use enough::Stop;

use super::check_same_shape;
use crate::error::TgaError;
use crate::image::Image;

/// Round-half-up division by 255, clamped to the 8-bit range.
#[inline]
fn div255_round(x: u32) -> u8 {
    ((x + 127) / 255).min(255) as u8
}

fn blend_bytes(
    top: &Image,
    bottom: &Image,
    stop: &dyn Stop,
    op: impl Fn(u8, u8) -> u8,
) -> Result<Image, TgaError> {
    check_same_shape(top, bottom)?;

    let stride = top.row_stride();
    let mut out = Vec::with_capacity(top.bgr_bytes().len());
    let rows = top
        .bgr_bytes()
        .chunks_exact(stride)
        .zip(bottom.bgr_bytes().chunks_exact(stride));
    for (row_idx, (top_row, bottom_row)) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (&a, &b) in top_row.iter().zip(bottom_row) {
            out.push(op(a, b));
        }
    }

    Image::from_bgr_bytes(top.width(), top.height(), top.origin(), out)
}

/// Multiply blend: `round(a*b/255)` per channel.
///
/// All-white is the identity layer; all-black forces black.
pub fn multiply(top: &Image, bottom: &Image, stop: &dyn Stop) -> Result<Image, TgaError> {
    blend_bytes(top, bottom, stop, |a, b| div255_round(a as u32 * b as u32))
}

/// Screen blend: `255 - round((255-a)*(255-b)/255)` per channel.
///
/// All-black is the identity layer; all-white forces white.
pub fn screen(top: &Image, bottom: &Image, stop: &dyn Stop) -> Result<Image, TgaError> {
    blend_bytes(top, bottom, stop, |a, b| {
        255 - div255_round((255 - a as u32) * (255 - b as u32))
    })
}

/// Subtract blend: `max(0, a - b)` per channel.
pub fn subtract(top: &Image, bottom: &Image, stop: &dyn Stop) -> Result<Image, TgaError> {
    blend_bytes(top, bottom, stop, |a, b| a.saturating_sub(b))
}

/// Overlay blend, branching on the bottom layer's channel value.
///
/// `b <= 128` takes the doubled multiply branch (ties go to multiply),
/// `b > 128` the doubled screen branch. The doubled product can reach 256
/// at the threshold, so the multiply branch clamps.
pub fn overlay(top: &Image, bottom: &Image, stop: &dyn Stop) -> Result<Image, TgaError> {
    blend_bytes(top, bottom, stop, |a, b| {
        if b <= 128 {
            div255_round(2 * a as u32 * b as u32)
        } else {
            255 - div255_round(2 * (255 - a as u32) * (255 - b as u32))
        }
    })
}
