//! Per-channel arithmetic, isolation, and channel merge.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::check_same_shape;
use crate::error::TgaError;
use crate::image::Image;
use crate::pixel::{BYTES_PER_PIXEL, Channel};

fn per_pixel(
    image: &Image,
    stop: &dyn Stop,
    f: impl Fn(&[u8], &mut Vec<u8>),
) -> Result<Image, TgaError> {
    let stride = image.row_stride();
    let mut out = Vec::with_capacity(image.bgr_bytes().len());
    for (row_idx, row) in image.bgr_bytes().chunks_exact(stride).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row.chunks_exact(BYTES_PER_PIXEL) {
            f(px, &mut out);
        }
    }
    Image::from_bgr_bytes(image.width(), image.height(), image.origin(), out)
}

fn map_channel(
    image: &Image,
    channel: Channel,
    stop: &dyn Stop,
    f: impl Fn(u8) -> u8,
) -> Result<Image, TgaError> {
    let offset = channel.offset();
    per_pixel(image, stop, |px, out| {
        for (i, &v) in px.iter().enumerate() {
            out.push(if i == offset { f(v) } else { v });
        }
    })
}

/// Add `delta` (which may be negative) to one channel, clamped to [0, 255].
/// The other channels are untouched.
pub fn add_channel(
    image: &Image,
    channel: Channel,
    delta: i32,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    map_channel(image, channel, stop, |v| {
        (v as i32 + delta).clamp(0, 255) as u8
    })
}

/// Scale one channel by `factor`, rounded half-up and clamped to [0, 255].
///
/// Negative and non-finite factors are rejected.
pub fn scale_channel(
    image: &Image,
    channel: Channel,
    factor: f32,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(TgaError::BadOpArguments(format!(
            "scale factor must be a non-negative finite number, got {factor}"
        )));
    }
    map_channel(image, channel, stop, |v| {
        ((v as f32 * factor + 0.5) as i32).clamp(0, 255) as u8
    })
}

/// Keep the selected channel, zero the other two.
pub fn only_channel(image: &Image, channel: Channel, stop: &dyn Stop) -> Result<Image, TgaError> {
    let offset = channel.offset();
    per_pixel(image, stop, |px, out| {
        for (i, &v) in px.iter().enumerate() {
            out.push(if i == offset { v } else { 0 });
        }
    })
}

/// Grayscale isolation: every channel set to the selected channel's value.
pub fn extract_channel(
    image: &Image,
    channel: Channel,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    let offset = channel.offset();
    per_pixel(image, stop, |px, out| {
        let v = px[offset];
        out.push(v);
        out.push(v);
        out.push(v);
    })
}

/// Merge three same-shape sources: red from `red_src`, green from
/// `green_src`, blue from `blue_src`. The output keeps `red_src`'s origin.
pub fn combine(
    red_src: &Image,
    green_src: &Image,
    blue_src: &Image,
    stop: &dyn Stop,
) -> Result<Image, TgaError> {
    check_same_shape(red_src, green_src)?;
    check_same_shape(red_src, blue_src)?;

    let stride = red_src.row_stride();
    let mut out = Vec::with_capacity(red_src.bgr_bytes().len());
    let rows = red_src
        .bgr_bytes()
        .chunks_exact(stride)
        .zip(green_src.bgr_bytes().chunks_exact(stride))
        .zip(blue_src.bgr_bytes().chunks_exact(stride));
    for (row_idx, ((red_row, green_row), blue_row)) in rows.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let pixels = red_row
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(green_row.chunks_exact(BYTES_PER_PIXEL))
            .zip(blue_row.chunks_exact(BYTES_PER_PIXEL));
        for ((r_px, g_px), b_px) in pixels {
            out.push(b_px[Channel::Blue.offset()]);
            out.push(g_px[Channel::Green.offset()]);
            out.push(r_px[Channel::Red.offset()]);
        }
    }

    Image::from_bgr_bytes(red_src.width(), red_src.height(), red_src.origin(), out)
}
