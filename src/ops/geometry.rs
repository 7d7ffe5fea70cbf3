//! Geometric transforms.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;
use crate::image::Image;

/// Vertical mirror: row `y` swaps with row `height - 1 - y`.
///
/// Rows are copied whole, so the left-to-right order inside each row is
/// untouched. (A full buffer reverse would mirror horizontally as well,
/// which is not a vertical flip.)
pub fn flip(image: &Image, stop: &dyn Stop) -> Result<Image, TgaError> {
    let stride = image.row_stride();
    let mut out = Vec::with_capacity(image.bgr_bytes().len());
    for (row_idx, row) in image.bgr_bytes().chunks_exact(stride).rev().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Image::from_bgr_bytes(image.width(), image.height(), image.origin(), out)
}
