//! Pixel compositing operations.
//!
//! Every operation is a pure function: borrowed input image(s) in, fresh
//! [`Image`] out. Binary operations require identical dimensions and fail
//! with [`TgaError::ShapeMismatch`] otherwise — inputs are never truncated
//! or resized to fit.
//!
//! Driver code that sequences operations by name goes through the
//! [registry](registry).

mod blend;
mod channel;
mod geometry;
mod registry;

pub use blend::{multiply, overlay, screen, subtract};
pub use channel::{add_channel, combine, extract_channel, only_channel, scale_channel};
pub use geometry::flip;
pub use registry::{Arity, OpArgs, OpSpec, find_op, registry};

use crate::error::TgaError;
use crate::image::Image;

/// Binary-operation guard: identical width and height, or `ShapeMismatch`.
pub(crate) fn check_same_shape(a: &Image, b: &Image) -> Result<(), TgaError> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(TgaError::ShapeMismatch {
            expected_width: a.width(),
            expected_height: a.height(),
            actual_width: b.width(),
            actual_height: b.height(),
        });
    }
    Ok(())
}
