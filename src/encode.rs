use alloc::vec::Vec;
use enough::Stop;

use crate::error::TgaError;
use crate::image::{Image, Origin};

/// TGA encode request.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    origin: Option<Origin>,
}

impl EncodeRequest {
    /// Encode request for the TGA container.
    pub fn tga() -> Self {
        Self::default()
    }

    /// Write this origin bit instead of the image's own.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Encode `image` to TGA bytes.
    pub fn encode(self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, TgaError> {
        crate::tga::encode(image, self.origin, &stop)
    }
}
