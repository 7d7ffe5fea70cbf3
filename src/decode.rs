use enough::Stop;

use crate::error::TgaError;
use crate::image::Image;
use crate::limits::Limits;

/// Borrowing decode request: input bytes plus optional resource limits.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode request over a TGA byte buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Enforce resource limits during decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode to an owned [`Image`].
    pub fn decode(self, stop: impl Stop) -> Result<Image, TgaError> {
        crate::tga::decode(self.data, self.limits, &stop)
    }
}
