/// Bytes per pixel in the supported TGA subset: one B,G,R triple.
pub const BYTES_PER_PIXEL: usize = 3;

/// One of the three 8-bit color components of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Byte offset of this channel inside a B,G,R pixel record.
    ///
    /// TGA stores blue first and red last.
    pub const fn offset(self) -> usize {
        match self {
            Channel::Blue => 0,
            Channel::Green => 1,
            Channel::Red => 2,
        }
    }

    /// Parse a channel name token ("red", "green", "blue").
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "red" => Some(Channel::Red),
            "green" => Some(Channel::Green),
            "blue" => Some(Channel::Blue),
            _ => None,
        }
    }
}
