//! Named operation registry: the composable surface a CLI driver sequences
//! operations through.
//!
//! The driver owns tokenization, file validation, and numeric parsing; it
//! looks up an [`OpSpec`] by token, packages the parsed extras as
//! [`OpArgs`], and threads the running image through [`OpSpec::apply`].
//! Token names come from the classic driver vocabulary: `multiply`,
//! `onlyred`, `scalegreen`, and so on.

use alloc::format;
use alloc::string::String;
use enough::Stop;

use crate::error::TgaError;
use crate::image::Image;
use crate::pixel::Channel;

/// How many extra inputs an operation takes beyond the running image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// No extras (flip, only*).
    None,
    /// One extra image (multiply, screen, subtract, overlay).
    Image,
    /// Two extra images (combine: the green and blue sources).
    Images2,
    /// One integer value (add*).
    Scalar,
    /// One float factor (scale*).
    Factor,
    /// One channel name (extract).
    Channel,
}

/// Extra inputs for [`OpSpec::apply`], matching the operation's [`Arity`].
#[derive(Clone, Copy, Debug)]
pub enum OpArgs<'a> {
    None,
    Image(&'a Image),
    Images2(&'a Image, &'a Image),
    Scalar(i32),
    Factor(f32),
    Channel(Channel),
}

/// A registered operation: name token, arity, pure transform.
pub struct OpSpec {
    pub name: &'static str,
    pub arity: Arity,
    apply: fn(&Image, &OpArgs<'_>, &dyn Stop) -> Result<Image, TgaError>,
}

impl OpSpec {
    /// Run the transform against `image`.
    ///
    /// Args not matching the declared arity fail with
    /// [`TgaError::BadOpArguments`]; the image is untouched on any error.
    pub fn apply(
        &self,
        image: &Image,
        args: &OpArgs<'_>,
        stop: &dyn Stop,
    ) -> Result<Image, TgaError> {
        (self.apply)(image, args, stop)
    }
}

fn bad_args(name: &str, arity: Arity) -> TgaError {
    let wants = match arity {
        Arity::None => "no extra arguments",
        Arity::Image => "one extra image",
        Arity::Images2 => "two extra images",
        Arity::Scalar => "an integer value",
        Arity::Factor => "a scale factor",
        Arity::Channel => "a channel name",
    };
    TgaError::BadOpArguments(format!("{name} expects {wants}"))
}

static REGISTRY: &[OpSpec] = &[
    OpSpec {
        name: "multiply",
        arity: Arity::Image,
        apply: |img, args, stop| match *args {
            OpArgs::Image(other) => super::multiply(img, other, stop),
            _ => Err(bad_args("multiply", Arity::Image)),
        },
    },
    OpSpec {
        name: "screen",
        arity: Arity::Image,
        apply: |img, args, stop| match *args {
            OpArgs::Image(other) => super::screen(img, other, stop),
            _ => Err(bad_args("screen", Arity::Image)),
        },
    },
    OpSpec {
        name: "subtract",
        arity: Arity::Image,
        apply: |img, args, stop| match *args {
            OpArgs::Image(other) => super::subtract(img, other, stop),
            _ => Err(bad_args("subtract", Arity::Image)),
        },
    },
    OpSpec {
        name: "overlay",
        arity: Arity::Image,
        apply: |img, args, stop| match *args {
            OpArgs::Image(other) => super::overlay(img, other, stop),
            _ => Err(bad_args("overlay", Arity::Image)),
        },
    },
    OpSpec {
        name: "combine",
        arity: Arity::Images2,
        apply: |img, args, stop| match *args {
            OpArgs::Images2(green_src, blue_src) => super::combine(img, green_src, blue_src, stop),
            _ => Err(bad_args("combine", Arity::Images2)),
        },
    },
    OpSpec {
        name: "extract",
        arity: Arity::Channel,
        apply: |img, args, stop| match *args {
            OpArgs::Channel(channel) => super::extract_channel(img, channel, stop),
            _ => Err(bad_args("extract", Arity::Channel)),
        },
    },
    OpSpec {
        name: "flip",
        arity: Arity::None,
        apply: |img, args, stop| match *args {
            OpArgs::None => super::flip(img, stop),
            _ => Err(bad_args("flip", Arity::None)),
        },
    },
    OpSpec {
        name: "onlyred",
        arity: Arity::None,
        apply: |img, args, stop| match *args {
            OpArgs::None => super::only_channel(img, Channel::Red, stop),
            _ => Err(bad_args("onlyred", Arity::None)),
        },
    },
    OpSpec {
        name: "onlygreen",
        arity: Arity::None,
        apply: |img, args, stop| match *args {
            OpArgs::None => super::only_channel(img, Channel::Green, stop),
            _ => Err(bad_args("onlygreen", Arity::None)),
        },
    },
    OpSpec {
        name: "onlyblue",
        arity: Arity::None,
        apply: |img, args, stop| match *args {
            OpArgs::None => super::only_channel(img, Channel::Blue, stop),
            _ => Err(bad_args("onlyblue", Arity::None)),
        },
    },
    OpSpec {
        name: "addred",
        arity: Arity::Scalar,
        apply: |img, args, stop| match *args {
            OpArgs::Scalar(delta) => super::add_channel(img, Channel::Red, delta, stop),
            _ => Err(bad_args("addred", Arity::Scalar)),
        },
    },
    OpSpec {
        name: "addgreen",
        arity: Arity::Scalar,
        apply: |img, args, stop| match *args {
            OpArgs::Scalar(delta) => super::add_channel(img, Channel::Green, delta, stop),
            _ => Err(bad_args("addgreen", Arity::Scalar)),
        },
    },
    OpSpec {
        name: "addblue",
        arity: Arity::Scalar,
        apply: |img, args, stop| match *args {
            OpArgs::Scalar(delta) => super::add_channel(img, Channel::Blue, delta, stop),
            _ => Err(bad_args("addblue", Arity::Scalar)),
        },
    },
    OpSpec {
        name: "scalered",
        arity: Arity::Factor,
        apply: |img, args, stop| match *args {
            OpArgs::Factor(factor) => super::scale_channel(img, Channel::Red, factor, stop),
            _ => Err(bad_args("scalered", Arity::Factor)),
        },
    },
    OpSpec {
        name: "scalegreen",
        arity: Arity::Factor,
        apply: |img, args, stop| match *args {
            OpArgs::Factor(factor) => super::scale_channel(img, Channel::Green, factor, stop),
            _ => Err(bad_args("scalegreen", Arity::Factor)),
        },
    },
    OpSpec {
        name: "scaleblue",
        arity: Arity::Factor,
        apply: |img, args, stop| match *args {
            OpArgs::Factor(factor) => super::scale_channel(img, Channel::Blue, factor, stop),
            _ => Err(bad_args("scaleblue", Arity::Factor)),
        },
    },
];

/// The built-in operation table.
pub fn registry() -> &'static [OpSpec] {
    REGISTRY
}

/// Look up an operation by its name token.
pub fn find_op(name: &str) -> Result<&'static OpSpec, TgaError> {
    REGISTRY
        .iter()
        .find(|op| op.name == name)
        .ok_or_else(|| TgaError::UnknownOp(String::from(name)))
}
