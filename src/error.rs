use std::fmt;

use thiserror::Error;

/// Why a color string could not be turned into channel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    /// `transparent`, `currentColor` and friends have no fixed value to measure.
    #[error("'{0}' is a CSS keyword without a fixed color value")]
    Keyword(String),
    #[error("invalid hex color '{0}', expected 3, 4, 6, or 8 hex digits")]
    InvalidHex(String),
    #[error("'{0}' is not a recognized color format")]
    Unrecognized(String),
}

/// Which side of the pair an argument error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArgument {
    Foreground,
    Background,
}

impl fmt::Display for ColorArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorArgument::Foreground => f.write_str("foreground"),
            ColorArgument::Background => f.write_str("background"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid {argument} color: {source}")]
    ColorParse {
        argument: ColorArgument,
        #[source]
        source: ColorParseError,
    },
    #[error(
        "invalid use case '{0}', expected one of: body-text, large-text, ui-component, \
         non-text, placeholder, disabled"
    )]
    InvalidUseCase(String),
    #[error("invalid font weight '{0}', expected 'normal' or 'bold'")]
    InvalidFontWeight(String),
    #[error("invalid font size {0}, expected a finite number of pixels")]
    InvalidFontSize(f64),
    #[error("failed to serialize result: {0}")]
    Output(String),
}

impl Error {
    pub(crate) fn color(argument: ColorArgument) -> impl FnOnce(ColorParseError) -> Error {
        move |source| Error::ColorParse { argument, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
