use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default rendered font size in CSS pixels.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// sRGB channels plus straight alpha (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Alpha values this close to 1 are treated as opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 0.999
    }
}

/// Rendering context that decides how much contrast a pair needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    #[default]
    BodyText,
    LargeText,
    UiComponent,
    NonText,
    Placeholder,
    Disabled,
}

impl UseCase {
    pub const ALL: [UseCase; 6] = [
        UseCase::BodyText,
        UseCase::LargeText,
        UseCase::UiComponent,
        UseCase::NonText,
        UseCase::Placeholder,
        UseCase::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::BodyText => "body-text",
            UseCase::LargeText => "large-text",
            UseCase::UiComponent => "ui-component",
            UseCase::NonText => "non-text",
            UseCase::Placeholder => "placeholder",
            UseCase::Disabled => "disabled",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        UseCase::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidUseCase(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            _ => Err(Error::InvalidFontWeight(s.to_string())),
        }
    }
}

/// Everything besides the two colors that a contrast verdict depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationContext {
    font_size_px: f64,
    font_weight: FontWeight,
    use_case: UseCase,
}

impl EvaluationContext {
    /// Any finite font size is accepted; it only matters for the large-text switch.
    pub fn new(font_size_px: f64, font_weight: FontWeight, use_case: UseCase) -> Result<Self> {
        if !font_size_px.is_finite() {
            return Err(Error::InvalidFontSize(font_size_px));
        }
        Ok(Self { font_size_px, font_weight, use_case })
    }

    /// Builds a context from optional fields, filling the defaults in.
    pub fn from_parts(
        font_size_px: Option<f64>,
        font_weight: Option<FontWeight>,
        use_case: Option<UseCase>,
    ) -> Result<Self> {
        Self::new(
            font_size_px.unwrap_or(DEFAULT_FONT_SIZE_PX),
            font_weight.unwrap_or_default(),
            use_case.unwrap_or_default(),
        )
    }

    pub fn font_size_px(&self) -> f64 {
        self.font_size_px
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    pub fn use_case(&self) -> UseCase {
        self.use_case
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_weight: FontWeight::Normal,
            use_case: UseCase::BodyText,
        }
    }
}

/// Sign of the Lc score. Zero counts as dark-on-light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    DarkOnLight,
    LightOnDark,
}

/// Coarse tier of contrast magnitude alone, independent of the use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Verdict for one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// APCA Lc, rounded to one decimal.
    pub signed_score: f64,
    /// `|signed_score|`, rounded to one decimal.
    pub magnitude: f64,
    pub passes: bool,
    pub minimum_required: f64,
    pub polarity: Polarity,
    pub rating: Rating,
    /// Only set when `passes` is false.
    pub recommendation: Option<String>,
}
