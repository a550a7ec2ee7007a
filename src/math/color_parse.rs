use csscolorparser::Color;

use crate::error::ColorParseError;
use crate::types::Rgba;

/// Parse a CSS color value into channels.
/// Handles: hex with or without `#`, rgb/rgba, hsl, hwb, oklch, named colors.
/// Keywords without a fixed value (transparent, currentColor, ...) are rejected.
pub fn parse_color(value: &str) -> Result<Rgba, ColorParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(ColorParseError::Keyword(trimmed.to_string()));
        }
        _ => {}
    }

    if let Some(raw) = trimmed.strip_prefix('#') {
        return super::hex::parse_hex_digits(raw);
    }
    if super::hex::looks_like_hex(trimmed) {
        return super::hex::parse_hex_digits(trimmed);
    }

    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Ok(Rgba { r, g, b, a: color.a.clamp(0.0, 1.0) as f64 })
        }
        Err(_) => Err(ColorParseError::Unrecognized(trimmed.to_string())),
    }
}
