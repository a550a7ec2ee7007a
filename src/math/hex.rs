use crate::error::ColorParseError;
use crate::types::Rgba;

/// True when `raw` (without `#`) has the shape of a hex color.
pub fn looks_like_hex(raw: &str) -> bool {
    matches!(raw.len(), 3 | 4 | 6 | 8) && raw.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse hex digits (no leading `#`) into channels.
/// 3/4-digit forms are doubled, 4/8-digit forms carry alpha.
pub fn parse_hex_digits(raw: &str) -> Result<Rgba, ColorParseError> {
    if !looks_like_hex(raw) {
        return Err(ColorParseError::InvalidHex(format!("#{raw}")));
    }

    let expanded: String = if raw.len() <= 4 {
        raw.chars().flat_map(|c| [c, c]).collect()
    } else {
        raw.to_string()
    };

    let byte = |i: usize| -> Result<u8, ColorParseError> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidHex(format!("#{raw}")))
    };

    let a = if expanded.len() == 8 { byte(6)? as f64 / 255.0 } else { 1.0 };
    Ok(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(parse_hex_digits("ff0000").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_hex_digits("1e293b").unwrap(), Rgba::opaque(30, 41, 59));
    }

    #[test]
    fn parse_3digit_hex_doubles() {
        assert_eq!(parse_hex_digits("f0a").unwrap(), Rgba::opaque(255, 0, 170));
    }

    #[test]
    fn parse_8digit_hex_keeps_alpha() {
        let c = parse_hex_digits("ff000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert!((c.a - 0.502).abs() < 0.01); // 128/255 ~ 0.502
    }

    #[test]
    fn parse_4digit_hex_keeps_alpha() {
        let c = parse_hex_digits("000f").unwrap();
        assert!(c.is_opaque());
    }

    #[test]
    fn malformed_is_an_error() {
        assert_eq!(
            parse_hex_digits("xyz"),
            Err(ColorParseError::InvalidHex("#xyz".to_string()))
        );
        assert!(parse_hex_digits("fffff").is_err());
        assert!(parse_hex_digits("").is_err());
    }
}
