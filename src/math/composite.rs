use crate::types::Rgba;

/// Alpha-composite a foreground color over an opaque backdrop.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// The backdrop's own alpha is ignored; the result is always opaque.
pub fn composite_over(fg: Rgba, backdrop: Rgba) -> Rgba {
    if fg.is_opaque() {
        return Rgba { a: 1.0, ..fg };
    }

    let alpha = fg.a.clamp(0.0, 1.0);
    let blend = |f: u8, b: u8| -> u8 {
        let result = f as f64 * alpha + b as f64 * (1.0 - alpha);
        result.round() as u8
    };

    Rgba::opaque(blend(fg.r, backdrop.r), blend(fg.g, backdrop.g), blend(fg.b, backdrop.b))
}
