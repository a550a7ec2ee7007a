use crate::error::{ColorArgument, Error, Result};
use crate::types::{ContrastResult, EvaluationContext, Polarity, Rating, Rgba, UseCase};

use super::threshold::resolve_minimum;

/// Below this |Lc| nothing is legible as text.
const UNUSABLE_BELOW: f64 = 15.0;
/// Below this |Lc| a pair is only good for decoration.
const DECORATIVE_BELOW: f64 = 45.0;

/// Signed perceptual contrast between two textual colors.
///
/// Positive means dark-on-light, negative light-on-dark. Implementations
/// report unparseable input as [`Error::ColorParse`].
pub trait ContrastScorer {
    fn score(&self, foreground: &str, background: &str) -> Result<f64>;
}

impl<F> ContrastScorer for F
where
    F: Fn(&str, &str) -> Result<f64>,
{
    fn score(&self, foreground: &str, background: &str) -> Result<f64> {
        self(foreground, background)
    }
}

/// APCA-W3 Lc over CSS color strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApcaScorer;

impl ApcaScorer {
    /// Parse both colors and flatten any alpha.
    /// A translucent background sits on white; the foreground then sits on
    /// the effective background.
    pub fn resolve_pair(foreground: &str, background: &str) -> Result<(Rgba, Rgba)> {
        let fg = super::color_parse::parse_color(foreground)
            .map_err(Error::color(ColorArgument::Foreground))?;
        let bg = super::color_parse::parse_color(background)
            .map_err(Error::color(ColorArgument::Background))?;

        let effective_bg = super::composite::composite_over(bg, Rgba::WHITE);
        let effective_fg = super::composite::composite_over(fg, effective_bg);
        Ok((effective_fg, effective_bg))
    }
}

impl ContrastScorer for ApcaScorer {
    fn score(&self, foreground: &str, background: &str) -> Result<f64> {
        let (fg, bg) = Self::resolve_pair(foreground, background)?;
        Ok(super::apca::calc_apca_lc(fg, bg))
    }
}

/// Check contrast for a single color pair with the APCA scorer.
pub fn check_contrast(
    foreground: &str,
    background: &str,
    context: &EvaluationContext,
) -> Result<ContrastResult> {
    check_contrast_with(&ApcaScorer, foreground, background, context)
}

/// Check contrast for a single color pair with any scorer.
///
/// Every decision uses the unrounded score; rounding only touches the
/// reported numbers.
pub fn check_contrast_with<S: ContrastScorer + ?Sized>(
    scorer: &S,
    foreground: &str,
    background: &str,
    context: &EvaluationContext,
) -> Result<ContrastResult> {
    let minimum_required =
        resolve_minimum(context.use_case(), context.font_size_px(), context.font_weight());

    let signed_score = scorer.score(foreground, background)?;
    let magnitude = signed_score.abs();

    let polarity = if signed_score >= 0.0 { Polarity::DarkOnLight } else { Polarity::LightOnDark };
    let passes = magnitude >= minimum_required;
    let recommendation =
        (!passes).then(|| recommend(magnitude, minimum_required, context.use_case()));

    Ok(ContrastResult {
        signed_score: round1(signed_score),
        magnitude: round1(magnitude),
        passes,
        minimum_required,
        polarity,
        rating: rate(magnitude),
        recommendation,
    })
}

/// Tier of |Lc| alone. Does not look at the use case.
pub fn rate(magnitude: f64) -> Rating {
    if magnitude >= 90.0 {
        Rating::Aaa
    } else if magnitude >= 75.0 {
        Rating::Aa
    } else if magnitude >= 60.0 {
        Rating::A
    } else {
        Rating::Fail
    }
}

/// Advice for a failing pair, chosen by how far off the magnitude is.
fn recommend(magnitude: f64, minimum_required: f64, use_case: UseCase) -> String {
    let deficit = ((minimum_required - magnitude).round() as i64).max(1);

    if magnitude < UNUSABLE_BELOW {
        format!(
            "Contrast is too low for any text use (Lc {}). The {} use case requires at least Lc {}.",
            round1(magnitude),
            use_case,
            minimum_required
        )
    } else if magnitude < DECORATIVE_BELOW {
        format!(
            "Only suitable for decorative or non-essential elements. \
             Increase contrast by ~{deficit} points to meet the {use_case} minimum of Lc {minimum_required}."
        )
    } else {
        format!(
            "Increase contrast by ~{deficit} points to meet the {use_case} minimum of Lc {minimum_required}. \
             Darken the darker color or lighten the lighter one."
        )
    }
}

/// Adding 0.0 turns -0.0 into 0.0.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
