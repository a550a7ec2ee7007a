use crate::types::{FontWeight, UseCase};

/// Body text at or above this size (px) counts as large.
pub const LARGE_TEXT_MIN_PX: f64 = 24.0;

pub const BODY_TEXT_MIN: f64 = 75.0;
pub const LARGE_OR_BOLD_MIN: f64 = 60.0;
pub const NON_TEXT_MIN: f64 = 45.0;

/// Fixed minimum |Lc| for every use case except body text.
fn fixed_minimum(use_case: UseCase) -> Option<f64> {
    match use_case {
        UseCase::BodyText => None,
        UseCase::LargeText | UseCase::UiComponent => Some(LARGE_OR_BOLD_MIN),
        UseCase::NonText | UseCase::Placeholder | UseCase::Disabled => Some(NON_TEXT_MIN),
    }
}

/// Minimum |Lc| a pair needs for the given rendering context.
///
/// Only body text adapts to font metrics: 24px and up, or bold, drops the
/// requirement from 75 to 60.
pub fn resolve_minimum(use_case: UseCase, font_size_px: f64, font_weight: FontWeight) -> f64 {
    if let Some(min) = fixed_minimum(use_case) {
        return min;
    }
    if font_size_px >= LARGE_TEXT_MIN_PX || font_weight == FontWeight::Bold {
        LARGE_OR_BOLD_MIN
    } else {
        BODY_TEXT_MIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_text_normal_16() {
        assert_eq!(resolve_minimum(UseCase::BodyText, 16.0, FontWeight::Normal), 75.0);
    }

    #[test]
    fn body_text_bold_drops_to_60() {
        assert_eq!(resolve_minimum(UseCase::BodyText, 16.0, FontWeight::Bold), 60.0);
    }

    #[test]
    fn body_text_24px_drops_to_60() {
        assert_eq!(resolve_minimum(UseCase::BodyText, 24.0, FontWeight::Normal), 60.0);
        assert_eq!(resolve_minimum(UseCase::BodyText, 23.9, FontWeight::Normal), 75.0);
    }

    #[test]
    fn fixed_use_cases_ignore_font_metrics() {
        for (size, weight) in [(12.0, FontWeight::Normal), (48.0, FontWeight::Bold)] {
            assert_eq!(resolve_minimum(UseCase::LargeText, size, weight), 60.0);
            assert_eq!(resolve_minimum(UseCase::UiComponent, size, weight), 60.0);
            assert_eq!(resolve_minimum(UseCase::NonText, size, weight), 45.0);
            assert_eq!(resolve_minimum(UseCase::Placeholder, size, weight), 45.0);
            assert_eq!(resolve_minimum(UseCase::Disabled, size, weight), 45.0);
        }
    }

    #[test]
    fn placeholder_14px() {
        assert_eq!(resolve_minimum(UseCase::Placeholder, 14.0, FontWeight::Normal), 45.0);
    }

    #[test]
    fn every_minimum_is_positive() {
        for use_case in UseCase::ALL {
            assert!(resolve_minimum(use_case, 16.0, FontWeight::Normal) > 0.0);
        }
    }
}
