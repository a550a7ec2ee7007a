//! MCP check_contrast tool: APCA verdict for one color pair.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::Result;
use crate::math::checker::check_contrast;
use crate::types::{ContrastResult, EvaluationContext, FontWeight, UseCase};

/// Input parameters for the check_contrast tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckContrastInput {
    /// Text (foreground) color: hex like #333 or #1e293b, rgb(r, g, b), or a CSS color name.
    pub foreground: String,

    /// Background color, same formats as foreground.
    pub background: String,

    /// Rendered font size in CSS pixels (default: 16).
    pub font_size: Option<f64>,

    /// Font weight: "normal" or "bold" (default: normal).
    pub font_weight: Option<FontWeight>,

    /// What the pair is used for (default: body-text). Decides the required contrast.
    pub use_case: Option<UseCase>,
}

/// Execute the check_contrast tool logic.
pub fn run_check_contrast(input: &CheckContrastInput) -> Result<ContrastResult> {
    let context =
        EvaluationContext::from_parts(input.font_size, input.font_weight, input.use_case)?;
    check_contrast(&input.foreground, &input.background, &context)
}
