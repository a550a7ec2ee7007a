//! Input schemas for tools that are advertised but not implemented yet.
//!
//! The schemas are stable so clients can discover the tools; every call
//! returns a tool-level error naming the tool.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePaletteInput {
    /// Seed color for the palette.
    pub base_color: String,

    /// Harmony rule, e.g. "complementary", "analogous", "triadic".
    pub harmony: Option<String>,

    /// Number of colors to generate.
    pub count: Option<u8>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulateColorblindnessInput {
    /// Colors to transform.
    pub colors: Vec<String>,

    /// Deficiency type, e.g. "protanopia", "deuteranopia", "tritanopia".
    pub deficiency: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportTokensInput {
    /// Token name to color value.
    pub tokens: BTreeMap<String, String>,

    /// Output format, e.g. "css", "scss", "json", "tailwind".
    pub format: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanCodebaseColorsInput {
    /// Directory to scan for color literals.
    pub path: String,
}

/// Message returned by every placeholder tool.
pub fn not_implemented(tool: &str) -> String {
    format!("{tool} is not implemented yet")
}
