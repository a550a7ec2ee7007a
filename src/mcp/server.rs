//! Core MCP server implementation.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use tracing::{debug, info, warn};

use super::tools::check_contrast::{run_check_contrast, CheckContrastInput};
use super::tools::placeholders::{
    not_implemented, ExportTokensInput, GeneratePaletteInput, ScanCodebaseColorsInput,
    SimulateColorblindnessInput,
};

/// The contrast MCP server.
///
/// Owns the router of named tool handlers. Build one per transport; the
/// contrast checker itself holds no state.
#[derive(Debug, Clone)]
pub struct ContrastMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ContrastMcpServer {
    pub fn new() -> Self {
        Self { tool_router: Self::tool_router() }
    }

    #[tool(
        name = "check_contrast",
        description = "Check APCA contrast between a foreground and background color. \
                       Returns the signed Lc score, magnitude, polarity, AAA/AA/A/fail rating, \
                       whether it meets the minimum for the use case, and a recommendation \
                       when it does not."
    )]
    fn check_contrast(
        &self,
        Parameters(input): Parameters<CheckContrastInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            foreground = %input.foreground,
            background = %input.background,
            "check_contrast called"
        );
        match run_check_contrast(&input) {
            Ok(result) => {
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(e) => {
                warn!(error = %e, "check_contrast rejected input");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    #[tool(
        name = "generate_palette",
        description = "Generate an accessible palette from a base color (not implemented yet)."
    )]
    fn generate_palette(
        &self,
        Parameters(_input): Parameters<GeneratePaletteInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(placeholder("generate_palette"))
    }

    #[tool(
        name = "simulate_colorblindness",
        description = "Simulate how colors appear with color vision deficiencies (not implemented yet)."
    )]
    fn simulate_colorblindness(
        &self,
        Parameters(_input): Parameters<SimulateColorblindnessInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(placeholder("simulate_colorblindness"))
    }

    #[tool(
        name = "export_tokens",
        description = "Export color tokens as CSS, SCSS, JSON, or Tailwind config (not implemented yet)."
    )]
    fn export_tokens(
        &self,
        Parameters(_input): Parameters<ExportTokensInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(placeholder("export_tokens"))
    }

    #[tool(
        name = "scan_codebase_colors",
        description = "Scan a directory for color literals and check their contrast (not implemented yet)."
    )]
    fn scan_codebase_colors(
        &self,
        Parameters(_input): Parameters<ScanCodebaseColorsInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(placeholder("scan_codebase_colors"))
    }
}

impl Default for ContrastMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder(tool: &str) -> CallToolResult {
    debug!(tool, "placeholder tool called");
    CallToolResult::error(vec![Content::text(not_implemented(tool))])
}

#[tool_handler]
impl ServerHandler for ContrastMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "contrast-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Contrast MCP server. Checks whether color pairs are readable using APCA. \
                 Use check_contrast with a foreground, background, and optional fontSize, \
                 fontWeight, and useCase. Palette, colorblindness, export, and scan tools \
                 are listed but not implemented yet."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdin/stdout until the client disconnects.
pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let server = ContrastMcpServer::new();
    info!(version = env!("CARGO_PKG_VERSION"), "serving contrast tools on stdio");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    info!("client disconnected, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check(json: serde_json::Value) -> CallToolResult {
        let input: CheckContrastInput = serde_json::from_value(json).unwrap();
        ContrastMcpServer::new().check_contrast(Parameters(input)).unwrap()
    }

    #[test]
    fn registers_all_tools() {
        let server = ContrastMcpServer::new();
        let names: Vec<String> =
            server.tool_router.list_all().into_iter().map(|t| t.name.to_string()).collect();
        for expected in [
            "check_contrast",
            "generate_palette",
            "simulate_colorblindness",
            "export_tokens",
            "scan_codebase_colors",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}: {names:?}");
        }
    }

    #[test]
    fn check_contrast_returns_json_result() {
        let result = check(serde_json::json!({ "foreground": "#000", "background": "#fff" }));
        assert_ne!(result.is_error, Some(true));
        let value: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(value["passes"], true);
        assert_eq!(value["polarity"], "dark-on-light");
        assert_eq!(value["rating"], "AAA");
        assert!(value["recommendation"].is_null());
        assert!(value["magnitude"].as_f64().unwrap() > 100.0);
    }

    #[test]
    fn check_contrast_failing_pair_has_recommendation() {
        let result = check(serde_json::json!({ "foreground": "#808080", "background": "#858585" }));
        let value: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(value["passes"], false);
        assert!(value["recommendation"].as_str().unwrap().contains("too low"));
    }

    #[test]
    fn bad_color_is_a_tool_error() {
        let result = check(serde_json::json!({ "foreground": "nope", "background": "#fff" }));
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("invalid foreground color"));
    }

    #[test]
    fn server_keeps_working_after_a_bad_call() {
        let server = ContrastMcpServer::new();
        let bad: CheckContrastInput =
            serde_json::from_value(serde_json::json!({ "foreground": "#12", "background": "#fff" }))
                .unwrap();
        let good: CheckContrastInput =
            serde_json::from_value(serde_json::json!({ "foreground": "#000", "background": "#fff" }))
                .unwrap();
        assert_eq!(server.check_contrast(Parameters(bad)).unwrap().is_error, Some(true));
        assert_ne!(server.check_contrast(Parameters(good)).unwrap().is_error, Some(true));
    }

    #[test]
    fn placeholders_report_not_implemented() {
        let server = ContrastMcpServer::new();
        let input: ScanCodebaseColorsInput =
            serde_json::from_value(serde_json::json!({ "path": "." })).unwrap();
        let result = server.scan_codebase_colors(Parameters(input)).unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "scan_codebase_colors is not implemented yet");
    }

    #[test]
    fn info_advertises_tools() {
        let info = ContrastMcpServer::new().get_info();
        assert_eq!(info.server_info.name, "contrast-mcp");
        assert!(info.capabilities.tools.is_some());
    }
}
