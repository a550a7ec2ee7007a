//! contrast-mcp - APCA contrast checks as an MCP tool server

use std::process::ExitCode;

use contrast_mcp::cli;

fn main() -> ExitCode {
    cli::run()
}
