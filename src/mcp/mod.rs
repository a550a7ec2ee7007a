//! MCP (Model Context Protocol) server for contrast checks
//!
//! Exposes the contrast checker as an MCP tool, next to placeholder tools for
//! palette work that are registered but not implemented yet.
//!
//! Start the server with `contrast-mcp serve` (feature-gated).

mod server;
pub mod tools;

pub use server::{run_server, ContrastMcpServer};
