//! MCP tool definitions
//!
//! Each tool has a typed input schema; the handler in `server.rs` wraps the
//! library call and turns errors into tool-level error results.

pub mod check_contrast;
pub mod placeholders;
