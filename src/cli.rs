//! Command-line interface implementation
//!
//! `serve` runs the MCP host on stdio; `check` evaluates one pair and prints
//! the JSON result.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::Error;
use crate::math::checker::check_contrast;
use crate::types::{EvaluationContext, FontWeight, UseCase, DEFAULT_FONT_SIZE_PX};

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Log filter used when neither --log-level nor RUST_LOG is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// contrast-mcp - APCA contrast checks for color pairs
#[derive(Debug, Parser)]
#[command(name = "contrast-mcp", version, about)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "contrast_mcp=trace". Falls back to RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the MCP tools over stdin/stdout (default)
    #[cfg(feature = "mcp")]
    Serve,

    /// Check contrast for one foreground/background pair
    Check {
        /// Text color (hex, rgb(), or a CSS color name)
        foreground: String,

        /// Background color
        background: String,

        /// Font size in CSS pixels
        #[arg(long, default_value_t = DEFAULT_FONT_SIZE_PX)]
        font_size: f64,

        /// normal or bold
        #[arg(long, default_value = "normal")]
        font_weight: FontWeight,

        /// body-text, large-text, ui-component, non-text, placeholder, or disabled
        #[arg(long, default_value = "body-text")]
        use_case: UseCase,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

/// Parse arguments, set up logging, and dispatch.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let code = match cli.command {
        #[cfg(feature = "mcp")]
        None | Some(Commands::Serve) => run_serve(),
        #[cfg(not(feature = "mcp"))]
        None => {
            eprintln!("Error: built without the `mcp` feature; use `check`");
            EXIT_INVALID_ARGS
        }
        Some(Commands::Check {
            foreground,
            background,
            font_size,
            font_weight,
            use_case,
            compact,
        }) => run_check(&foreground, &background, font_size, font_weight, use_case, compact),
    };
    ExitCode::from(code)
}

/// Logs always go to stderr; stdout carries protocol frames or JSON output.
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "mcp")]
fn run_serve() -> u8 {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return EXIT_ERROR;
        }
    };
    match runtime.block_on(crate::mcp::run_server()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "MCP server stopped");
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Exit 0 when the pair passes, 1 when it fails, 2 on bad input.
fn run_check(
    foreground: &str,
    background: &str,
    font_size: f64,
    font_weight: FontWeight,
    use_case: UseCase,
    compact: bool,
) -> u8 {
    match check_json(foreground, background, font_size, font_weight, use_case, compact) {
        Ok((json, passes)) => {
            println!("{json}");
            if passes {
                EXIT_SUCCESS
            } else {
                EXIT_ERROR
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_INVALID_ARGS
        }
    }
}

fn check_json(
    foreground: &str,
    background: &str,
    font_size: f64,
    font_weight: FontWeight,
    use_case: UseCase,
    compact: bool,
) -> Result<(String, bool), Error> {
    let context = EvaluationContext::new(font_size, font_weight, use_case)?;
    let result = check_contrast(foreground, background, &context)?;
    debug!(?result, "contrast checked");

    let json = render_json(&result, compact).map_err(|e| Error::Output(e.to_string()))?;
    Ok((json, result.passes))
}

fn render_json<T: Serialize>(value: &T, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}
